use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, project::ProjectRepository},
    error::{auth::AuthError, AppError},
    model::{
        comment::{Comment, CommentWithAuthor, PaginatedComments},
        user::{Role, User},
    },
};

/// Longest accepted comment body.
const MAX_COMMENT_LENGTH: usize = 2000;

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets paginated comments for a project, newest first.
    pub async fn get_by_project_paginated(
        &self,
        project_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedComments, AppError> {
        let comment_repo = CommentRepository::new(self.db);
        let project_repo = ProjectRepository::new(self.db);

        if project_repo.find_by_id(project_id).await?.is_none() {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        let (rows, total) = comment_repo
            .get_by_project_paginated(project_id, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        let comments = rows
            .into_iter()
            .map(|(comment, author)| CommentWithAuthor {
                comment: Comment::from_entity(comment),
                author,
            })
            .collect();

        Ok(PaginatedComments {
            comments,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Posts a comment on a project.
    ///
    /// # Returns
    /// - `Ok(CommentWithAuthor)` - The stored comment with the caller as author
    /// - `Err(AppError::NotFound)` - Project does not exist
    /// - `Err(AppError::BadRequest)` - Empty or overlong body
    pub async fn create(
        &self,
        project_id: i32,
        author: &User,
        body: &str,
    ) -> Result<CommentWithAuthor, AppError> {
        let comment_repo = CommentRepository::new(self.db);
        let project_repo = ProjectRepository::new(self.db);

        if project_repo.find_by_id(project_id).await?.is_none() {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        let body = body.trim().to_string();
        if body.is_empty() {
            return Err(AppError::BadRequest("A comment body is required.".to_string()));
        }
        if body.len() > MAX_COMMENT_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Comments are limited to {} characters.",
                MAX_COMMENT_LENGTH
            )));
        }

        let comment = comment_repo.create(project_id, author.id, body).await?;

        // Re-fetch the author row so the DTO carries consistent entity data.
        let author_entity = crate::server::data::user::UserRepository::new(self.db)
            .find_by_id(author.id)
            .await?;

        Ok(CommentWithAuthor {
            comment: Comment::from_entity(comment),
            author: author_entity,
        })
    }

    /// Deletes a comment.
    ///
    /// The author can delete their own comments; staff can delete any.
    pub async fn delete(&self, comment_id: i32, caller: &User) -> Result<(), AppError> {
        let comment_repo = CommentRepository::new(self.db);

        let Some(comment) = comment_repo.find_by_id(comment_id).await? else {
            return Err(AppError::NotFound("Comment not found".to_string()));
        };

        if comment.author_id != caller.id && caller.role < Role::Staff {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("attempted to delete comment {} owned by another user", comment_id),
            )
            .into());
        }

        comment_repo.delete(comment_id).await?;

        Ok(())
    }
}
