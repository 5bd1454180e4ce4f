use chrono::{DateTime, Utc};

use crate::model::comment::{CommentAuthorDto, CommentDto, PaginatedCommentsDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub project_id: i32,
    pub author_id: i32,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            project_id: entity.project_id,
            author_id: entity.author_id,
            body: entity.body,
            created_at: entity.created_at,
        }
    }
}

/// Comment joined with the author's display data.
///
/// The author is optional to tolerate rows whose author lookup failed; the
/// DTO then renders without attribution rather than erroring the whole page.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: Option<entity::user::Model>,
}

impl CommentWithAuthor {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.comment.id,
            project_id: self.comment.project_id,
            author: self.author.map(|a| CommentAuthorDto {
                id: a.id,
                name: a.name,
                avatar_path: a.avatar_path,
            }),
            body: self.comment.body,
            created_at: self.comment.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedComments {
    pub comments: Vec<CommentWithAuthor>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedComments {
    pub fn into_dto(self) -> PaginatedCommentsDto {
        PaginatedCommentsDto {
            comments: self.comments.into_iter().map(|c| c.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
