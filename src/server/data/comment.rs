use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        project_id: i32,
        author_id: i32,
        body: String,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            author_id: ActiveValue::Set(author_id),
            body: ActiveValue::Set(body),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(id).one(self.db).await
    }

    /// Gets paginated comments for a project with their authors, newest first.
    ///
    /// # Returns
    /// - `Ok((rows, total))` - (comment, author) pairs for the page and the
    ///   total comment count for the project
    /// - `Err(DbErr)` - Database error during the lookup
    pub async fn get_by_project_paginated(
        &self,
        project_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<
        (
            Vec<(entity::comment::Model, Option<entity::user::Model>)>,
            u64,
        ),
        DbErr,
    > {
        let paginator = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ProjectId.eq(project_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::comment::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let comments = paginator.fetch_page(page).await?;

        Ok((comments, total))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Counts comments authored by a user, across all projects.
    ///
    /// Used before account deletion: accounts with surviving comments cannot
    /// be removed until the comments are moderated away.
    pub async fn count_by_author(&self, author_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await
    }
}
