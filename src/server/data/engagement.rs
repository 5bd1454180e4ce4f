//! Like and favorite data repository.
//!
//! Stores one row per (user, project) engagement and maintains the
//! denormalized counters on the project row via relative updates, so two
//! different users toggling concurrently cannot lose each other's count.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait,
    QueryFilter, QueryOrder,
};

pub struct EngagementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EngagementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_like(
        &self,
        user_id: i32,
        project_id: i32,
    ) -> Result<Option<entity::project_like::Model>, DbErr> {
        entity::prelude::ProjectLike::find()
            .filter(entity::project_like::Column::UserId.eq(user_id))
            .filter(entity::project_like::Column::ProjectId.eq(project_id))
            .one(self.db)
            .await
    }

    pub async fn create_like(&self, user_id: i32, project_id: i32) -> Result<(), DbErr> {
        entity::project_like::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            project_id: ActiveValue::Set(project_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    pub async fn delete_like(&self, like_id: i32) -> Result<(), DbErr> {
        entity::prelude::ProjectLike::delete_by_id(like_id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Adjusts the project's like counter by `delta` (positive or negative).
    pub async fn adjust_like_count(&self, project_id: i32, delta: i32) -> Result<(), DbErr> {
        entity::prelude::Project::update_many()
            .filter(entity::project::Column::Id.eq(project_id))
            .col_expr(
                entity::project::Column::Likes,
                sea_orm::sea_query::Expr::col(entity::project::Column::Likes).add(delta),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn find_favorite(
        &self,
        user_id: i32,
        project_id: i32,
    ) -> Result<Option<entity::project_favorite::Model>, DbErr> {
        entity::prelude::ProjectFavorite::find()
            .filter(entity::project_favorite::Column::UserId.eq(user_id))
            .filter(entity::project_favorite::Column::ProjectId.eq(project_id))
            .one(self.db)
            .await
    }

    pub async fn create_favorite(&self, user_id: i32, project_id: i32) -> Result<(), DbErr> {
        entity::project_favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            project_id: ActiveValue::Set(project_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    pub async fn delete_favorite(&self, favorite_id: i32) -> Result<(), DbErr> {
        entity::prelude::ProjectFavorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Adjusts the project's favorite counter by `delta`.
    pub async fn adjust_favorite_count(&self, project_id: i32, delta: i32) -> Result<(), DbErr> {
        entity::prelude::Project::update_many()
            .filter(entity::project::Column::Id.eq(project_id))
            .col_expr(
                entity::project::Column::Favorites,
                sea_orm::sea_query::Expr::col(entity::project::Column::Favorites).add(delta),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets the projects a user has favorited, most recently favorited first.
    pub async fn favorite_projects_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::project::Model>, DbErr> {
        let favorites = entity::prelude::ProjectFavorite::find()
            .filter(entity::project_favorite::Column::UserId.eq(user_id))
            .order_by_desc(entity::project_favorite::Column::CreatedAt)
            .all(self.db)
            .await?;

        let project_ids: Vec<i32> = favorites.iter().map(|f| f.project_id).collect();
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut projects = entity::prelude::Project::find()
            .filter(entity::project::Column::Id.is_in(project_ids.clone()))
            .all(self.db)
            .await?;

        // Preserve the favorited-at ordering from the first query.
        projects.sort_by_key(|p| {
            project_ids
                .iter()
                .position(|id| *id == p.id)
                .unwrap_or(usize::MAX)
        });

        Ok(projects)
    }
}
