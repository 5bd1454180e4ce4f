//! User data repository for database operations.
//!
//! Handles account creation, lookups, role changes, and team membership
//! updates. Emails are stored lowercased; callers are expected to normalize
//! before querying (see `util::parse::normalize_email`).

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use chrono::Utc;

use crate::server::model::user::{CreateUserParams, Role};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user entity
    /// - `Err(DbErr)` - Database error, including unique violations on email
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            name: ActiveValue::Set(params.name),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            avatar_path: ActiveValue::Set(None),
            team_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets all users with pagination, ordered alphabetically by name.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page).await?;

        Ok((users, total))
    }

    /// Gets all members of a team, ordered alphabetically by name.
    pub async fn find_by_team(&self, team_id: i32) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::TeamId.eq(team_id))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await
    }

    /// Sets the permission tier for a user.
    ///
    /// No-op if the user does not exist.
    pub async fn set_role(&self, id: i32, role: Role) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::Role,
                sea_orm::sea_query::Expr::value(role.as_str()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn update_name(&self, id: i32, name: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::Name,
                sea_orm::sea_query::Expr::value(name),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn set_avatar(&self, id: i32, avatar_path: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::AvatarPath,
                sea_orm::sea_query::Expr::value(avatar_path),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets or clears the user's team membership.
    pub async fn set_team(&self, id: i32, team_id: Option<i32>) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::TeamId,
                sea_orm::sea_query::Expr::value(team_id),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used during startup to decide whether to generate a one-time setup code
    /// for first-admin registration.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}
