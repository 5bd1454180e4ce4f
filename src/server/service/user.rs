//! User service for account management business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, user::UserRepository},
    error::AppError,
    model::user::{PaginatedUsers, Role, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, id: i32) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let entity = user_repo.find_by_id(id).await?;

        entity.map(User::from_entity).transpose()
    }

    /// Retrieves all users with pagination, ordered alphabetically by name.
    pub async fn get_all_users(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (entities, total) = user_repo.get_all_paginated(page, per_page).await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        let users: Result<Vec<_>, _> = entities.into_iter().map(User::from_entity).collect();

        Ok(PaginatedUsers {
            users: users?,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Sets a user's permission tier.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The user with their new role
    /// - `Ok(None)` - No user with that id
    pub async fn set_role(&self, id: i32, role: Role) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        user_repo.set_role(id, role).await?;

        let entity = user_repo.find_by_id(id).await?;
        entity.map(User::from_entity).transpose()
    }

    /// Updates the caller's display name.
    pub async fn update_profile(&self, id: i32, name: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("A display name is required.".to_string()));
        }

        user_repo.update_name(id, name).await?;

        let entity = user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        User::from_entity(entity)
    }

    /// Records a freshly stored avatar path on the user row.
    pub async fn set_avatar(&self, id: i32, avatar_path: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo.set_avatar(id, avatar_path).await?;

        let entity = user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        User::from_entity(entity)
    }

    /// Deletes an account.
    ///
    /// Accounts that still have authored comments cannot be removed; the
    /// comments must be moderated away first so project discussions don't
    /// lose context silently.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted; likes and favorites cascade away
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - User still has authored comments
    pub async fn delete_user(&self, id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let comment_repo = CommentRepository::new(self.db);

        if user_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let comment_count = comment_repo.count_by_author(id).await?;
        if comment_count > 0 {
            return Err(AppError::Conflict(format!(
                "User still has {} comments; delete those first.",
                comment_count
            )));
        }

        user_repo.delete(id).await?;

        Ok(())
    }
}
