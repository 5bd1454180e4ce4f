//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .email("ada@example.edu")
///     .role("staff")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    name: String,
    role: String,
    team_id: Option<i32>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.edu"` where id is auto-incremented
    /// - name: `"User {id}"`
    /// - role: `"visitor"`
    /// - team_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.edu", id),
            name: format!("User {}", id),
            role: "visitor".to_string(),
            team_id: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn team_id(mut self, team_id: i32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// The password hash is a fixed placeholder; tests exercising real
    /// password verification should hash their own.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set("$argon2-test-placeholder$".to_string()),
            name: ActiveValue::Set(self.name),
            role: ActiveValue::Set(self.role),
            avatar_path: ActiveValue::Set(None),
            team_id: ActiveValue::Set(self.team_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visitor user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a capstone student belonging to the given team.
pub async fn create_user_in_team(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .role("capstone_student")
        .team_id(team_id)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Team)
            .with_table(User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(!user.email.is_empty());
        assert!(!user.name.is_empty());
        assert_eq!(user.role, "visitor");
        assert!(user.team_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Team)
            .with_table(User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.email, user2.email);
        assert_ne!(user1.name, user2.name);

        Ok(())
    }
}
