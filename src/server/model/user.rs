//! User domain models and permission tiers.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use crate::{
    model::user::{PaginatedUsersDto, UserDto},
    server::error::{internal::InternalError, AppError},
};

/// Ordered permission tiers.
///
/// The derive order matters: `Ord` follows declaration order, so a guard can
/// check `user.role >= Role::Staff` to admit both staff and admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    Visitor,
    CapstoneStudent,
    Staff,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Visitor => "visitor",
            Role::CapstoneStudent => "capstone_student",
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "visitor" => Ok(Role::Visitor),
            "capstone_student" => Ok(Role::CapstoneStudent),
            "staff" => Ok(Role::Staff),
            "admin" => Ok(Role::Admin),
            other => Err(InternalError::UnknownRole {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform account with its permission tier and optional team membership.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub avatar_path: Option<String>,
    pub team_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the service boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownRole))` - The stored role string is
    ///   not one of the known tiers
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = crate::server::util::parse::parse_role_from_string(&entity.role)?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role,
            avatar_path: entity.avatar_path,
            team_id: entity.team_id,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.as_str().to_string(),
            avatar_path: self.avatar_path,
            team_id: self.team_id,
        }
    }
}

/// Parameters for creating a new account during registration.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    /// Lowercased email address.
    pub email: String,
    /// Argon2 PHC-format password hash.
    pub password_hash: String,
    pub name: String,
    pub role: Role,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(|u| u.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_tiers_are_ordered() {
        assert!(Role::Visitor < Role::CapstoneStudent);
        assert!(Role::CapstoneStudent < Role::Staff);
        assert!(Role::Staff < Role::Admin);
    }

    #[test]
    fn role_round_trips_through_strings() {
        for role in [
            Role::Visitor,
            Role::CapstoneStudent,
            Role::Staff,
            Role::Admin,
        ] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_string_is_rejected() {
        assert!("superuser".parse::<Role>().is_err());
    }
}
