//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories generate unique values from a shared counter so tests
//! never collide on unique columns.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let semester = factory::semester::create_semester(&db).await?;
//!     let team = factory::team::create_team(&db, semester.id).await?;
//!
//!     // Create a full project hierarchy in one call
//!     let (semester, team, project) =
//!         factory::helpers::create_project_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("ada@example.edu")
//!     .role("staff")
//!     .build()
//!     .await?;
//! ```

pub mod award;
pub mod category;
pub mod comment;
pub mod helpers;
pub mod project;
pub mod registered_student;
pub mod semester;
pub mod tag;
pub mod team;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use award::create_award;
pub use category::create_category;
pub use comment::create_comment;
pub use project::create_project;
pub use registered_student::create_registered_student;
pub use semester::create_semester;
pub use tag::create_tag;
pub use team::create_team;
pub use user::{create_user, create_user_in_team};
