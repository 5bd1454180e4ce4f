//! Authentication and authorization guard for request handlers.
//!
//! Controllers construct an `AuthGuard` from the request's session and call
//! `require` with the permissions the route needs. The guard resolves the
//! session to a user row, parses its role, and checks every permission,
//! returning the domain user on success so handlers don't have to re-fetch it.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{project::ProjectRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Role, User},
};

pub enum Permission {
    /// Caller must be a capstone student or above.
    CapstoneStudent,
    /// Caller must be staff or above.
    Staff,
    /// Caller must be an admin.
    Admin,
    /// Caller must be allowed to edit the given project: a member of the
    /// owning team, or staff or above.
    ProjectEditor(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session to a user and checks the required permissions.
    ///
    /// Passing an empty slice only requires the caller to be logged in.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user meeting every permission
    /// - `Err(AppError::AuthErr(UserNotInSession))` - Not logged in (401)
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Stale session (401)
    /// - `Err(AppError::AuthErr(AccessDenied))` - Tier too low (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(entity) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let user = User::from_entity(entity)?;

        for permission in permissions {
            match permission {
                Permission::CapstoneStudent => {
                    self.require_tier(&user, Role::CapstoneStudent)?;
                }
                Permission::Staff => {
                    self.require_tier(&user, Role::Staff)?;
                }
                Permission::Admin => {
                    self.require_tier(&user, Role::Admin)?;
                }
                Permission::ProjectEditor(project_id) => {
                    self.require_project_editor(&user, *project_id).await?;
                }
            }
        }

        Ok(user)
    }

    fn require_tier(&self, user: &User, tier: Role) -> Result<(), AppError> {
        if user.role < tier {
            return Err(AuthError::AccessDenied(
                user.id,
                format!(
                    "role {} is below the required tier {}",
                    user.role, tier
                ),
            )
            .into());
        }
        Ok(())
    }

    /// Staff and admins can edit any project; students only their own team's.
    async fn require_project_editor(&self, user: &User, project_id: i32) -> Result<(), AppError> {
        if user.role >= Role::Staff {
            return Ok(());
        }

        let project_repo = ProjectRepository::new(self.db);
        let Some(project) = project_repo.find_by_id(project_id).await? else {
            return Err(AppError::NotFound("Project not found".to_string()));
        };

        if user.team_id != Some(project.team_id) {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("not a member of the team owning project {}", project_id),
            )
            .into());
        }

        Ok(())
    }
}
