use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id in the session; the request is not authenticated.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists (deleted account
    /// with a stale session cookie).
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The authenticated user's role is below the tier the route requires.
    ///
    /// # Fields
    /// - User id of the caller
    /// - Description of the denied operation, for server-side logging
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login failed. Covers both unknown email and wrong password so the
    /// response does not reveal which accounts exist.
    #[error("Invalid login credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Session and lookup failures map to 401 so the client knows to (re)login;
/// role failures map to 403; credential failures map to 400 with a message
/// that does not distinguish unknown emails from wrong passwords.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to do that.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You don't have permission to do that.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Invalid email or password.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
