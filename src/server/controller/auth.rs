use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::user::{LoginDto, RegisterDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::{AuthService, RegisterParams},
        state::AppState,
    },
};

/// POST /api/auth/register - Create an account and log it in
///
/// The new account's role is decided server-side: a valid setup code grants
/// admin, a roster match grants capstone student, anything else registers as
/// a visitor.
///
/// # Returns
/// - `201 Created`: JSON UserDto for the new account, session established
/// - `400 Bad Request`: Invalid email, name, password, or setup code
/// - `409 Conflict`: An account with this email already exists
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.setup_codes);

    let user = auth_service
        .register(RegisterParams {
            email: payload.email,
            password: payload.password,
            name: payload.name,
            setup_code: payload.setup_code,
        })
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /api/auth/login - Authenticate with email and password
///
/// # Returns
/// - `200 OK`: JSON UserDto, session established
/// - `400 Bad Request`: Unknown email or wrong password
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.setup_codes);

    let user = auth_service.login(&payload.email, &payload.password).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /api/auth/logout - Clear the caller's session
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::OK)
}

/// GET /api/auth/user - Get the currently logged-in user
///
/// # Returns
/// - `200 OK`: JSON UserDto for the session's user
/// - `401 Unauthorized`: Not logged in
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
