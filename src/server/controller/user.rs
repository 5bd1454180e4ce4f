use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::user::{AvatarDto, SetRoleDto, UpdateProfileDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::Role,
        service::{
            media::MediaKind,
            project::ProjectService,
            user::UserService,
        },
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}

/// GET /api/users - Get all users with pagination
///
/// # Access Control
/// - `Staff` - Staff and admins can browse the user base
///
/// # Returns
/// - `200 OK`: PaginatedUsersDto
/// - `401 Unauthorized` / `403 Forbidden`: Not logged in / below staff
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let user_service = UserService::new(&state.db);
    let users = user_service
        .get_all_users(params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// GET /api/users/{id} - Get a single user
///
/// # Access Control
/// - `Staff`
pub async fn get_user_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let user_service = UserService::new(&state.db);
    let user = user_service
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// PUT /api/users/{id}/role - Set a user's permission tier
///
/// # Access Control
/// - `Admin` - Only admins can change roles
///
/// # Returns
/// - `200 OK`: Updated UserDto
/// - `400 Bad Request`: Unknown role string
/// - `404 Not Found`: No such user
pub async fn set_user_role(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<SetRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let role: Role = payload
        .role
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Unknown role '{}'", payload.role)))?;

    let user_service = UserService::new(&state.db);
    let user = user_service
        .set_role(user_id, role)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// DELETE /api/users/{id} - Delete an account
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content`: Deleted
/// - `404 Not Found`: No such user
/// - `409 Conflict`: User still has authored comments
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user_service = UserService::new(&state.db);
    user_service.delete_user(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/user/profile - Update the caller's display name
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user_service = UserService::new(&state.db);
    let updated = user_service.update_profile(user.id, &payload.name).await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// POST /api/user/avatar - Upload the caller's avatar image
///
/// Multipart upload; the image goes in a `file` field. Accepts png, jpeg,
/// gif, and webp up to 5 MiB.
///
/// # Returns
/// - `200 OK`: AvatarDto with the stored media path
/// - `400 Bad Request`: Missing file field, unsupported type, or oversized
pub async fn upload_avatar(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let mut stored: Option<String> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field.bytes().await?;

        stored = Some(
            state
                .media
                .store(MediaKind::Avatar, &content_type, &data)
                .await?,
        );
        break;
    }

    let avatar_path = stored
        .ok_or_else(|| AppError::BadRequest("Missing 'file' field in upload.".to_string()))?;

    let user_service = UserService::new(&state.db);
    user_service.set_avatar(user.id, &avatar_path).await?;

    Ok((StatusCode::OK, Json(AvatarDto { avatar_path })))
}

/// GET /api/user/favorites - Get the caller's favorited projects
pub async fn get_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let project_service = ProjectService::new(&state.db);
    let favorites = project_service.favorites_for_user(user.id).await?;

    let favorites_dto: Vec<_> = favorites.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(favorites_dto)))
}
