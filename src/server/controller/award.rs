use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        award::{AwardDto, CreateAwardDto, GrantAwardDto, UpdateAwardDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::award::AwardParams,
        service::{award::AwardService, media::MediaKind},
        state::AppState,
    },
};

/// Tag for grouping award endpoints in OpenAPI documentation
pub static AWARD_TAG: &str = "award";

/// List all awards.
#[utoipa::path(
    get,
    path = "/api/awards",
    tag = AWARD_TAG,
    responses(
        (status = 200, description = "All awards, alphabetical", body = Vec<AwardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_awards(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = AwardService::new(&state.db);

    let awards = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(awards.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a new award.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/awards",
    tag = AWARD_TAG,
    request_body = CreateAwardDto,
    responses(
        (status = 201, description = "Successfully created award", body = AwardDto),
        (status = 400, description = "Invalid award data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User below staff tier", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_award(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAwardDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = AwardService::new(&state.db);

    let award = service
        .create(AwardParams {
            name: payload.name,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(award.into_dto())))
}

/// Update an award's name and description.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    put,
    path = "/api/awards/{id}",
    tag = AWARD_TAG,
    params(
        ("id" = i32, Path, description = "Award ID")
    ),
    request_body = UpdateAwardDto,
    responses(
        (status = 200, description = "Successfully updated award", body = AwardDto),
        (status = 400, description = "Invalid award data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User below staff tier", body = ErrorDto),
        (status = 404, description = "Award not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_award(
    State(state): State<AppState>,
    session: Session,
    Path(award_id): Path<i32>,
    Json(payload): Json<UpdateAwardDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = AwardService::new(&state.db);

    let award = service
        .update(
            award_id,
            AwardParams {
                name: payload.name,
                description: payload.description,
            },
        )
        .await?;

    match award {
        Some(award) => Ok((StatusCode::OK, Json(award.into_dto()))),
        None => Err(AppError::NotFound("Award not found".to_string())),
    }
}

/// Delete an award.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/awards/{id}",
    tag = AWARD_TAG,
    params(
        ("id" = i32, Path, description = "Award ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted award"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User not an admin", body = ErrorDto),
        (status = 404, description = "Award not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_award(
    State(state): State<AppState>,
    session: Session,
    Path(award_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = AwardService::new(&state.db);

    let deleted = service.delete(award_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Award not found".to_string()))
    }
}

/// Grant an award to a project.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/awards/{id}/grant",
    tag = AWARD_TAG,
    params(
        ("id" = i32, Path, description = "Award ID")
    ),
    request_body = GrantAwardDto,
    responses(
        (status = 201, description = "Award granted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User below staff tier", body = ErrorDto),
        (status = 404, description = "Award or project not found", body = ErrorDto),
        (status = 409, description = "Project already holds this award", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn grant_award(
    State(state): State<AppState>,
    session: Session,
    Path(award_id): Path<i32>,
    Json(payload): Json<GrantAwardDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = AwardService::new(&state.db);

    service.grant(award_id, payload.project_id).await?;

    Ok(StatusCode::CREATED)
}

/// Revoke an award from a project.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    delete,
    path = "/api/awards/{id}/grant/{project_id}",
    tag = AWARD_TAG,
    params(
        ("id" = i32, Path, description = "Award ID"),
        ("project_id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Award revoked"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User below staff tier", body = ErrorDto),
        (status = 404, description = "Grant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revoke_award(
    State(state): State<AppState>,
    session: Session,
    Path((award_id, project_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = AwardService::new(&state.db);

    service.revoke(award_id, project_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/awards/{id}/badge - Upload an award's badge image
///
/// Multipart upload; the image goes in a `file` field.
///
/// # Access Control
/// - `Staff`
pub async fn upload_badge(
    State(state): State<AppState>,
    session: Session,
    Path(award_id): Path<i32>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

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
                .store(MediaKind::Badge, &content_type, &data)
                .await?,
        );
        break;
    }

    let badge_path = stored
        .ok_or_else(|| AppError::BadRequest("Missing 'file' field in upload.".to_string()))?;

    let service = AwardService::new(&state.db);
    let award = service.set_badge(award_id, &badge_path).await?;

    Ok((StatusCode::OK, Json(award.into_dto())))
}
