use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        semester::{CreateSemesterDto, SemesterDto, UpdateSemesterDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::semester::SemesterParams,
        service::semester::SemesterService,
        state::AppState,
    },
};

/// Tag for grouping semester endpoints in OpenAPI documentation
pub static SEMESTER_TAG: &str = "semester";

/// List all semesters.
///
/// Public; the client uses this to populate semester filters and admin forms.
#[utoipa::path(
    get,
    path = "/api/semesters",
    tag = SEMESTER_TAG,
    responses(
        (status = 200, description = "All semesters, newest first", body = Vec<SemesterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_semesters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = SemesterService::new(&state.db);

    let semesters = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            semesters
                .into_iter()
                .map(|s| s.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a new semester.
///
/// # Access Control
/// - `Staff` - Staff and admins can create semesters
#[utoipa::path(
    post,
    path = "/api/semesters",
    tag = SEMESTER_TAG,
    request_body = CreateSemesterDto,
    responses(
        (status = 201, description = "Successfully created semester", body = SemesterDto),
        (status = 400, description = "Invalid semester data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User below staff tier", body = ErrorDto),
        (status = 409, description = "Semester name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_semester(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSemesterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = SemesterService::new(&state.db);

    let semester = service
        .create(SemesterParams {
            name: payload.name,
            starts_on: payload.starts_on,
            ends_on: payload.ends_on,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(semester.into_dto())))
}

/// Update a semester.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    put,
    path = "/api/semesters/{id}",
    tag = SEMESTER_TAG,
    params(
        ("id" = i32, Path, description = "Semester ID")
    ),
    request_body = UpdateSemesterDto,
    responses(
        (status = 200, description = "Successfully updated semester", body = SemesterDto),
        (status = 400, description = "Invalid semester data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User below staff tier", body = ErrorDto),
        (status = 404, description = "Semester not found", body = ErrorDto),
        (status = 409, description = "Semester name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_semester(
    State(state): State<AppState>,
    session: Session,
    Path(semester_id): Path<i32>,
    Json(payload): Json<UpdateSemesterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = SemesterService::new(&state.db);

    let semester = service
        .update(
            semester_id,
            SemesterParams {
                name: payload.name,
                starts_on: payload.starts_on,
                ends_on: payload.ends_on,
            },
        )
        .await?;

    match semester {
        Some(semester) => Ok((StatusCode::OK, Json(semester.into_dto()))),
        None => Err(AppError::NotFound("Semester not found".to_string())),
    }
}

/// Delete a semester.
///
/// Semesters that still have teams or projects cannot be removed.
///
/// # Access Control
/// - `Admin` - Only admins can delete semesters
#[utoipa::path(
    delete,
    path = "/api/semesters/{id}",
    tag = SEMESTER_TAG,
    params(
        ("id" = i32, Path, description = "Semester ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted semester"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User not an admin", body = ErrorDto),
        (status = 404, description = "Semester not found", body = ErrorDto),
        (status = 409, description = "Semester still referenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_semester(
    State(state): State<AppState>,
    session: Session,
    Path(semester_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = SemesterService::new(&state.db);

    let deleted = service.delete(semester_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Semester not found".to_string()))
    }
}
