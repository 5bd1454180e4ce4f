use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::project::{CreateProjectDto, SetThumbnailDto, UpdateProjectDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::project::{ProjectFilter, UpdateProjectParams},
        service::{
            media::MediaKind,
            project::{ProjectService, RegisterProjectInput},
        },
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct ProjectListQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    pub semester_id: Option<i32>,
    pub category_id: Option<i32>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

fn default_per_page() -> u64 {
    12
}

/// GET /api/projects - Browse projects with filters and pagination
///
/// Public. Filters combine: semester, category, tag name, and a free-text
/// search over name and summary.
pub async fn get_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    let filter = ProjectFilter {
        semester_id: query.semester_id,
        category_id: query.category_id,
        tag: query.tag,
        search: query.search,
    };

    let projects = service
        .get_paginated(&filter, query.page, query.per_page)
        .await?;

    Ok((StatusCode::OK, Json(projects.into_dto())))
}

/// GET /api/projects/{id} - Get a project's full detail view
///
/// Public.
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProjectService::new(&state.db);

    let project = service
        .get_detail(project_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

/// POST /api/projects - Register the caller's team project
///
/// # Access Control
/// - `CapstoneStudent` - Caller must be a student with a team
///
/// # Returns
/// - `201 Created`: ProjectDetailDto
/// - `400 Bad Request`: Caller has no team, or invalid fields
/// - `409 Conflict`: The team already registered a project
pub async fn create_project(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CapstoneStudent])
        .await?;

    let service = ProjectService::new(&state.db);

    let project = service
        .register(
            &user,
            RegisterProjectInput {
                name: payload.name,
                summary: payload.summary,
                description: payload.description,
                repo_url: payload.repo_url,
                category_id: payload.category_id,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(project.into_dto())))
}

/// PUT /api/projects/{id} - Update a project
///
/// # Access Control
/// - `ProjectEditor` - Member of the owning team, or staff
pub async fn update_project(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
    Json(payload): Json<UpdateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ProjectEditor(project_id)])
        .await?;

    let service = ProjectService::new(&state.db);

    let project = service
        .update(UpdateProjectParams {
            id: project_id,
            category_id: payload.category_id,
            name: payload.name,
            summary: payload.summary,
            description: payload.description,
            repo_url: payload.repo_url,
        })
        .await?;

    match project {
        Some(project) => Ok((StatusCode::OK, Json(project.into_dto()))),
        None => Err(AppError::NotFound("Project not found".to_string())),
    }
}

/// DELETE /api/projects/{id} - Delete a project
///
/// Unbinds tags first so mention counts stay consistent; images, comments,
/// likes, and favorites cascade away with the row.
///
/// # Access Control
/// - `ProjectEditor`
pub async fn delete_project(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ProjectEditor(project_id)])
        .await?;

    let service = ProjectService::new(&state.db);

    service.delete(project_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/projects/{id}/images - Upload a gallery image
///
/// Multipart upload; the image goes in a `file` field. Accepts png, jpeg,
/// gif, and webp up to 5 MiB.
///
/// # Access Control
/// - `ProjectEditor`
pub async fn upload_image(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ProjectEditor(project_id)])
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
                .store(MediaKind::ProjectImage, &content_type, &data)
                .await?,
        );
        break;
    }

    let path = stored
        .ok_or_else(|| AppError::BadRequest("Missing 'file' field in upload.".to_string()))?;

    let service = ProjectService::new(&state.db);
    let image = service.add_image(project_id, path).await?;

    Ok((StatusCode::CREATED, Json(image.into_dto())))
}

/// DELETE /api/projects/{id}/images/{image_id} - Remove a gallery image
///
/// # Access Control
/// - `ProjectEditor`
pub async fn delete_image(
    State(state): State<AppState>,
    session: Session,
    Path((project_id, image_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ProjectEditor(project_id)])
        .await?;

    let service = ProjectService::new(&state.db);

    service.remove_image(project_id, image_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/projects/{id}/thumbnail - Point the thumbnail at a gallery image
///
/// # Access Control
/// - `ProjectEditor`
pub async fn set_thumbnail(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
    Json(payload): Json<SetThumbnailDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ProjectEditor(project_id)])
        .await?;

    let service = ProjectService::new(&state.db);

    service.set_thumbnail(project_id, payload.image_id).await?;

    Ok(StatusCode::OK)
}

/// PUT /api/projects/{id}/like - Toggle the caller's like
///
/// # Authentication
/// Requires login; any tier can like projects.
///
/// # Returns
/// - `200 OK`: LikeStateDto with the state after the toggle
pub async fn toggle_like(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ProjectService::new(&state.db);

    let like_state = service.toggle_like(user.id, project_id).await?;

    Ok((StatusCode::OK, Json(like_state.into_dto())))
}

/// PUT /api/projects/{id}/favorite - Toggle the caller's favorite
///
/// # Authentication
/// Requires login; any tier can favorite projects.
pub async fn toggle_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ProjectService::new(&state.db);

    let favorite_state = service.toggle_favorite(user.id, project_id).await?;

    Ok((StatusCode::OK, Json(favorite_state.into_dto())))
}
