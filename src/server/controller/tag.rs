use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::tag::BindTagDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::tag::TagService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct TagListQuery {
    pub search: Option<String>,
}

/// GET /api/tags - List tags ordered by popularity
///
/// Public; `?search=` filters by name substring.
pub async fn get_tags(
    State(state): State<AppState>,
    Query(query): Query<TagListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = TagService::new(&state.db);

    let tags = service.get_all(query.search.as_deref()).await?;

    Ok((
        StatusCode::OK,
        Json(tags.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

/// POST /api/projects/{id}/tags - Bind a tag to a project
///
/// Creates the tag on first mention; otherwise increments its mention count.
///
/// # Access Control
/// - `ProjectEditor` - Member of the owning team, or staff
///
/// # Returns
/// - `201 Created`: TagDto with the updated mention count
/// - `400 Bad Request`: Invalid name or the project already holds 5 tags
/// - `409 Conflict`: Tag already bound to this project
pub async fn bind_tag(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
    Json(payload): Json<BindTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ProjectEditor(project_id)])
        .await?;

    let service = TagService::new(&state.db);

    let tag = service.bind(project_id, &payload.name).await?;

    Ok((StatusCode::CREATED, Json(tag.into_dto())))
}

/// DELETE /api/projects/{id}/tags/{tag_id} - Unbind a tag from a project
///
/// Decrements the tag's mention count and deletes the tag once nothing
/// references it.
///
/// # Access Control
/// - `ProjectEditor`
pub async fn unbind_tag(
    State(state): State<AppState>,
    session: Session,
    Path((project_id, tag_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ProjectEditor(project_id)])
        .await?;

    let service = TagService::new(&state.db);

    service.unbind(project_id, tag_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
