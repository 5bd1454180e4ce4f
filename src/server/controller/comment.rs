use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::comment::CreateCommentDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, service::comment::CommentService,
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
    20
}

/// GET /api/projects/{id}/comments - Get a project's comments
///
/// Public; newest first.
pub async fn get_comments(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let comments = service
        .get_by_project_paginated(project_id, params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(comments.into_dto())))
}

/// POST /api/projects/{id}/comments - Comment on a project
///
/// # Authentication
/// Requires login; any tier can comment.
///
/// # Returns
/// - `201 Created`: CommentDto
/// - `400 Bad Request`: Empty or overlong body
/// - `404 Not Found`: Project does not exist
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CommentService::new(&state.db);

    let comment = service.create(project_id, &user, &payload.body).await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// DELETE /api/comments/{id} - Delete a comment
///
/// The author can delete their own comments; staff can delete any.
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CommentService::new(&state.db);

    service.delete(comment_id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
