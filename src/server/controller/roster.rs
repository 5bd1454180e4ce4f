use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::roster::RosterUploadDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::roster::{RosterEntry, RosterService},
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
    50
}

/// GET /api/semesters/{id}/roster - Get a semester's registered students
///
/// # Access Control
/// - `Staff` - The roster contains student emails and is never public
pub async fn get_roster(
    State(state): State<AppState>,
    session: Session,
    Path(semester_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = RosterService::new(&state.db);

    let roster = service
        .get_by_semester_paginated(semester_id, params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(roster.into_dto())))
}

/// POST /api/semesters/{id}/roster - Bulk-upload registered students
///
/// Idempotent upsert: existing entries (matched by email) move to the
/// semester and get their names refreshed; new entries are inserted.
///
/// # Access Control
/// - `Staff`
///
/// # Returns
/// - `200 OK`: RosterUploadResultDto with inserted/updated counts
/// - `400 Bad Request`: An entry has an invalid email
/// - `404 Not Found`: Semester does not exist
pub async fn upload_roster(
    State(state): State<AppState>,
    session: Session,
    Path(semester_id): Path<i32>,
    Json(payload): Json<RosterUploadDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = RosterService::new(&state.db);

    let entries = payload
        .students
        .into_iter()
        .map(|s| RosterEntry {
            email: s.email,
            name: s.name,
        })
        .collect();

    let result = service.upload(semester_id, entries).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// DELETE /api/roster/{id} - Remove a roster entry
///
/// # Access Control
/// - `Staff`
pub async fn delete_roster_entry(
    State(state): State<AppState>,
    session: Session,
    Path(entry_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = RosterService::new(&state.db);

    let deleted = service.delete(entry_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Roster entry not found".to_string()))
    }
}
