use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::team::{CreateTeamDto, UpdateTeamDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::team::CreateTeamParams,
        service::team::TeamService,
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

/// GET /api/semesters/{id}/teams - Get a semester's teams
///
/// Public; includes each team's members and project card.
pub async fn get_semester_teams(
    State(state): State<AppState>,
    Path(semester_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db);

    let teams = service
        .get_by_semester_paginated(semester_id, params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(teams.into_dto())))
}

/// GET /api/teams/{id} - Get a team with members and project
///
/// Public.
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db);

    let team = service
        .get_with_members(team_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// POST /api/teams - Create a team in a semester
///
/// # Access Control
/// - `Staff` - Staff set up teams when onboarding a semester
///
/// # Returns
/// - `201 Created`: TeamDto (no members yet)
/// - `400 Bad Request`: Missing name or unknown semester
/// - `409 Conflict`: Team name already taken in the semester
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = TeamService::new(&state.db);

    let team = service
        .create(CreateTeamParams {
            name: payload.name,
            semester_id: payload.semester_id,
        })
        .await?;

    let team = service
        .get_with_members(team.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found after creation".to_string()))?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

/// PUT /api/teams/{id} - Rename a team
///
/// # Access Control
/// - `Staff`
pub async fn update_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
    Json(payload): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = TeamService::new(&state.db);

    let team = service.update_name(team_id, &payload.name).await?;

    match team {
        Some(_) => {
            let team = service
                .get_with_members(team_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;
            Ok((StatusCode::OK, Json(team.into_dto())))
        }
        None => Err(AppError::NotFound("Team not found".to_string())),
    }
}

/// DELETE /api/teams/{id} - Delete a team
///
/// Teams that still have a registered project cannot be removed.
///
/// # Access Control
/// - `Staff`
pub async fn delete_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = TeamService::new(&state.db);

    let deleted = service.delete(team_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Team not found".to_string()))
    }
}

/// POST /api/teams/{id}/join - Join a team as a capstone student
///
/// # Access Control
/// - `CapstoneStudent` - Students join their own team; staff assign via the
///   member endpoints
///
/// # Returns
/// - `200 OK`: Joined
/// - `409 Conflict`: Caller already belongs to a team
pub async fn join_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CapstoneStudent])
        .await?;

    let service = TeamService::new(&state.db);

    service.join(&user, team_id).await?;

    Ok(StatusCode::OK)
}

/// DELETE /api/teams/{id}/members/{user_id} - Remove a member from a team
///
/// Staff can remove anyone; a member can remove themselves.
pub async fn remove_member(
    State(state): State<AppState>,
    session: Session,
    Path((team_id, member_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = TeamService::new(&state.db);

    service.remove_member(&user, team_id, member_id).await?;

    Ok(StatusCode::OK)
}
