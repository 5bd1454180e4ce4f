//! Axum route configuration and API documentation.
//!
//! The staff/admin CRUD resources (semesters, categories, awards) are routed
//! through utoipa's `OpenApiRouter` so their annotations land in the OpenAPI
//! document served at `/api-docs/openapi.json` (browsable at `/swagger-ui`).
//! Everything else uses plain axum routing. Authentication and comment
//! creation sit behind a per-IP rate limit; the upload routes get a raised
//! body limit matching the media service's size cap.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{auth, award, category, comment, project, roster, semester, tag, team, user},
    error::AppError,
    service::media::MAX_UPLOAD_BYTES,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Showcase API",
        description = "REST API for the capstone project showcase platform"
    ),
    tags(
        (name = "semester", description = "Semester management"),
        (name = "category", description = "Project category management"),
        (name = "award", description = "Award management and granting")
    )
)]
struct ApiDoc;

pub fn router(state: AppState, config: &Config) -> Result<Router, AppError> {
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(10)
            .finish()
            .ok_or_else(|| {
                AppError::InternalError("Invalid rate limit configuration".to_string())
            })?,
    );

    let (documented, openapi) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(semester::get_semesters, semester::create_semester))
        .routes(routes!(semester::update_semester, semester::delete_semester))
        .routes(routes!(category::get_categories, category::create_category))
        .routes(routes!(category::update_category, category::delete_category))
        .routes(routes!(award::get_awards, award::create_award))
        .routes(routes!(award::update_award, award::delete_award))
        .routes(routes!(award::grant_award))
        .routes(routes!(award::revoke_award))
        .split_for_parts();

    let rate_limited = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/projects/{id}/comments", post(comment::create_comment))
        .layer(GovernorLayer::new(governor_config));

    let uploads = Router::new()
        .route("/api/user/avatar", post(user::upload_avatar))
        .route("/api/projects/{id}/images", post(project::upload_image))
        .route("/api/awards/{id}/badge", post(award::upload_badge))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    let api = Router::new()
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/users", get(user::get_users))
        .route(
            "/api/users/{id}",
            get(user::get_user_by_id).delete(user::delete_user),
        )
        .route("/api/users/{id}/role", put(user::set_user_role))
        .route("/api/user/profile", put(user::update_profile))
        .route("/api/user/favorites", get(user::get_favorites))
        .route("/api/semesters/{id}/teams", get(team::get_semester_teams))
        .route(
            "/api/semesters/{id}/roster",
            get(roster::get_roster).post(roster::upload_roster),
        )
        .route("/api/roster/{id}", delete(roster::delete_roster_entry))
        .route("/api/teams", post(team::create_team))
        .route(
            "/api/teams/{id}",
            get(team::get_team)
                .put(team::update_team)
                .delete(team::delete_team),
        )
        .route("/api/teams/{id}/join", post(team::join_team))
        .route(
            "/api/teams/{id}/members/{user_id}",
            delete(team::remove_member),
        )
        .route(
            "/api/projects",
            get(project::get_projects).post(project::create_project),
        )
        .route(
            "/api/projects/{id}",
            get(project::get_project)
                .put(project::update_project)
                .delete(project::delete_project),
        )
        .route(
            "/api/projects/{id}/images/{image_id}",
            delete(project::delete_image),
        )
        .route("/api/projects/{id}/thumbnail", put(project::set_thumbnail))
        .route("/api/projects/{id}/like", put(project::toggle_like))
        .route("/api/projects/{id}/favorite", put(project::toggle_favorite))
        .route("/api/projects/{id}/comments", get(comment::get_comments))
        .route("/api/projects/{id}/tags", post(tag::bind_tag))
        .route(
            "/api/projects/{id}/tags/{tag_id}",
            delete(tag::unbind_tag),
        )
        .route("/api/comments/{id}", delete(comment::delete_comment))
        .route("/api/tags", get(tag::get_tags));

    let router = Router::new()
        .merge(documented)
        .merge(api)
        .merge(rate_limited)
        .merge(uploads)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .nest_service("/media", ServeDir::new(&config.media_root))
        .layer(CorsLayer::permissive());

    Ok(router)
}
