//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: the database connection is a pool handle, `MediaStorage` holds a
//! path, and `SetupCodeService` is reference counted internally.

use sea_orm::DatabaseConnection;

use super::service::{media::MediaStorage, setup::SetupCodeService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Filesystem-backed storage for uploaded avatars, project images, and badges.
    pub media: MediaStorage,

    /// One-time setup codes that let the first user register as admin.
    pub setup_codes: SetupCodeService,

    /// Application base URL for generating links in log messages.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        media: MediaStorage,
        setup_codes: SetupCodeService,
        app_url: String,
    ) -> Self {
        Self {
            db,
            media,
            setup_codes,
            app_url,
        }
    }
}
