use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    service::{media::MediaStorage, setup::SetupCodeService},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the application accesses it.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application's SQLite pool.
///
/// The session table is migrated on startup; sessions expire after seven days
/// of inactivity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Creates the media root directories and returns the storage handle.
pub async fn init_media_storage(config: &Config) -> Result<MediaStorage, AppError> {
    let media = MediaStorage::new(&config.media_root);
    media.init().await?;
    Ok(media)
}

/// Generates and logs a one-time setup code when no admin account exists.
///
/// The code lets the first user register with the admin role; once an admin
/// exists this is a no-op.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    config: &Config,
    setup_codes: &SetupCodeService,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if !user_repo.admin_exists().await? {
        let code = setup_codes.generate().await;
        tracing::info!(
            "No admin account exists. Register at {}/register within 15 minutes using setup code: {}",
            config.app_url,
            code
        );
    }

    Ok(())
}
