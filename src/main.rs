mod model;
mod server;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, service::setup::SetupCodeService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("showcase=info,tower_http=warn")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let media = startup::init_media_storage(&config).await?;

    let setup_codes = SetupCodeService::new();
    startup::check_for_admin(&db, &config, &setup_codes).await?;

    tracing::info!("Starting server");

    let state = AppState::new(db, media, setup_codes, config.app_url.clone());
    let router = server::router::router(state, &config)?.layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    // ConnectInfo is required by the rate limiter's per-IP key extractor.
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
