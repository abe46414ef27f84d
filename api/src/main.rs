use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use bands_api::app::create_app;
use bands_api::routes::user::AppState;
use bands_core::repositories::{InMemorySessionRepository, InMemoryUserRepository};
use bands_core::services::auth::{AuthService, AuthServiceConfig};
use bands_shared::{AppConfig, Environment};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Environment-specific file first so its values win over the generic .env
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(&config.logging.level));

    info!(
        "Starting Bands API Server ({} environment)",
        config.environment
    );

    let user_repository = Arc::new(InMemoryUserRepository::new());
    let session_repository = Arc::new(InMemorySessionRepository::new());
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        session_repository,
        AuthServiceConfig::from(&config.auth),
    ));
    let app_state = web::Data::new(AppState::new(auth_service));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server terminated with an error")?;

    Ok(())
}
