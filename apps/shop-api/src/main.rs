//! Shop API - REST server

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use shop_api::{api, AppState, Config};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());

    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = database::mongodb::resolve_database(&mongo_client, &config.mongodb);

    info!("Successfully connected to MongoDB database: {}", db.name());

    let state = AppState {
        config: config.clone(),
        mongo_client,
        db,
    };

    api::init_indexes(&state).await?;

    let root = health_router(config.app).merge(api::health::router(state.clone()));
    let router = shop_api::with_docs(api::routes(&state), root, config.wishlist_routes);

    info!(
        wishlist_routes = %config.wishlist_routes,
        "Starting Shop API on port {}", config.server.port
    );

    create_production_app(
        router,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            drop(state.mongo_client);
            info!("MongoDB connection closed");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shop API shutdown complete");
    Ok(())
}
