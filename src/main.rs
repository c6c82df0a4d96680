use jones_county_xc_api::{
    config::Config,
    db::{self, MySqlRepository},
    routes,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
    })?;

    let pool = db::connect(&config.database).await.inspect_err(|e| {
        tracing::error!(
            error = %e,
            host = %config.database.host,
            port = config.database.port,
            database = %config.database.name,
            "Failed to connect to database"
        );
    })?;

    tracing::info!(database = %config.database.name, "Connected to MySQL database");

    let app = routes::create_router(Arc::new(MySqlRepository::new(pool.clone())));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://localhost:{}/api/health", config.port);

    axum::serve(listener, app).await?;

    pool.close().await;
    Ok(())
}
