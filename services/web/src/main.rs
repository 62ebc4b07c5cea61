use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use common::database::{self, DatabaseConfig};
use web::{AppState, ServerConfig, build_app};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Wordsmith web service");

    let server_config = ServerConfig::load()?;
    let db_config = DatabaseConfig::from_env()?;

    // Open the store and bring the schema up to date
    let pool = database::connect(&db_config).await?;

    if database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    let state = AppState::new(pool.clone(), server_config.clone());
    state.sessions.cleanup_expired_sessions().await?;

    let app = build_app(state);

    let address = server_config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Web service listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Web service stopped");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
