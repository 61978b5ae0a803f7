use anyhow::{Context, Result};
use dotenv::dotenv;
use portal::{handler::AppRouter, state::AppState};
use shared::{config::Config, utils::init_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _guard = init_logger("portal", config.dev_mode, config.enable_file_log)
        .context("Failed to initialize logger")?;

    let port = config.port;

    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    info!("🚀 Server started successfully");

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    Ok(())
}
