//! Volunteer management API server binary.
//!
//! All configuration comes from environment variables (or a `.env` file in
//! development); see `AppConfig::from_env` for the full list.

use tracing::{error, info};
use vms_common::{try_init_tracing, AppConfig};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = serve().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn serve() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Starting VMS API server"
    );

    vms_api::run(config).await?;

    Ok(())
}
