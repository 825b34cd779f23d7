//! `SensorHub` server binary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `sensorhub.yaml` (or `$SENSORHUB_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Create an empty sensor registry
//! 4. Serve the HTTP API until `Ctrl-C`

mod error;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use sensorhub_api::{AppState, ServerConfig};
use sensorhub_core::{SensorHubConfig, SensorRegistry};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "sensorhub.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration cannot be parsed or the server
/// fails to bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config_path = config_path();
    let (config, from_file) = load_config(&config_path)?;

    // 2. Initialize structured logging. `RUST_LOG` wins over the config.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("sensorhub starting");
    if from_file {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        strict_query = config.nearest.strict_query,
        "Effective configuration"
    );

    // 3. Create the registry.
    let registry = Arc::new(SensorRegistry::new());
    let state = Arc::new(AppState::with_registry(
        Arc::clone(&registry),
        config.nearest.clone(),
    ));

    // 4. Serve.
    let server_config = ServerConfig::from(&config.server);
    sensorhub_api::start_server(&server_config, state)
        .await
        .map_err(AppError::from)?;

    info!(
        sensors = registry.len().await,
        "sensorhub shutdown complete, discarding registry"
    );

    Ok(())
}

/// Resolve the configuration file path from `SENSORHUB_CONFIG`.
fn config_path() -> PathBuf {
    std::env::var_os("SENSORHUB_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Load configuration, falling back to defaults when the file is absent.
///
/// Returns the config and whether it came from the file.
fn load_config(path: &Path) -> Result<(SensorHubConfig, bool), AppError> {
    if path.exists() {
        let config = SensorHubConfig::from_file(path)?;
        Ok((config, true))
    } else {
        let mut config = SensorHubConfig::default();
        config.server.apply_env_overrides();
        Ok((config, false))
    }
}
