//! Shared application state for the `SensorHub` HTTP API.
//!
//! [`AppState`] owns a handle to the [`SensorRegistry`] the handlers
//! operate on. There is no process-wide registry: each server or test
//! builds its own state.

use std::sync::Arc;

use sensorhub_core::SensorRegistry;
use sensorhub_core::config::NearestConfig;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The sensor registry all handlers read from and write to.
    pub registry: Arc<SensorRegistry>,
    /// Nearest-query parsing behavior.
    pub nearest: NearestConfig,
}

impl AppState {
    /// Create a new application state around an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state around an existing registry.
    pub const fn with_registry(registry: Arc<SensorRegistry>, nearest: NearestConfig) -> Self {
        Self { registry, nearest }
    }

    /// Builder-style switch for strict `lat`/`lng` parsing.
    #[must_use]
    pub const fn strict_query(mut self, strict: bool) -> Self {
        self.nearest.strict_query = strict;
        self
    }
}
