//! HTTP API for the `SensorHub` registry.
//!
//! This crate provides an Axum HTTP server that exposes a
//! [`SensorRegistry`](sensorhub_core::SensorRegistry):
//!
//! - **`POST /sensor`** registers or overwrites a sensor
//! - **`GET`/`PUT /sensor/{name}`** fetches or replaces one by name
//! - **`/nearest?lat=&lng=`** returns the closest sensor by planar distance
//!
//! # Architecture
//!
//! Handlers hold an [`AppState`] that owns the registry handle. Every
//! registry call takes the registry lock once and returns an owned clone,
//! so responses are serialized after the lock is released. Errors become
//! a status code plus a plain-text message via [`ApiError`].

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
