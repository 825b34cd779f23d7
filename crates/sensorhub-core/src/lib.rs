//! Registry core for `SensorHub`.
//!
//! - [`registry`] -- [`SensorRegistry`], the lock-guarded name-to-sensor map
//!   with lookup, update, and nearest-sensor queries
//! - [`geo`] -- planar distance between raw coordinates
//! - [`config`] -- typed YAML configuration with env overrides

pub mod config;
pub mod geo;
pub mod registry;

pub use config::{ConfigError, SensorHubConfig};
pub use registry::{RegistryError, SensorRegistry};
