//! Shared type definitions for `SensorHub`.
//!
//! This crate is the single source of truth for the records that cross the
//! HTTP boundary. Types defined here flow downstream to `TypeScript` via
//! `ts-rs` for API clients.
//!
//! # Modules
//!
//! - [`coordinate`] -- Raw latitude/longitude pair
//! - [`sensor`] -- Named sensor record with location and tags

pub mod coordinate;
mod lenient;
pub mod sensor;

// Re-export all public types at crate root for convenience.
pub use coordinate::Coordinate;
pub use sensor::Sensor;
