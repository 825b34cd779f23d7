//! In-memory sensor registry.
//!
//! [`SensorRegistry`] maps sensor names to [`Sensor`] records behind a
//! single [`RwLock`]. Each operation takes the lock once for its whole
//! duration and returns owned clones, so no guard outlives a call and
//! callers never serialize while holding the lock.

use std::collections::HashMap;

use sensorhub_types::{Coordinate, Sensor};
use tokio::sync::RwLock;
use tracing::debug;

use crate::geo::planar_distance;

/// Errors returned by registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No record is stored under the given name.
    #[error("sensor not found: {0}")]
    NotFound(String),

    /// A nearest query ran against an empty registry.
    #[error("no sensors available")]
    NoSensorsAvailable,
}

/// Shared, name-keyed store of sensor records.
///
/// Construct one per server (or per test) and share it through an
/// [`Arc`](std::sync::Arc). Writes are last-write-wins; there is no
/// delete.
#[derive(Debug, Default)]
pub struct SensorRegistry {
    sensors: RwLock<HashMap<String, Sensor>>,
}

impl SensorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Insert `sensor` under its own name, replacing any existing record.
    ///
    /// Never fails. Empty names are stored as-is.
    pub async fn register(&self, sensor: Sensor) {
        let mut sensors = self.sensors.write().await;
        debug!(name = %sensor.name, location = %sensor.location, "Registering sensor");
        sensors.insert(sensor.name.clone(), sensor);
    }

    /// Replace the record stored under `name` with `payload`.
    ///
    /// The stored record's `name` is forced to `name` whatever the payload
    /// says. The existence check and the write happen under one write
    /// lock. Returns the stored record.
    pub async fn update(&self, name: &str, mut payload: Sensor) -> Result<Sensor, RegistryError> {
        let mut sensors = self.sensors.write().await;
        let slot = sensors
            .get_mut(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_owned()))?;

        name.clone_into(&mut payload.name);
        slot.clone_from(&payload);
        debug!(name, location = %payload.location, "Updated sensor");
        Ok(payload)
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Look up a record by exact, case-sensitive name.
    pub async fn get_by_name(&self, name: &str) -> Result<Sensor, RegistryError> {
        self.sensors
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_owned()))
    }

    /// Return the record closest to `query` by planar distance.
    ///
    /// Scans every record. On exact ties any of the tied records may be
    /// returned. A record whose distance is `NaN` only wins when every
    /// distance is `NaN`.
    pub async fn find_nearest(&self, query: Coordinate) -> Result<Sensor, RegistryError> {
        let sensors = self.sensors.read().await;

        let mut nearest: Option<(f64, &Sensor)> = None;
        for sensor in sensors.values() {
            let dist = planar_distance(sensor.location, query);
            let closer = nearest
                .is_none_or(|(best, _)| dist < best || (best.is_nan() && !dist.is_nan()));
            if closer {
                nearest = Some((dist, sensor));
            }
        }

        nearest
            .map(|(dist, sensor)| {
                debug!(%query, name = %sensor.name, distance = dist, "Nearest sensor");
                sensor.clone()
            })
            .ok_or(RegistryError::NoSensorsAvailable)
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.sensors.read().await.len()
    }

    /// Whether the registry holds no records.
    pub async fn is_empty(&self) -> bool {
        self.sensors.read().await.is_empty()
    }
}
