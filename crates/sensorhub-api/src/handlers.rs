//! REST endpoint handlers for the `SensorHub` API.
//!
//! Handlers decode the request, make one registry call, and serialize the
//! returned clone after the registry lock has been released.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/sensor` | Register (or overwrite) a sensor |
//! | `GET` | `/sensor/{name}` | Fetch a sensor by name |
//! | `PUT` | `/sensor/{name}` | Replace an existing sensor |
//! | `GET` | `/nearest?lat=&lng=` | Closest sensor to a coordinate |
//!
//! Sensor bodies are decoded leniently: the first JSON value
//! is read and anything after it is ignored.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use sensorhub_types::{Coordinate, Sensor};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /sensor
// ---------------------------------------------------------------------------

/// Register a sensor from a JSON body. Responds `201 Created` with no body.
///
/// The body is decoded regardless of `Content-Type`; anything that is not
/// a sensor is a `400`.
pub async fn register_sensor(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let sensor = decode_sensor(&body)?;
    info!(name = %sensor.name, "Sensor registered");
    state.registry.register(sensor).await;
    Ok(StatusCode::CREATED)
}

/// Any method other than `POST` on `/sensor`.
pub async fn post_only() -> ApiError {
    ApiError::PostOnly
}

// ---------------------------------------------------------------------------
// GET /sensor/{name}
// ---------------------------------------------------------------------------

/// Return the sensor stored under `name`.
pub async fn get_sensor(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Sensor>, ApiError> {
    fetch_sensor(&state, &name).await
}

/// `GET /sensor/`: the sensor registered with an empty name.
pub async fn get_unnamed_sensor(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Sensor>, ApiError> {
    fetch_sensor(&state, "").await
}

async fn fetch_sensor(state: &AppState, name: &str) -> Result<Json<Sensor>, ApiError> {
    let sensor = state.registry.get_by_name(name).await?;
    Ok(Json(sensor))
}

// ---------------------------------------------------------------------------
// PUT /sensor/{name}
// ---------------------------------------------------------------------------

/// Replace the sensor stored under `name` and return the stored record.
///
/// The body is decoded before the existence check, so a malformed body is
/// a `400` even when `name` is unknown. The payload's own `name` is
/// replaced by the path segment.
pub async fn update_sensor(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<Sensor>, ApiError> {
    replace_sensor(&state, &name, &body).await
}

/// `PUT /sensor/`: replace the sensor registered with an empty name.
pub async fn update_unnamed_sensor(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Sensor>, ApiError> {
    replace_sensor(&state, "", &body).await
}

async fn replace_sensor(
    state: &AppState,
    name: &str,
    body: &[u8],
) -> Result<Json<Sensor>, ApiError> {
    let payload = decode_sensor(body)?;
    let stored = state.registry.update(name, payload).await?;
    info!(name = %stored.name, "Sensor updated");
    Ok(Json(stored))
}

/// Any method other than `GET`/`PUT` on `/sensor/{name}`, `HEAD` included.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

// ---------------------------------------------------------------------------
// GET /nearest
// ---------------------------------------------------------------------------

/// Return the sensor closest to `?lat=&lng=` by planar distance.
///
/// Missing or unparseable values become `0.0` unless strict query parsing
/// is enabled, in which case they are a `400`. When a key repeats, the
/// first value is used.
pub async fn nearest_sensor(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Sensor>, ApiError> {
    let strict = state.nearest.strict_query;
    let latitude = coordinate_param(&params, "lat", strict)?;
    let longitude = coordinate_param(&params, "lng", strict)?;

    let sensor = state
        .registry
        .find_nearest(Coordinate::new(latitude, longitude))
        .await?;
    Ok(Json(sensor))
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// Any path no route matches.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Decode the first JSON value in `body` as a sensor.
///
/// Bytes after that value are not read. A `null` body is the zero-valued
/// sensor; an empty or whitespace-only body is [`ApiError::EmptyBody`].
fn decode_sensor(body: &[u8]) -> Result<Sensor, ApiError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Sensor>>();
    match values.next() {
        Some(decoded) => Ok(decoded?.unwrap_or_default()),
        None => Err(ApiError::EmptyBody),
    }
}

/// Look up the first `key` in `params` and parse it as `f64`.
fn coordinate_param(params: &[(String, String)], key: &str, strict: bool) -> Result<f64, ApiError> {
    let Some((_, raw)) = params.iter().find(|(k, _)| k == key) else {
        if strict {
            return Err(ApiError::InvalidQuery(format!("missing {key}")));
        }
        return Ok(0.0);
    };

    match raw.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) if !strict => Ok(0.0),
        Err(e) => Err(ApiError::InvalidQuery(format!("{key}={raw:?}: {e}"))),
    }
}
