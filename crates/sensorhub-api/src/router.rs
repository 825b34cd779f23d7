//! Axum router construction for the `SensorHub` API.
//!
//! Assembles all routes into a single [`Router`] with HTTP tracing
//! middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{any, get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the registry server.
///
/// The router includes:
/// - `POST /sensor` -- register a sensor (other methods: `400`)
/// - `GET /sensor/{name}` -- fetch a sensor
/// - `PUT /sensor/{name}` -- update a sensor (other methods: `405`)
/// - `/nearest?lat=&lng=` -- nearest sensor, any method
///
/// `{name}` is the rest of the path and may contain `/`. `/sensor/` addresses
/// the sensor with the empty name. Unmatched paths get a plain-text `404`.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/sensor",
            post(handlers::register_sensor).fallback(handlers::post_only),
        )
        .route(
            "/sensor/",
            get(handlers::get_unnamed_sensor)
                .put(handlers::update_unnamed_sensor)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/sensor/{*name}",
            get(handlers::get_sensor)
                .put(handlers::update_sensor)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .route("/nearest", any(handlers::nearest_sensor))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
