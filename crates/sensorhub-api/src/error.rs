//! Error types for the `SensorHub` HTTP API.
//!
//! [`ApiError`] unifies all request failure modes into a single enum that
//! converts into an Axum response: a status code and a short plain-text
//! message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sensorhub_core::RegistryError;
use tracing::debug;

/// Errors that can occur while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be decoded as a sensor.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// The request body held no JSON value at all.
    #[error("EOF")]
    EmptyBody,

    /// A method other than `POST` was sent to `/sensor`.
    #[error("Only POST method allowed")]
    PostOnly,

    /// The method is not supported on this resource.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// A query parameter was missing or malformed (strict mode only).
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A registry lookup failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// No route matched the request path.
    #[error("404 page not found")]
    RouteNotFound,
}

impl ApiError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Decode(_) | Self::EmptyBody | Self::PostOnly | Self::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Registry(_) | Self::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Registry(RegistryError::NotFound(_)) => String::from("Sensor not found"),
            Self::Registry(RegistryError::NoSensorsAvailable) => String::from("No sensors found"),
            other => other.to_string(),
        };

        debug!(status = status.as_u16(), error = %self, "Request failed");

        (status, message).into_response()
    }
}
