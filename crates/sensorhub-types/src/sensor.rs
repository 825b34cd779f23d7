//! The sensor record stored by the registry.
//!
//! Decoding is lenient: every field is optional, `null` anywhere reads as
//! the zero value, and unknown fields are ignored. Encoding always writes
//! all three fields.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::coordinate::Coordinate;
use crate::lenient::{null_as_default, nullable_strings};

/// A named sensor with a location and free-form tags.
///
/// `name` is the registry key. Tags keep their order and may repeat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(default)]
pub struct Sensor {
    /// Unique identifier, used as the registry key. May be empty.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Where the sensor is.
    #[serde(deserialize_with = "null_as_default")]
    pub location: Coordinate,
    /// Ordered tags. Duplicates are kept.
    #[serde(deserialize_with = "nullable_strings")]
    pub tags: Vec<String>,
}

impl Sensor {
    /// Create a sensor with no tags.
    pub fn new(name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            location,
            tags: Vec::new(),
        }
    }

    /// Builder-style setter for the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
