//! Error types for map loading and queries.

use thiserror::Error;

/// Result type alias for map operations.
pub type MapResult<T> = Result<T, MapError>;

/// Errors that can occur while loading or querying a wall map.
#[derive(Debug, Error)]
pub enum MapError {
    /// The map description does not have the expected structure.
    #[error("malformed map data: {0}")]
    MalformedMapData(String),

    /// The map description is not valid JSON.
    #[error("map data is not valid JSON: {0}")]
    Json(#[from] json::Error),

    /// The map file could not be read.
    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),

    /// A segment has zero length or non-finite coordinates.
    #[error("degenerate segment at ({x}, {y})")]
    DegenerateSegment { x: f64, y: f64 },

    /// Rejection sampling gave up before finding a free point.
    #[error("no free point found after {attempts} sampling attempts")]
    SamplingExhausted { attempts: usize },

    /// The map configuration is unusable.
    #[error("invalid map configuration: {0}")]
    InvalidConfig(String),
}

impl MapError {
    /// Create a malformed map data error.
    #[must_use]
    pub fn malformed(details: impl Into<String>) -> Self {
        Self::MalformedMapData(details.into())
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig(details.into())
    }
}
