use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Why a species table could not be populated. Never fatal to decoding:
/// the table settles in `Unavailable` and every lookup falls back.
#[derive(Debug, Error)]
pub enum SpeciesTableError {
    #[error("failed to create runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("network error: {0}")]
    Request(#[source] reqwest::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("reading species map {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid species map: {0}")]
    Json(#[from] serde_json::Error),

    #[error("species list contained no usable entries")]
    Empty,
}
