//! Error types for AxiomAtlas.

use std::io;
use thiserror::Error;

/// The failure classes of a search run.
///
/// The search itself is total: substitution always succeeds and a failed
/// Modus Ponens match is an ordinary negative result. What can fail is the
/// configuration handed in and the sink being written to.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Report sink error: {0}")]
    Sink(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
