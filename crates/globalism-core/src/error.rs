// crates/globalism-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading or building a [`CountryDb`](crate::CountryDb).
///
/// The formatting engines never return this type: they degrade to `None`,
/// pass-through output or an `Invalid` status instead.
#[derive(Debug, Error)]
pub enum GlobalismError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, GlobalismError>;
