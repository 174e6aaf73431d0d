// crates/wayfarer-core/src/error.rs
use crate::common::Surface;
use thiserror::Error;

pub use crate::api::ApiError;
pub use crate::validate::ValidationError;

/// Crate-level error type.
///
/// Lookup failures are *not* represented here: the coordinator folds them
/// into [`LookupOutcome`](crate::coordinator::LookupOutcome) so that no
/// transport problem is ever fatal to the caller.
#[derive(Debug, Error)]
pub enum WayfarerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("No record at index {index} on the {surface} surface ({len} displayed)")]
    OutOfRange {
        surface: Surface,
        index: usize,
        len: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WayfarerError>;
