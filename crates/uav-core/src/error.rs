//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `uav-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Non-positive grid extents, box size or step length, duplicate UAV
    /// names, …  Fatal: no simulation may be built from such a config.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `uav-core`.
pub type CoreResult<T> = Result<T, CoreError>;
