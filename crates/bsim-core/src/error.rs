//! Configuration error type.
//!
//! Sub-crates define their own error enums and wrap `BsimError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Rejected simulation parameters.  All of these are fatal and are raised
/// before the event loop starts.
#[derive(Debug, Error, PartialEq)]
pub enum BsimError {
    #[error("beacon population is empty")]
    NoBeacons,

    #[error("broadcast interval must be a positive number of seconds, got {0}")]
    InvalidInterval(f64),

    #[error("scan duration must be a non-negative number of seconds, got {0}")]
    InvalidDuration(f64),

    #[error("scan probability must lie in [0, 1], got {0}")]
    InvalidScanProb(f64),
}

/// Shorthand result type for configuration checks.
pub type BsimResult<T> = Result<T, BsimError>;
