//! Typed errors for configuration values.
//!
//! The scroll controller itself never fails; only the numbers it is built
//! from can be wrong.

use thiserror::Error;

/// A configuration value that cannot drive the scroll controller.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Speed must be finite and non-negative.
    #[error("speed must be a finite, non-negative number (got {0})")]
    InvalidSpeed(f64),
    /// Smoothing below 1 overshoots the target on every frame.
    #[error("smoothing must be a finite number >= 1 (got {0})")]
    InvalidSmoothing(f64),
    /// The settle threshold must be positive or the loop never stops.
    #[error("threshold must be a finite, positive number (got {0})")]
    InvalidThreshold(f64),
    /// Frame interval must be at least one millisecond.
    #[error("frame interval must be at least 1ms (got {0})")]
    InvalidFrameInterval(u64),
    /// Rows must map to a positive number of virtual pixels.
    #[error("row height must be a finite, positive number (got {0})")]
    InvalidRowHeight(f64),
    /// A config-file value that did not parse.
    #[error("invalid value {value:?} for `{key}`")]
    Parse { key: String, value: String },
}
