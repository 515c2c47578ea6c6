//! Error type shared by the buffer, kernel and filter stages.

use thiserror::Error;

/// Failure raised by a buffer operation or a filter stage.
///
/// Every stage validates its inputs before touching the caller's buffer, so an
/// `Err` always means the buffer was left as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EdgeError {
    #[error("expected a single-channel buffer, got {channels} channels")]
    UnsupportedChannels { channels: usize },

    #[error("buffer has zero extent ({width}x{height})")]
    EmptyBuffer { width: usize, height: usize },

    #[error("insufficient padding: kernel footprint needs {required}, buffer has {actual}")]
    InsufficientPadding { required: usize, actual: usize },

    #[error("buffer dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: String, right: String },

    #[error("data length {len} does not match {width}x{height}x{channels}")]
    DataLength {
        len: usize,
        width: usize,
        height: usize,
        channels: usize,
    },

    #[error("invalid threshold ordering: high ({high}) must exceed low ({low})")]
    ThresholdOrder { high: u8, low: u8 },

    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl EdgeError {
    pub(crate) fn invalid(name: &'static str, value: impl ToString, reason: &str) -> Self {
        EdgeError::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EdgeError>;
