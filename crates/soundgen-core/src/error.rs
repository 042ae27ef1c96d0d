//! Error types for the synthesis core.

use soundgen_spec::BackendError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis, shaping or export.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Out-of-range or non-finite numeric argument.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Two buffers that must share a sample rate do not.
    #[error("incompatible buffers: sample rate {left} Hz does not match {right} Hz")]
    IncompatibleBuffers {
        /// Sample rate of the first buffer.
        left: u32,
        /// Sample rate of the second buffer.
        right: u32,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an incompatible buffers error.
    pub fn incompatible(left: u32, right: u32) -> Self {
        Self::IncompatibleBuffers { left, right }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidParameter { .. } => "AUDIO_001",
            AudioError::IncompatibleBuffers { .. } => "AUDIO_002",
            AudioError::Io(_) => "AUDIO_003",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}
