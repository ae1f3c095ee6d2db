//! # Modeling Errors
//!
//! Error types for kernel operations.

use thiserror::Error;

/// Errors that can occur while creating or operating on geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelingError {
    /// An option value is outside its accepted range
    #[error("Invalid option '{option}': {message}")]
    InvalidOption {
        option: &'static str,
        message: String,
    },

    /// The input cannot produce a meaningful geometry
    #[error("Degenerate geometry: {message}")]
    Degenerate { message: String },

    /// A color name that is not part of the CSS color table
    #[error("Unknown color name: {0}")]
    UnknownColor(String),

    /// The operation requires an open path
    #[error("Cannot {operation} a closed path")]
    ClosedPath { operation: &'static str },

    /// The operation requires a closed path
    #[error("Cannot {operation} an open path")]
    OpenPath { operation: &'static str },

    /// The operation is not available for the given input
    #[error("Unsupported: {message}")]
    Unsupported { message: String },
}

impl ModelingError {
    /// Creates an invalid option error.
    pub fn invalid_option(option: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            option,
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            message: message.into(),
        }
    }

    /// Creates an unsupported operation error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the kernel.
pub type Result<T> = std::result::Result<T, ModelingError>;
