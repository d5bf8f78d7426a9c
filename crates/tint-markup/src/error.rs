// SPDX-License-Identifier: MIT
//
// Errors for marker encoding and decoding.

use thiserror::Error;
use tint_scheme::SchemeError;

/// Errors from the markup layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// The character and color sequences are not index-aligned.
    #[error("cannot encode {chars} characters with {colors} colors")]
    LengthMismatch { chars: usize, colors: usize },

    /// A marker string that the canonical encoder could not have produced.
    #[error("malformed marker string at byte {offset}: {reason}")]
    Malformed { offset: usize, reason: &'static str },

    /// The scheme configuration behind a pipeline was invalid.
    #[error(transparent)]
    Scheme(#[from] SchemeError),
}

/// Result type for markup operations.
pub type Result<T> = std::result::Result<T, MarkupError>;
