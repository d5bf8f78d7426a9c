//! Error types for scheme construction.

use thiserror::Error;
use tint_color::ParseColorError;

/// Everything that can go wrong while building a [`ColorScheme`].
///
/// Computing colors from an already-built scheme never fails; all
/// validation happens up front.
///
/// [`ColorScheme`]: crate::ColorScheme
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeError {
    /// A color string is not `#RRGGBB` / `#RRGGBBAA`.
    #[error(transparent)]
    InvalidColorFormat(#[from] ParseColorError),

    /// Structurally invalid parameters: stop counts, stop indices, scheme names.
    #[error("invalid scheme parameters: {0}")]
    InvalidSchemeParameters(String),
}

/// Result type for scheme operations.
pub type Result<T> = std::result::Result<T, SchemeError>;
