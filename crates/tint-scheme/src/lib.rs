//! # tint-scheme — per-character color scheme engine
//!
//! Maps a character sequence and one [`ColorScheme`] to a color sequence of
//! identical length. Every scheme is a pure function of the sequence length
//! (and, for the vowel split, of the characters themselves).
//!
//! # Architecture
//!
//! ```text
//! SchemeConfig (JSON) ──try_from──▶ ColorScheme
//!                                       │
//!        chars ─────────────────────────┤
//!                                       ▼
//! gradient.rs:  linear / multi-stop interpolation
//! palette.rs:   fixed cyclic palettes (rainbow, golden)
//! fade.rs:      alpha ramps over a base color
//! scheme.rs:    dispatch + consonant/vowel split
//!                                       │
//!                                       ▼
//!                               Vec<Color> (len == chars.len())
//! ```
//!
//! Nothing here caches or keeps state between calls.

// Index-to-position math casts small loop indices to f64.
#![allow(clippy::cast_precision_loss)]

pub mod config;
pub mod error;
pub mod fade;
pub mod gradient;
pub mod palette;
pub mod scheme;
pub mod stops;

pub use config::SchemeConfig;
pub use error::{Result, SchemeError};
pub use scheme::{ColorScheme, SchemeKind, compute_colors, is_vowel};
pub use stops::GradientStops;
pub use tint_color::Color;
