//! Alpha ramps — a fixed base color whose opacity rises or falls.
//!
//! The ramp runs between [`MIN_ALPHA`] and [`MAX_ALPHA`] so even the faintest
//! character stays faintly visible. A lone character is always fully opaque,
//! whichever direction the fade runs.

use tint_color::Color;

/// Opacity of the faintest character.
pub const MIN_ALPHA: u8 = 0x10;

/// Opacity of the strongest character.
pub const MAX_ALPHA: u8 = 0xFF;

/// Which end of the text is faint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FadeDirection {
    /// Faint at the start, opaque at the end.
    In,
    /// Opaque at the start, faint at the end.
    Out,
}

/// Alpha value for index `i` of `n` (`n >= 1`).
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops
)]
pub fn alpha_at(direction: FadeDirection, i: usize, n: usize) -> u8 {
    let range = f64::from(MAX_ALPHA - MIN_ALPHA);
    let alpha = match direction {
        FadeDirection::In => {
            let t = if n == 1 { 1.0 } else { i as f64 / (n - 1) as f64 };
            f64::from(MIN_ALPHA) + range * t
        }
        FadeDirection::Out => {
            let t = if n == 1 { 0.0 } else { i as f64 / (n - 1) as f64 };
            f64::from(MAX_ALPHA) - range * t
        }
    };
    // Safe: t is in [0, 1], so alpha is in [MIN_ALPHA, MAX_ALPHA].
    alpha.round().clamp(0.0, 255.0) as u8
}

/// The base color's RGB with a per-position alpha appended.
///
/// Any alpha already on `base` is replaced.
#[must_use]
pub fn fade(base: Color, direction: FadeDirection, n: usize) -> Vec<Color> {
    (0..n)
        .map(|i| base.with_alpha(alpha_at(direction, i, n)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
