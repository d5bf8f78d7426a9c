//! Scheme dispatch — one enum, one color per character.

use std::fmt;
use std::str::FromStr;

use tint_color::Color;

use crate::error::SchemeError;
use crate::fade::{self, FadeDirection};
use crate::gradient;
use crate::palette::{self, GOLDEN, RAINBOW};
use crate::stops::GradientStops;

/// Default consonant color for the vowel split.
pub const DEFAULT_CONSONANT: Color = Color::rgb(0xFF, 0xFF, 0x00);

/// Default vowel color for the vowel split.
pub const DEFAULT_VOWEL: Color = Color::rgb(0x00, 0xAA, 0xFF);

/// Default base color for fades.
pub const DEFAULT_FADE: Color = Color::rgb(0xFF, 0x00, 0x00);

// ---------------------------------------------------------------------------
// ColorScheme
// ---------------------------------------------------------------------------

/// The active coloring algorithm. Exactly one is in effect per call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    /// Two-color gradient across the whole text.
    LinearGradient { start: Color, end: Color },
    /// Evenly spaced multi-stop gradient.
    MultiGradient(GradientStops),
    /// Six hue-ordered colors, cycled.
    Rainbow,
    /// Six golden shimmer colors, cycled.
    Golden,
    /// Base color, faint to opaque.
    FadeIn { base: Color },
    /// Base color, opaque to faint.
    FadeOut { base: Color },
    /// One color for ASCII vowels, another for everything else.
    ConsonantVowel { consonant: Color, vowel: Color },
}

impl ColorScheme {
    /// Which variant this is.
    #[must_use]
    pub const fn kind(&self) -> SchemeKind {
        match self {
            Self::LinearGradient { .. } => SchemeKind::Gradient,
            Self::MultiGradient(_) => SchemeKind::MultiGradient,
            Self::Rainbow => SchemeKind::Rainbow,
            Self::Golden => SchemeKind::Golden,
            Self::FadeIn { .. } => SchemeKind::FadeIn,
            Self::FadeOut { .. } => SchemeKind::FadeOut,
            Self::ConsonantVowel { .. } => SchemeKind::ConsonantVowel,
        }
    }

    /// Colors for a sequence of `n` characters, for schemes that depend on
    /// position only.
    ///
    /// Returns `None` for [`ColorScheme::ConsonantVowel`], which needs the
    /// characters themselves.
    #[must_use]
    pub fn colors_for_len(&self, n: usize) -> Option<Vec<Color>> {
        Some(match self {
            Self::LinearGradient { start, end } => gradient::linear(*start, *end, n),
            Self::MultiGradient(stops) => gradient::multi(stops.as_slice(), n),
            Self::Rainbow => palette::cycle(&RAINBOW, n),
            Self::Golden => palette::cycle(&GOLDEN, n),
            Self::FadeIn { base } => fade::fade(*base, FadeDirection::In, n),
            Self::FadeOut { base } => fade::fade(*base, FadeDirection::Out, n),
            Self::ConsonantVowel { .. } => return None,
        })
    }

    /// One color per character; the result has exactly `chars.len()` entries.
    #[must_use]
    pub fn compute_colors<S: AsRef<str>>(&self, chars: &[S]) -> Vec<Color> {
        tracing::debug!(
            scheme = self.kind().name(),
            len = chars.len(),
            "computing colors"
        );
        if let Self::ConsonantVowel { consonant, vowel } = *self {
            return chars
                .iter()
                .map(|ch| if is_vowel(ch.as_ref()) { vowel } else { consonant })
                .collect();
        }
        self.colors_for_len(chars.len()).unwrap_or_default()
    }
}

impl Default for ColorScheme {
    /// The default two-stop red gradient.
    fn default() -> Self {
        Self::MultiGradient(GradientStops::default())
    }
}

/// Free-function form of [`ColorScheme::compute_colors`].
#[must_use]
pub fn compute_colors<S: AsRef<str>>(chars: &[S], scheme: &ColorScheme) -> Vec<Color> {
    scheme.compute_colors(chars)
}

/// Whether a character cluster counts as a vowel.
///
/// Only the cluster's first code point is checked, and only against ASCII
/// `aeiou` in either case. Accented and non-Latin vowels are consonants here.
#[must_use]
pub fn is_vowel(cluster: &str) -> bool {
    cluster
        .chars()
        .next()
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
}

// ---------------------------------------------------------------------------
// SchemeKind
// ---------------------------------------------------------------------------

/// Name-only view of [`ColorScheme`], for selection menus and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    Gradient,
    MultiGradient,
    Rainbow,
    Golden,
    FadeIn,
    FadeOut,
    ConsonantVowel,
}

impl SchemeKind {
    /// Every kind, in menu order.
    pub const ALL: [Self; 7] = [
        Self::Gradient,
        Self::MultiGradient,
        Self::Rainbow,
        Self::Golden,
        Self::FadeIn,
        Self::FadeOut,
        Self::ConsonantVowel,
    ];

    /// Kebab-case name, as used in config files and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::MultiGradient => "multi-gradient",
            Self::Rainbow => "rainbow",
            Self::Golden => "golden",
            Self::FadeIn => "fade-in",
            Self::FadeOut => "fade-out",
            Self::ConsonantVowel => "consonant-vowel",
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemeKind {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                SchemeError::InvalidSchemeParameters(format!("unknown scheme `{s}`"))
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
