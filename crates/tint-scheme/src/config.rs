//! Serializable scheme configuration.
//!
//! [`SchemeConfig`] is the wire shape a front end hands over: a `scheme` tag
//! plus hex strings. Converting it into a [`ColorScheme`] is where color
//! strings and stop counts get validated.
//!
//! ```json
//! { "scheme": "multi-gradient", "stops": ["#FF0000", "#FFFF00", "#0000FF"] }
//! { "scheme": "fade-out", "base": "#00AAFF" }
//! { "scheme": "rainbow" }
//! ```

use serde::{Deserialize, Serialize};
use tint_color::Color;

use crate::error::{Result, SchemeError};
use crate::scheme::{ColorScheme, DEFAULT_CONSONANT, DEFAULT_FADE, DEFAULT_VOWEL};
use crate::stops::GradientStops;

/// A scheme selection with its parameters as unvalidated strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "kebab-case")]
pub enum SchemeConfig {
    Gradient {
        start: String,
        end: String,
    },
    MultiGradient {
        stops: Vec<String>,
    },
    Rainbow,
    Golden,
    FadeIn {
        #[serde(default = "default_fade")]
        base: String,
    },
    FadeOut {
        #[serde(default = "default_fade")]
        base: String,
    },
    ConsonantVowel {
        #[serde(default = "default_consonant")]
        consonant: String,
        #[serde(default = "default_vowel")]
        vowel: String,
    },
}

fn default_fade() -> String {
    DEFAULT_FADE.to_hex()
}

fn default_consonant() -> String {
    DEFAULT_CONSONANT.to_hex()
}

fn default_vowel() -> String {
    DEFAULT_VOWEL.to_hex()
}

impl TryFrom<SchemeConfig> for ColorScheme {
    type Error = SchemeError;

    fn try_from(config: SchemeConfig) -> Result<Self> {
        Ok(match config {
            SchemeConfig::Gradient { start, end } => Self::LinearGradient {
                start: Color::hex(&start)?,
                end: Color::hex(&end)?,
            },
            SchemeConfig::MultiGradient { stops } => {
                Self::MultiGradient(GradientStops::parse(&stops)?)
            }
            SchemeConfig::Rainbow => Self::Rainbow,
            SchemeConfig::Golden => Self::Golden,
            SchemeConfig::FadeIn { base } => Self::FadeIn { base: Color::hex(&base)? },
            SchemeConfig::FadeOut { base } => Self::FadeOut { base: Color::hex(&base)? },
            SchemeConfig::ConsonantVowel { consonant, vowel } => Self::ConsonantVowel {
                consonant: Color::hex(&consonant)?,
                vowel: Color::hex(&vowel)?,
            },
        })
    }
}

impl From<&ColorScheme> for SchemeConfig {
    fn from(scheme: &ColorScheme) -> Self {
        match scheme {
            ColorScheme::LinearGradient { start, end } => Self::Gradient {
                start: start.to_hex(),
                end: end.to_hex(),
            },
            ColorScheme::MultiGradient(stops) => Self::MultiGradient {
                stops: stops.as_slice().iter().map(ToString::to_string).collect(),
            },
            ColorScheme::Rainbow => Self::Rainbow,
            ColorScheme::Golden => Self::Golden,
            ColorScheme::FadeIn { base } => Self::FadeIn { base: base.to_hex() },
            ColorScheme::FadeOut { base } => Self::FadeOut { base: base.to_hex() },
            ColorScheme::ConsonantVowel { consonant, vowel } => Self::ConsonantVowel {
                consonant: consonant.to_hex(),
                vowel: vowel.to_hex(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
