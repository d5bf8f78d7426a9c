// SPDX-License-Identifier: MIT
//
// tint color value — 8-bit sRGB channels with an optional alpha byte.
//
// A color is its hex string. Two colors compare equal exactly when their
// canonical `#RRGGBB[AA]` forms are byte-identical, which is what the markup
// encoder groups runs by. `#FF0000` and `#FF0000FF` are therefore different colors.
//
// Interpolation happens per channel in f64 and rounds half away from zero.
// All channel inputs are non-negative, so this matches round-half-up.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An sRGB color with an optional alpha channel.
///
/// # Examples
///
/// ```
/// use tint_color::Color;
///
/// let red = Color::hex("#ff0000").unwrap();
/// assert_eq!(red.to_string(), "#FF0000");
///
/// let faded = red.with_alpha(0x10);
/// assert_eq!(faded.to_string(), "#FF000010");
///
/// let dark = Color::hex("110000").unwrap();
/// assert_eq!(red.average(dark).to_string(), "#880000");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel. `None` means the color has no alpha suffix at all,
    /// which is distinct from an explicit `0xFF`.
    pub alpha: Option<u8>,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: None }
    }

    /// Create a color with an explicit alpha channel.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, alpha: Some(a) }
    }

    /// Parse a hex color string.
    ///
    /// Accepts `#RRGGBB` and `#RRGGBBAA`, with or without the leading `#`,
    /// in either letter case.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseColorError`] if the string is empty, contains a
    /// non-hex digit, or has a digit count other than 6 or 8.
    pub fn hex(s: &str) -> Result<Self, ParseColorError> {
        parse_hex(s)
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha byte (replacing any existing one).
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { alpha: Some(a), ..self }
    }

    /// Return a copy with the alpha channel removed.
    #[inline]
    #[must_use]
    pub const fn opaque(self) -> Self {
        Self { alpha: None, ..self }
    }

    /// Effective opacity: a missing alpha channel counts as fully opaque.
    #[inline]
    #[must_use]
    pub const fn opacity(self) -> u8 {
        match self.alpha {
            Some(a) => a,
            None => 255,
        }
    }

    // ─── Interpolation ───────────────────────────────────────────────────

    /// Linear interpolation toward `other`.
    ///
    /// `t <= 0.0` returns `self` and `t >= 1.0` returns `other`, unchanged.
    /// In between, the alpha channel is interpolated too whenever either side
    /// has one (a missing alpha counts as `0xFF`); two colors without alpha
    /// mix to a color without alpha.
    #[must_use]
    pub fn mix(self, other: Self, t: f64) -> Self {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        let alpha = match (self.alpha, other.alpha) {
            (None, None) => None,
            _ => Some(lerp_channel(self.opacity(), other.opacity(), t)),
        };
        Self {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
            alpha,
        }
    }

    /// Channel-wise rounded average of two colors, alpha included.
    ///
    /// Used to seed a new gradient stop halfway between two existing ones.
    #[must_use]
    pub fn average(self, other: Self) -> Self {
        self.mix(other, 0.5)
    }

    /// Composite this color over an opaque background.
    ///
    /// Colors without an alpha channel are returned unchanged (minus alpha).
    /// Blending is a straight sRGB-space lerp.
    #[must_use]
    pub fn composite_over(self, background: Self) -> Self {
        match self.alpha {
            None | Some(255) => self.opaque(),
            Some(a) => background.opaque().mix(self.opaque(), f64::from(a) / 255.0),
        }
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// The RGB channels as a tuple.
    #[inline]
    #[must_use]
    pub const fn to_rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Canonical hex form: `#RRGGBB` or `#RRGGBBAA`, upper-case digits.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Length of the canonical hex form in bytes (7 or 9).
    #[inline]
    #[must_use]
    pub const fn hex_len(self) -> usize {
        if self.alpha.is_some() { 9 } else { 7 }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b, alpha } = *self;
        match alpha {
            Some(a) => write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}"),
            None => write!(f, "#{r:02X}{g:02X}{b:02X}"),
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl Default for Color {
    /// Defaults to opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Channel Math ────────────────────────────────────────────────────────────

/// Interpolate one 8-bit channel: `round(a + (b - a) * t)`.
///
/// The product is kept unfused so results stay bit-identical to the plain
/// formula at exact `.5` boundaries.
#[inline]
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops
)]
pub fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let b = f64::from(b);
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Why a string was rejected as a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Nothing (or only `#`) was given.
    #[error("empty color string")]
    Empty,

    /// A character outside `0-9a-fA-F`.
    #[error("invalid color `{input}`: `{found}` is not a hex digit")]
    InvalidDigit { input: String, found: char },

    /// Hex digits were fine but there were not 6 or 8 of them.
    #[error("invalid color `{input}`: expected 6 or 8 hex digits, found {len}")]
    InvalidLength { input: String, len: usize },
}

fn parse_hex(input: &str) -> Result<Color, ParseColorError> {
    let s = input.strip_prefix('#').unwrap_or(input);
    if s.is_empty() {
        return Err(ParseColorError::Empty);
    }
    if let Some(found) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidDigit {
            input: input.to_owned(),
            found,
        });
    }

    // All ASCII from here on, so byte offsets are digit offsets.
    let bytes = s.as_bytes();
    match bytes.len() {
        6 => Ok(Color::rgb(
            hex_byte(bytes[0], bytes[1]),
            hex_byte(bytes[2], bytes[3]),
            hex_byte(bytes[4], bytes[5]),
        )),
        8 => Ok(Color::rgba(
            hex_byte(bytes[0], bytes[1]),
            hex_byte(bytes[2], bytes[3]),
            hex_byte(bytes[4], bytes[5]),
            hex_byte(bytes[6], bytes[7]),
        )),
        len => Err(ParseColorError::InvalidLength {
            input: input.to_owned(),
            len,
        }),
    }
}

#[inline]
const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

#[inline]
const fn hex_byte(hi: u8, lo: u8) -> u8 {
    hex_digit(hi) << 4 | hex_digit(lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
