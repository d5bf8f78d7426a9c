//! Named fixed palettes — cycled one color per character.

use tint_color::Color;

/// Hue-ordered rainbow: red, orange, yellow, green, blue, violet.
pub const RAINBOW: [Color; 6] = [
    Color::rgb(0xFF, 0x00, 0x00),
    Color::rgb(0xFF, 0x7F, 0x00),
    Color::rgb(0xFF, 0xFF, 0x00),
    Color::rgb(0x00, 0xFF, 0x00),
    Color::rgb(0x00, 0x00, 0xFF),
    Color::rgb(0x8B, 0x00, 0xFF),
];

/// Golden shimmer: bright yellow up to pale yellow and back, so the cycle
/// "breathes" without a seam when it wraps.
pub const GOLDEN: [Color; 6] = [
    Color::rgb(0xFF, 0xCC, 0x00),
    Color::rgb(0xFF, 0xDD, 0x22),
    Color::rgb(0xFF, 0xEE, 0x55),
    Color::rgb(0xFF, 0xFF, 0xAA),
    Color::rgb(0xFF, 0xEE, 0x55),
    Color::rgb(0xFF, 0xDD, 0x22),
];

/// Repeat `palette` over `n` positions: `out[i] = palette[i % len]`.
///
/// An empty palette yields an empty result.
#[must_use]
pub fn cycle(palette: &[Color], n: usize) -> Vec<Color> {
    if palette.is_empty() {
        return Vec::new();
    }
    palette.iter().copied().cycle().take(n).collect()
}

/// Look up a builtin palette by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn palette(name: &str) -> Option<&'static [Color]> {
    match name {
        "rainbow" => Some(&RAINBOW),
        "golden" => Some(&GOLDEN),
        _ => None,
    }
}

/// List all builtin palette names.
#[must_use]
pub const fn palette_names() -> &'static [&'static str] {
    &["rainbow", "golden"]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
