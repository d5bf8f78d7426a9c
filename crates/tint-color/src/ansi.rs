// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation for colored text preview.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit: the preview writer in tint-markup tracks
// the last emitted color and only calls in here on a change.
//
// Only 24-bit TrueColor is produced. Terminals have no notion of text alpha,
// so callers composite translucent colors before asking for an escape.

use std::io::{self, Write};

use crate::color::Color;

/// Set the foreground (text) color with the `38;2;R;G;B` SGR sequence.
///
/// Any alpha channel is ignored; composite first with
/// [`Color::composite_over`] if it matters.
#[inline]
pub fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let (r, g, b) = color.to_rgb8();
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
