// SPDX-License-Identifier: MIT
//
// Terminal preview — the colors as the reader will see them.
//
// Same run logic as the encoder, but the "marker" is a 24-bit SGR escape.
// Terminals have no text alpha, so translucent colors (the fades) are
// composited over the given background before being compared and emitted.
// Two fade steps that composite to the same RGB share one escape.

use std::io::{self, Write};

use tint_color::{Color, ansi};

/// Write `chars` to `w` with each cluster in its color.
///
/// Pairs are taken up to the shorter of the two sequences. The output ends
/// with an SGR reset whenever anything was colored.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_preview<S: AsRef<str>>(
    w: &mut impl Write,
    chars: &[S],
    colors: &[Color],
    background: Color,
) -> io::Result<()> {
    let mut last: Option<Color> = None;
    for (cluster, color) in chars.iter().zip(colors) {
        let resolved = color.composite_over(background);
        if last != Some(resolved) {
            ansi::fg(w, resolved)?;
            last = Some(resolved);
        }
        w.write_all(cluster.as_ref().as_bytes())?;
    }
    if last.is_some() {
        ansi::reset(w)?;
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
