// SPDX-License-Identifier: MIT
//
// Marker encoding — run-length compression of per-character colors.
//
// MarkerWriter remembers the color of the last cluster it wrote. A marker is
// emitted only when the next cluster's color differs, so each maximal run of
// identical colors costs exactly one `<#COLOR>` prefix. Color equality is the
// canonical hex string, not perceptual distance: `#FF0000` and `#FF0000FF`
// start separate runs.

use std::fmt::Write as _;

use tint_color::Color;

use crate::error::{MarkupError, Result};

// ─── MarkerWriter ────────────────────────────────────────────────────────────

/// Stateful run writer that skips redundant markers.
#[derive(Debug, Default)]
pub struct MarkerWriter {
    last: Option<Color>,
    runs: usize,
}

impl MarkerWriter {
    /// Create a writer with no active color.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None, runs: 0 }
    }

    /// Append one cluster, preceded by a marker if its color starts a new run.
    pub fn push(&mut self, out: &mut String, cluster: &str, color: Color) {
        if self.last != Some(color) {
            // Writing into a String cannot fail.
            write!(out, "<{color}>").ok();
            self.last = Some(color);
            self.runs += 1;
        }
        out.push_str(cluster);
    }

    /// Number of runs (markers) written so far.
    #[must_use]
    pub const fn runs(&self) -> usize {
        self.runs
    }
}

// ─── Encoding ────────────────────────────────────────────────────────────────

/// Encode index-aligned clusters and colors as a marker string.
///
/// `["A", "A", "B"]` with `[#FF0000, #FF0000, #00FF00]` becomes
/// `<#FF0000>AA<#00FF00>B`. Empty input yields an empty string.
///
/// # Errors
///
/// Returns [`MarkupError::LengthMismatch`] if the two sequences differ in
/// length.
pub fn encode_markers<S: AsRef<str>>(chars: &[S], colors: &[Color]) -> Result<String> {
    if chars.len() != colors.len() {
        return Err(MarkupError::LengthMismatch {
            chars: chars.len(),
            colors: colors.len(),
        });
    }
    Ok(encode_aligned(chars, colors))
}

/// Encode sequences already known to be index-aligned.
pub(crate) fn encode_aligned<S: AsRef<str>>(chars: &[S], colors: &[Color]) -> String {
    let mut out = String::with_capacity(encoded_size(chars, colors));
    let mut writer = MarkerWriter::new();
    for (cluster, &color) in chars.iter().zip(colors) {
        writer.push(&mut out, cluster.as_ref(), color);
    }
    tracing::trace!(runs = writer.runs(), bytes = out.len(), "encoded markers");
    out
}

/// Exact byte length of the encoding: all cluster text plus one `<#...>`
/// per run.
fn encoded_size<S: AsRef<str>>(chars: &[S], colors: &[Color]) -> usize {
    let text_len: usize = chars.iter().map(|c| c.as_ref().len()).sum();
    let run_starts = colors
        .first()
        .copied()
        .into_iter()
        .chain(colors.windows(2).filter(|w| w[0] != w[1]).map(|w| w[1]));
    let markers: usize = run_starts.map(|c| c.hex_len() + 2).sum();
    text_len + markers
}

// ─── Tests ───────────────────────────────────────────────────────────────────
