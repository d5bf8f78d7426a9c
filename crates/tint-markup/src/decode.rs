// SPDX-License-Identifier: MIT
//
// Marker decoding — the inverse of `encode_markers`.
//
// A marker is `<#` + 6 or 8 hex digits + `>`. A run's text extends from the
// end of its marker to the start of the next well-formed marker, so a stray
// `<` or `<#xyz>` in the text is just text. Text that itself contains a
// well-formed marker cannot be told apart from a run boundary; the encoder
// never escapes, so neither does the decoder.

use tint_color::Color;

use crate::error::{MarkupError, Result};
use crate::segment::{Segmentation, segment};

/// One decoded run: a color and the text it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub color: Color,
    pub text: String,
}

impl Run {
    /// The run's text split into clusters, each paired with the run color.
    pub fn expand(&self, mode: Segmentation) -> impl Iterator<Item = (&str, Color)> {
        let color = self.color;
        segment(&self.text, mode).into_iter().map(move |c| (c, color))
    }
}

/// Flatten runs back into index-aligned clusters and colors.
#[must_use]
pub fn expand_runs(runs: &[Run], mode: Segmentation) -> (Vec<&str>, Vec<Color>) {
    runs.iter().flat_map(|run| run.expand(mode)).unzip()
}

/// Parse a marker string into its runs.
///
/// The empty string decodes to no runs.
///
/// # Errors
///
/// Returns [`MarkupError::Malformed`] if the string does not begin with a
/// marker, or if a marker is immediately followed by another marker or the
/// end of input (the encoder never writes an empty run).
pub fn decode_markers(s: &str) -> Result<Vec<Run>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    let (mut color, mut pos) = marker_at(s, 0).ok_or(MarkupError::Malformed {
        offset: 0,
        reason: "expected a `<#RRGGBB>` marker",
    })?;

    let mut runs = Vec::new();
    loop {
        let next = next_marker(s, pos);
        let end = next.map_or(s.len(), |(start, _, _)| start);
        if end == pos {
            return Err(MarkupError::Malformed {
                offset: pos,
                reason: "marker with no text",
            });
        }
        runs.push(Run {
            color,
            text: s[pos..end].to_owned(),
        });
        match next {
            Some((_, next_color, after)) => {
                color = next_color;
                pos = after;
            }
            None => break,
        }
    }
    tracing::trace!(runs = runs.len(), "decoded markers");
    Ok(runs)
}

/// First well-formed marker at or after byte `from`: `(start, color, end)`.
fn next_marker(s: &str, from: usize) -> Option<(usize, Color, usize)> {
    s[from..]
        .match_indices('<')
        .find_map(|(i, _)| marker_at(s, from + i).map(|(color, end)| (from + i, color, end)))
}

/// Parse a marker starting exactly at byte `at`, returning the color and the
/// byte offset just past the closing `>`.
fn marker_at(s: &str, at: usize) -> Option<(Color, usize)> {
    let bytes = s.as_bytes();
    if bytes.get(at) != Some(&b'<') || bytes.get(at + 1) != Some(&b'#') {
        return None;
    }
    let digits = at + 2;
    [6, 8].into_iter().find_map(|n| {
        let close = digits + n;
        if bytes.get(close) != Some(&b'>') {
            return None;
        }
        // All bytes checked are ASCII, so these are char boundaries.
        let hex = s.get(digits..close)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        Color::hex(hex).ok().map(|color| (color, close + 1))
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_markers;
    use pretty_assertions::assert_eq;

    fn c(s: &str) -> Color {
        Color::hex(s).unwrap()
    }

    fn run(color: &str, text: &str) -> Run {
        Run {
            color: c(color),
            text: text.to_owned(),
        }
    }

    #[test]
    fn empty_string_has_no_runs() {
        assert!(decode_markers("").unwrap().is_empty());
    }

    #[test]
    fn decodes_three_runs() {
        assert_eq!(
            decode_markers("<#FF0000>R<#00FF00>G<#0000FF>B").unwrap(),
            vec![run("#FF0000", "R"), run("#00FF00", "G"), run("#0000FF", "B")]
        );
    }

    #[test]
    fn decodes_alpha_markers() {
        assert_eq!(
            decode_markers("<#FF000010>ab<#FF0000FF>c").unwrap(),
            vec![run("#FF000010", "ab"), run("#FF0000FF", "c")]
        );
    }

    #[test]
    fn stray_angle_brackets_are_text() {
        assert_eq!(
            decode_markers("<#FFFFFF>a < b <#xyz> <#12>").unwrap(),
            vec![run("#FFFFFF", "a < b <#xyz> <#12>")]
        );
    }

    #[test]
    fn lower_case_markers_are_accepted() {
        assert_eq!(
            decode_markers("<#abcdef>z").unwrap(),
            vec![run("#ABCDEF", "z")]
        );
    }

    #[test]
    fn must_start_with_marker() {
        assert_eq!(
            decode_markers("hi<#FF0000>x").unwrap_err(),
            MarkupError::Malformed {
                offset: 0,
                reason: "expected a `<#RRGGBB>` marker",
            }
        );
    }

    #[test]
    fn trailing_marker_is_malformed() {
        let err = decode_markers("<#FF0000>x<#00FF00>").unwrap_err();
        assert!(matches!(err, MarkupError::Malformed { offset: 19, .. }));
    }

    #[test]
    fn back_to_back_markers_are_malformed() {
        let err = decode_markers("<#FF0000><#00FF00>x").unwrap_err();
        assert!(matches!(err, MarkupError::Malformed { offset: 9, .. }));
    }

    #[test]
    fn multibyte_text_survives() {
        let runs = decode_markers("<#FFFFFF>日本<#000000>\u{1F44B}").unwrap();
        assert_eq!(runs, vec![run("#FFFFFF", "日本"), run("#000000", "\u{1F44B}")]);
    }

    #[test]
    fn expand_then_reencode_is_identity() {
        let markup = "<#FF0000>AA<#00FF00>B<#FF000080>héllo";
        let runs = decode_markers(markup).unwrap();
        let (chars, colors) = expand_runs(&runs, Segmentation::CodePoints);
        assert_eq!(chars.len(), 8);
        assert_eq!(encode_markers(&chars, &colors).unwrap(), markup);
    }
}
