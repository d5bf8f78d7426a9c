// SPDX-License-Identifier: MIT
//
// Text segmentation — how input text becomes a character sequence.
//
// The default splits on Unicode scalar values, so an emoji with a skin-tone
// modifier counts as two characters and gets two colors. Grapheme mode keeps
// user-perceived characters together instead. Neither ever splits inside a
// UTF-8 sequence.

use unicode_segmentation::UnicodeSegmentation;

/// Unit of coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Segmentation {
    /// One entry per Unicode scalar value.
    #[default]
    CodePoints,
    /// One entry per extended grapheme cluster.
    Graphemes,
}

/// Split `text` into clusters borrowed from it.
///
/// Concatenating the result always reproduces `text`.
#[must_use]
pub fn segment(text: &str, mode: Segmentation) -> Vec<&str> {
    match mode {
        Segmentation::CodePoints => text
            .char_indices()
            .map(|(i, ch)| &text[i..i + ch.len_utf8()])
            .collect(),
        Segmentation::Graphemes => text.graphemes(true).collect(),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text() {
        assert!(segment("", Segmentation::CodePoints).is_empty());
        assert!(segment("", Segmentation::Graphemes).is_empty());
    }

    #[test]
    fn ascii_is_per_byte() {
        assert_eq!(segment("RGB", Segmentation::CodePoints), ["R", "G", "B"]);
    }

    #[test]
    fn code_points_split_multibyte_correctly() {
        assert_eq!(segment("héllo", Segmentation::CodePoints).len(), 5);
        assert_eq!(segment("日本", Segmentation::CodePoints), ["日", "本"]);
    }

    #[test]
    fn code_points_split_combining_marks() {
        let text = "a\u{0301}b";
        assert_eq!(segment(text, Segmentation::CodePoints), ["a", "\u{0301}", "b"]);
    }

    #[test]
    fn graphemes_keep_combining_marks() {
        let text = "a\u{0301}b";
        assert_eq!(segment(text, Segmentation::Graphemes), ["a\u{0301}", "b"]);
    }

    #[test]
    fn graphemes_keep_zwj_sequences() {
        // woman + zwj + rocket = woman astronaut (1 grapheme, 3 code points)
        let text = "x\u{1F469}\u{200D}\u{1F680}";
        assert_eq!(segment(text, Segmentation::Graphemes).len(), 2);
        assert_eq!(segment(text, Segmentation::CodePoints).len(), 4);
    }

    #[test]
    fn concatenation_reproduces_text() {
        let text = "Grüße, 世界! \u{1F44B}\u{1F3FD}";
        for mode in [Segmentation::CodePoints, Segmentation::Graphemes] {
            assert_eq!(segment(text, mode).concat(), text);
        }
    }
}
