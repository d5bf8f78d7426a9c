// SPDX-License-Identifier: MIT
//
// The full text → colors → markup pipeline.
//
// Colorizer holds the caller's choices (scheme, segmentation, length limit)
// and recomputes everything from scratch on each call. It keeps no results
// between calls; two renders of the same text are always identical.

use tint_color::Color;
use tint_scheme::{ColorScheme, SchemeConfig};

use crate::encode::encode_aligned;
use crate::error::Result;
use crate::limit::{OutputLimit, encoded_len};
use crate::segment::{Segmentation, segment};

/// The output of one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered<'t> {
    /// Clusters borrowed from the input text.
    pub chars: Vec<&'t str>,
    /// One color per cluster.
    pub colors: Vec<Color>,
    /// The encoded marker string.
    pub markup: String,
}

impl Rendered<'_> {
    /// Encoded length in UTF-16 code units.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        encoded_len(&self.markup)
    }
}

/// Result of offering a candidate edit to [`Colorizer::accept_edit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome<'t> {
    /// The candidate fits; here is its render.
    Accepted(Rendered<'t>),
    /// The candidate's markup would be `encoded_len` long, over the limit.
    Rejected { encoded_len: usize },
}

/// Scheme + segmentation + limit, applied to text on demand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Colorizer {
    scheme: ColorScheme,
    segmentation: Segmentation,
    limit: OutputLimit,
}

impl Colorizer {
    /// A colorizer with code-point segmentation and the default limit.
    #[must_use]
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            segmentation: Segmentation::default(),
            limit: OutputLimit::default(),
        }
    }

    /// Build from an unvalidated scheme configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::Scheme`](crate::MarkupError::Scheme) if the
    /// configuration has a malformed color or a bad stop count.
    pub fn from_config(config: SchemeConfig) -> Result<Self> {
        Ok(Self::new(ColorScheme::try_from(config)?))
    }

    /// Use a different segmentation.
    #[must_use]
    pub fn with_segmentation(mut self, segmentation: Segmentation) -> Self {
        self.segmentation = segmentation;
        self
    }

    /// Use a different output limit.
    #[must_use]
    pub fn with_limit(mut self, limit: OutputLimit) -> Self {
        self.limit = limit;
        self
    }

    /// The active scheme.
    #[must_use]
    pub const fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    /// Swap in a new scheme.
    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
    }

    /// The configured limit.
    #[must_use]
    pub const fn limit(&self) -> OutputLimit {
        self.limit
    }

    /// Segment, color and encode `text`.
    #[must_use]
    pub fn render<'t>(&self, text: &'t str) -> Rendered<'t> {
        let chars = segment(text, self.segmentation);
        let colors = self.scheme.compute_colors(&chars);
        let markup = encode_aligned(&chars, &colors);
        tracing::debug!(
            scheme = self.scheme.kind().name(),
            chars = chars.len(),
            encoded_len = encoded_len(&markup),
            "rendered"
        );
        Rendered {
            chars,
            colors,
            markup,
        }
    }

    /// Render `candidate` and accept it only if its markup fits the limit.
    ///
    /// This is the veto a text field applies on every keystroke: an edit
    /// that would push the encoded output past the limit is refused and the
    /// previous text stays.
    #[must_use]
    pub fn accept_edit<'t>(&self, candidate: &'t str) -> EditOutcome<'t> {
        let rendered = self.render(candidate);
        if self.limit.fits(&rendered.markup) {
            EditOutcome::Accepted(rendered)
        } else {
            EditOutcome::Rejected {
                encoded_len: rendered.encoded_len(),
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarkupError;
    use pretty_assertions::assert_eq;
    use tint_scheme::GradientStops;
    use tracing_test::traced_test;

    #[test]
    fn default_renders_red_gradient() {
        let rendered = Colorizer::default().render("ab");
        assert_eq!(rendered.markup, "<#FF0000>a<#110000>b");
        assert_eq!(rendered.encoded_len(), 20);
    }

    #[test]
    fn empty_text_renders_nothing() {
        let rendered = Colorizer::new(ColorScheme::Rainbow).render("");
        assert!(rendered.chars.is_empty());
        assert!(rendered.colors.is_empty());
        assert_eq!(rendered.markup, "");
    }

    #[test]
    fn single_color_text_is_one_run() {
        let stops = GradientStops::new(vec![Color::WHITE]).unwrap();
        let rendered = Colorizer::new(ColorScheme::MultiGradient(stops)).render("hello");
        assert_eq!(rendered.markup, "<#FFFFFF>hello");
    }

    #[test]
    fn vowel_split_groups_runs() {
        let scheme = ColorScheme::ConsonantVowel {
            consonant: Color::hex("#FFFF00").unwrap(),
            vowel: Color::hex("#00AAFF").unwrap(),
        };
        let rendered = Colorizer::new(scheme).render("tree");
        assert_eq!(rendered.markup, "<#FFFF00>tr<#00AAFF>ee");
    }

    #[test]
    fn grapheme_mode_colors_clusters() {
        let text = "a\u{0301}b";
        let by_code_point = Colorizer::new(ColorScheme::Rainbow).render(text);
        let by_grapheme = Colorizer::new(ColorScheme::Rainbow)
            .with_segmentation(Segmentation::Graphemes)
            .render(text);
        assert_eq!(by_code_point.colors.len(), 3);
        assert_eq!(by_grapheme.colors.len(), 2);
        assert_eq!(by_grapheme.markup, "<#FF0000>a\u{0301}<#FF7F00>b");
    }

    #[test]
    fn from_config_reports_scheme_errors() {
        let config = SchemeConfig::FadeIn { base: "#nothex".into() };
        assert!(matches!(
            Colorizer::from_config(config),
            Err(MarkupError::Scheme(_))
        ));
    }

    #[test]
    fn accept_edit_within_limit() {
        let colorizer = Colorizer::new(ColorScheme::Golden);
        let EditOutcome::Accepted(rendered) = colorizer.accept_edit("gold") else {
            panic!("short edit should be accepted");
        };
        assert_eq!(rendered.chars, ["g", "o", "l", "d"]);
    }

    #[test]
    fn accept_edit_over_limit() {
        // Rainbow changes color every character: 10 code units per char.
        let colorizer = Colorizer::new(ColorScheme::Rainbow);
        assert!(matches!(
            colorizer.accept_edit(&"x".repeat(28)),
            EditOutcome::Accepted(_)
        ));
        assert_eq!(
            colorizer.accept_edit(&"x".repeat(29)),
            EditOutcome::Rejected { encoded_len: 290 }
        );
    }

    #[test]
    fn custom_limit() {
        let colorizer = Colorizer::default().with_limit(OutputLimit::new(10));
        assert!(matches!(colorizer.accept_edit("a"), EditOutcome::Accepted(_)));
        assert!(matches!(colorizer.accept_edit("ab"), EditOutcome::Rejected { .. }));
        assert_eq!(colorizer.limit().max(), 10);
    }

    #[test]
    fn set_scheme_switches_output() {
        let mut colorizer = Colorizer::default();
        colorizer.set_scheme(ColorScheme::FadeOut { base: Color::WHITE });
        assert_eq!(colorizer.render("a").markup, "<#FFFFFFFF>a");
        assert_eq!(colorizer.scheme().kind().name(), "fade-out");
    }

    #[test]
    fn render_is_deterministic() {
        let colorizer = Colorizer::new(ColorScheme::Golden);
        assert_eq!(colorizer.render("same text"), colorizer.render("same text"));
    }

    #[test]
    #[traced_test]
    fn render_logs_summary() {
        let _ = Colorizer::new(ColorScheme::Rainbow).render("abc");
        assert!(logs_contain("rendered"));
        assert!(logs_contain("encoded_len=30"));
    }
}
