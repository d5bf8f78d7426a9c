//! Property tests for the scheme engine.
//!
//! These hold for every length and every color, not just the hand-picked
//! cases in the unit tests.

use proptest::prelude::*;
use tint_scheme::fade::{self, FadeDirection, MAX_ALPHA, MIN_ALPHA};
use tint_scheme::gradient;
use tint_scheme::palette::{GOLDEN, RAINBOW};
use tint_scheme::{Color, ColorScheme, GradientStops};

/// Any color, with or without an alpha channel.
fn color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>(), prop::option::of(any::<u8>()))
        .prop_map(|(r, g, b, alpha)| Color { r, g, b, alpha })
}

fn scheme() -> impl Strategy<Value = ColorScheme> {
    prop_oneof![
        (color(), color()).prop_map(|(start, end)| ColorScheme::LinearGradient { start, end }),
        prop::collection::vec(color(), 1..=6).prop_map(|stops| {
            ColorScheme::MultiGradient(GradientStops::new(stops).unwrap())
        }),
        Just(ColorScheme::Rainbow),
        Just(ColorScheme::Golden),
        color().prop_map(|base| ColorScheme::FadeIn { base }),
        color().prop_map(|base| ColorScheme::FadeOut { base }),
        (color(), color())
            .prop_map(|(consonant, vowel)| ColorScheme::ConsonantVowel { consonant, vowel }),
    ]
}

proptest! {
    #[test]
    fn one_color_per_char(scheme in scheme(), text in "\\PC{0,64}") {
        let chars: Vec<String> = text.chars().map(String::from).collect();
        prop_assert_eq!(scheme.compute_colors(&chars).len(), chars.len());
    }

    #[test]
    fn two_stop_multi_matches_linear(start in color(), end in color(), n in 0usize..200) {
        prop_assert_eq!(gradient::multi(&[start, end], n), gradient::linear(start, end, n));
    }

    #[test]
    fn gradients_hit_both_endpoints(
        stops in prop::collection::vec(color(), 2..=6),
        n in 2usize..200,
    ) {
        let colors = gradient::multi(&stops, n);
        prop_assert_eq!(colors[0], stops[0]);
        prop_assert_eq!(colors[n - 1], *stops.last().unwrap());

        let (start, end) = (stops[0], stops[1]);
        let linear = gradient::linear(start, end, n);
        prop_assert_eq!(linear[0], start);
        prop_assert_eq!(linear[n - 1], end);
    }

    #[test]
    fn gradients_keep_alpha_when_a_stop_has_one(
        stops in prop::collection::vec(color(), 2..=6),
        n in 3usize..100,
    ) {
        let any_alpha = stops.iter().any(|c| c.alpha.is_some());
        let colors = gradient::multi(&stops, n);
        for c in &colors[1..n - 1] {
            prop_assert!(c.alpha.is_none() || any_alpha);
        }
    }

    #[test]
    fn palettes_cycle_by_index(n in 0usize..100) {
        let rainbow = ColorScheme::Rainbow.colors_for_len(n).unwrap();
        let golden = ColorScheme::Golden.colors_for_len(n).unwrap();
        for i in 0..n {
            prop_assert_eq!(rainbow[i], RAINBOW[i % 6]);
            prop_assert_eq!(golden[i], GOLDEN[i % 6]);
        }
    }

    #[test]
    fn fades_span_the_alpha_range(base in color(), n in 2usize..200) {
        let fade_in = fade::fade(base, FadeDirection::In, n);
        let fade_out = fade::fade(base, FadeDirection::Out, n);
        prop_assert_eq!(fade_in[0].alpha, Some(MIN_ALPHA));
        prop_assert_eq!(fade_in[n - 1].alpha, Some(MAX_ALPHA));
        prop_assert_eq!(fade_out[0].alpha, Some(MAX_ALPHA));
        prop_assert_eq!(fade_out[n - 1].alpha, Some(MIN_ALPHA));
        prop_assert!(fade_in.windows(2).all(|w| w[0].alpha <= w[1].alpha));
        prop_assert!(fade_in.iter().all(|c| c.to_rgb8() == base.to_rgb8()));
    }

    #[test]
    fn vowel_split_uses_only_two_colors(
        consonant in color(),
        vowel in color(),
        text in "[a-zA-Z ]{0,64}",
    ) {
        let chars: Vec<String> = text.chars().map(String::from).collect();
        let colors = ColorScheme::ConsonantVowel { consonant, vowel }.compute_colors(&chars);
        for (ch, c) in chars.iter().zip(&colors) {
            let expected = if tint_scheme::is_vowel(ch) { vowel } else { consonant };
            prop_assert_eq!(*c, expected);
        }
    }
}
