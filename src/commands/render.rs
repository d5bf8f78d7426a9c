// SPDX-License-Identifier: MIT
//
// `tint render` — text in, marker string out.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, bail};
use tint_color::Color;
use tint_markup::{Colorizer, OutputLimit, Segmentation, encoded_len, write_preview};
use tint_scheme::scheme::{DEFAULT_CONSONANT, DEFAULT_FADE, DEFAULT_VOWEL};
use tint_scheme::{ColorScheme, GradientStops, SchemeConfig, SchemeKind};
use tracing::{debug, info, warn};

use crate::SchemeArgs;

/// Everything `render` needs, gathered from the command line.
#[derive(Debug)]
pub struct RenderOptions {
    pub text: Option<String>,
    pub scheme: SchemeArgs,
    pub graphemes: bool,
    pub preview: bool,
    pub background: Color,
    pub max_len: usize,
    pub strict: bool,
}

pub fn run(opts: &RenderOptions) -> anyhow::Result<()> {
    let text = match &opts.text {
        Some(text) => text.clone(),
        None => read_stdin()?,
    };

    let scheme = build_scheme(&opts.scheme)?;
    info!("Rendering {} bytes with {}", text.len(), scheme.kind());

    let segmentation = if opts.graphemes {
        Segmentation::Graphemes
    } else {
        Segmentation::CodePoints
    };
    let colorizer = Colorizer::new(scheme)
        .with_segmentation(segmentation)
        .with_limit(OutputLimit::new(opts.max_len));
    let rendered = colorizer.render(&text);

    let len = rendered.encoded_len();
    if !colorizer.limit().fits(&rendered.markup) {
        if opts.strict {
            bail!("output is {len} characters, over the limit of {}", opts.max_len);
        }
        warn!("Output is {len} characters, over the limit of {}", opts.max_len);
    }

    let mut out = io::stdout().lock();
    writeln!(out, "{}", rendered.markup)?;
    if opts.preview {
        write_preview(&mut out, &rendered.chars, &rendered.colors, opts.background)?;
        writeln!(out)?;
    }
    out.flush()?;

    debug!(
        chars = rendered.chars.len(),
        encoded_len = encoded_len(&rendered.markup),
        "render done"
    );
    Ok(())
}

/// Turn the scheme flags (or the config file they point at) into a scheme.
pub fn build_scheme(args: &SchemeArgs) -> anyhow::Result<ColorScheme> {
    for flag in ignored_flags(args) {
        match &args.config {
            Some(path) => warn!("Ignoring {flag}: scheme comes from {}", path.display()),
            None => warn!("Ignoring {flag}: not used by the {} scheme", args.scheme),
        }
    }

    if let Some(path) = &args.config {
        return load_config(path);
    }

    let scheme = match args.scheme {
        SchemeKind::Gradient => {
            let stops = stops_or_default(&args.stops)?;
            ColorScheme::LinearGradient {
                start: stops.first(),
                end: stops.last(),
            }
        }
        SchemeKind::MultiGradient => ColorScheme::MultiGradient(stops_or_default(&args.stops)?),
        SchemeKind::Rainbow => ColorScheme::Rainbow,
        SchemeKind::Golden => ColorScheme::Golden,
        SchemeKind::FadeIn => ColorScheme::FadeIn {
            base: args.fade_color.unwrap_or(DEFAULT_FADE),
        },
        SchemeKind::FadeOut => ColorScheme::FadeOut {
            base: args.fade_color.unwrap_or(DEFAULT_FADE),
        },
        SchemeKind::ConsonantVowel => ColorScheme::ConsonantVowel {
            consonant: args.consonant.unwrap_or(DEFAULT_CONSONANT),
            vowel: args.vowel.unwrap_or(DEFAULT_VOWEL),
        },
    };
    Ok(scheme)
}

/// Scheme flags that were given but have no effect on the selected scheme.
fn ignored_flags(args: &SchemeArgs) -> Vec<&'static str> {
    let given = [
        ("--stop", !args.stops.is_empty()),
        ("--fade-color", args.fade_color.is_some()),
        ("--consonant", args.consonant.is_some()),
        ("--vowel", args.vowel.is_some()),
    ];
    let used: &[&str] = if args.config.is_some() {
        &[]
    } else {
        match args.scheme {
            SchemeKind::Gradient | SchemeKind::MultiGradient => &["--stop"],
            SchemeKind::FadeIn | SchemeKind::FadeOut => &["--fade-color"],
            SchemeKind::ConsonantVowel => &["--consonant", "--vowel"],
            SchemeKind::Rainbow | SchemeKind::Golden => &[],
        }
    };
    given
        .into_iter()
        .filter(|&(flag, present)| present && !used.contains(&flag))
        .map(|(flag, _)| flag)
        .collect()
}

fn stops_or_default(stops: &[Color]) -> anyhow::Result<GradientStops> {
    if stops.is_empty() {
        return Ok(GradientStops::default());
    }
    GradientStops::new(stops.to_vec()).context("invalid --stop list")
}

fn load_config(path: &Path) -> anyhow::Result<ColorScheme> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: SchemeConfig = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    debug!(?config, "loaded scheme config");
    ColorScheme::try_from(config).with_context(|| format!("invalid scheme in {}", path.display()))
}

/// All of stdin, minus one trailing line break.
fn read_stdin() -> anyhow::Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;
    Ok(strip_line_break(text))
}

fn strip_line_break(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

// ─── Tests ───────────────────────────────────────────────────────────────────
