// SPDX-License-Identifier: MIT
//
// tint — per-character text colorizer.
//
// This is the command-line front end over the library crates:
//
//   tint-color  → the Color value, hex parsing, ANSI escapes
//   tint-scheme → gradients, palettes, fades, vowel split
//   tint-markup → segmentation, `<#RRGGBB>` markers, length limit, preview
//
// Each invocation is one pass: read text, pick a scheme from the flags (or a
// JSON config), render, print. Logs go to stderr so the markup on stdout can
// be piped straight into a clipboard tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tint_color::Color;
use tint_markup::MAX_OUTPUT_LEN;
use tint_scheme::SchemeKind;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

/// tint - color text one character at a time
///
/// Renders text as `<#RRGGBB>` marker strings for fields that accept inline
/// color markup, and previews the result in a truecolor terminal.
#[derive(Debug, Parser)]
#[command(name = "tint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output (logs and previews)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Colorize text and print the marker string
    Render {
        /// Text to colorize; read from stdin when omitted
        text: Option<String>,

        #[command(flatten)]
        scheme: SchemeArgs,

        /// Color grapheme clusters instead of code points
        #[arg(long)]
        graphemes: bool,

        /// Also print an ANSI truecolor preview to stdout
        #[arg(long)]
        preview: bool,

        /// Background that translucent colors are previewed over
        #[arg(long, default_value = "#000000")]
        background: Color,

        /// Maximum encoded length in UTF-16 code units
        #[arg(long, default_value_t = MAX_OUTPUT_LEN)]
        max_len: usize,

        /// Fail instead of warning when the output is over the limit
        #[arg(long)]
        strict: bool,
    },

    /// Parse a marker string and list its runs
    Decode {
        /// Marker string, e.g. `<#FF0000>Hi<#00FF00>!`
        markup: String,

        /// Print the decoded text in color instead of a run listing
        #[arg(long)]
        preview: bool,

        /// Background that translucent colors are previewed over
        #[arg(long, default_value = "#000000")]
        background: Color,
    },

    /// List the builtin palettes and their colors
    Palettes,
}

/// Scheme selection flags shared by commands that colorize.
#[derive(Debug, Clone, Args)]
struct SchemeArgs {
    /// Scheme: gradient, multi-gradient, rainbow, golden, fade-in, fade-out,
    /// consonant-vowel
    #[arg(short, long, default_value = "multi-gradient")]
    scheme: SchemeKind,

    /// Gradient stop (repeat for multi-gradient, up to 6)
    #[arg(long = "stop", value_name = "HEX")]
    stops: Vec<Color>,

    /// Base color for fade-in / fade-out
    #[arg(long, value_name = "HEX")]
    fade_color: Option<Color>,

    /// Consonant color for consonant-vowel
    #[arg(long, value_name = "HEX")]
    consonant: Option<Color>,

    /// Vowel color for consonant-vowel
    #[arg(long, value_name = "HEX")]
    vowel: Option<Color>,

    /// JSON scheme config; overrides the other scheme flags
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render {
            text,
            scheme,
            graphemes,
            preview,
            background,
            max_len,
            strict,
        } => commands::render::run(&commands::render::RenderOptions {
            text,
            scheme,
            graphemes,
            preview: preview && !cli.no_color,
            background,
            max_len,
            strict,
        })?,

        Commands::Decode {
            markup,
            preview,
            background,
        } => commands::decode::run(&markup, preview && !cli.no_color, background)?,

        Commands::Palettes => commands::palettes::run(!cli.no_color)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_flags() {
        let cli = Cli::try_parse_from([
            "tint", "-v", "render", "hello", "--scheme", "fade-in", "--fade-color", "#00AAFF",
            "--max-len", "100", "--strict",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Render {
            text,
            scheme,
            max_len,
            strict,
            ..
        } = cli.command
        else {
            panic!("expected render");
        };
        assert_eq!(text.as_deref(), Some("hello"));
        assert_eq!(scheme.scheme, SchemeKind::FadeIn);
        assert_eq!(scheme.fade_color, Some(Color::rgb(0x00, 0xAA, 0xFF)));
        assert_eq!(max_len, 100);
        assert!(strict);
    }

    #[test]
    fn repeated_stops_collect() {
        let cli = Cli::try_parse_from([
            "tint", "render", "x", "--stop", "#FF0000", "--stop", "#00FF00", "--stop", "0000FF",
        ])
        .unwrap();
        let Commands::Render { scheme, .. } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(scheme.stops.len(), 3);
        assert_eq!(scheme.stops[2], Color::rgb(0, 0, 255));
    }

    #[test]
    fn rejects_bad_color_and_unknown_scheme() {
        assert!(Cli::try_parse_from(["tint", "render", "x", "--stop", "#GGGGGG"]).is_err());
        assert!(Cli::try_parse_from(["tint", "render", "x", "--scheme", "plaid"]).is_err());
    }

    #[test]
    fn render_defaults() {
        let cli = Cli::try_parse_from(["tint", "render"]).unwrap();
        let Commands::Render {
            text,
            scheme,
            background,
            max_len,
            ..
        } = cli.command
        else {
            panic!("expected render");
        };
        assert!(text.is_none());
        assert_eq!(scheme.scheme, SchemeKind::MultiGradient);
        assert_eq!(background, Color::BLACK);
        assert_eq!(max_len, 280);
    }
}
