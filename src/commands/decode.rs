// SPDX-License-Identifier: MIT
//
// `tint decode` — marker string back to runs.

use std::io::{self, Write};

use anyhow::Context;
use tint_color::Color;
use tint_markup::{Run, Segmentation, decode_markers, expand_runs, write_preview};
use tracing::debug;

pub fn run(markup: &str, preview: bool, background: Color) -> anyhow::Result<()> {
    let runs = decode_markers(markup).context("not a valid marker string")?;
    debug!(runs = runs.len(), "decoded");

    let mut out = io::stdout().lock();
    if preview {
        let (chars, colors) = expand_runs(&runs, Segmentation::CodePoints);
        write_preview(&mut out, &chars, &colors, background)?;
        writeln!(out)?;
    } else {
        write_runs(&mut out, &runs)?;
    }
    out.flush()?;
    Ok(())
}

/// One line per run: the color, a tab, then the run text (debug-escaped so
/// line breaks inside a run stay on one line).
fn write_runs(w: &mut impl Write, runs: &[Run]) -> io::Result<()> {
    for run in runs {
        writeln!(w, "{}\t{:?}", run.color, run.text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lists_runs() {
        let runs = decode_markers("<#FF0000>Hi<#00FF0080>!\n").unwrap();
        let mut buf = Vec::new();
        write_runs(&mut buf, &runs).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "#FF0000\t\"Hi\"\n#00FF0080\t\"!\\n\"\n"
        );
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(run("no markers", false, Color::BLACK).is_err());
    }
}
