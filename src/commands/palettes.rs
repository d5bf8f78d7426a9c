// SPDX-License-Identifier: MIT
//
// `tint palettes` — the builtin cyclic palettes.

use std::io::{self, Write};

use tint_color::{Color, ansi};
use tint_scheme::palette::{palette, palette_names};

pub fn run(color: bool) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    write_palettes(&mut out, color)?;
    out.flush()?;
    Ok(())
}

/// `name  #RRGGBB #RRGGBB ...`, with a swatch before each hex when `color`.
fn write_palettes(w: &mut impl Write, color: bool) -> io::Result<()> {
    for &name in palette_names() {
        let Some(colors) = palette(name) else {
            continue;
        };
        write!(w, "{name:<8}")?;
        for &c in colors {
            write!(w, " ")?;
            if color {
                swatch(w, c)?;
            }
            write!(w, "{c}")?;
        }
        writeln!(w)?;
    }
    Ok(())
}

fn swatch(w: &mut impl Write, c: Color) -> io::Result<()> {
    ansi::fg(w, c)?;
    write!(w, "\u{2588}\u{2588}")?;
    ansi::reset(w)?;
    write!(w, " ")
}
