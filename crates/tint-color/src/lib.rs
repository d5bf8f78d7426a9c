// SPDX-License-Identifier: MIT
//
// tint-color — color primitives for the tint colorizer.
//
// A 24-bit RGB color with an optional alpha channel, canonically written as
// upper-case `#RRGGBB` / `#RRGGBBAA`. Everything above this crate (scheme
// engine, markup encoder, terminal preview) speaks in these values, so the
// canonical string form doubles as the equality key for run grouping.

pub mod ansi;
pub mod color;

pub use color::{Color, ParseColorError};
