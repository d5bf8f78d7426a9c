// SPDX-License-Identifier: MIT
//
// tint-markup — the `<#RRGGBB>text` marker format.
//
// Text goes in, gets split into clusters, colored by a scheme, and comes out
// as a marker string: one `<#COLOR>` per run of identically colored
// clusters, followed by the run's text. The encoder never repeats a marker
// for a color that is already active, the same way a terminal cell writer
// skips redundant SGR codes.
//
//   text ─segment─▶ clusters ─scheme─▶ colors ─encode─▶ marker string
//                                         └──preview──▶ ANSI truecolor
//
// The decoder is the exact inverse for strings without embedded marker
// syntax, which is what the round-trip property tests check.

pub mod decode;
pub mod encode;
pub mod error;
pub mod limit;
pub mod pipeline;
pub mod preview;
pub mod segment;

pub use decode::{Run, decode_markers, expand_runs};
pub use encode::{MarkerWriter, encode_markers};
pub use error::{MarkupError, Result};
pub use limit::{MAX_OUTPUT_LEN, OutputLimit, encoded_len};
pub use pipeline::{Colorizer, EditOutcome, Rendered};
pub use preview::write_preview;
pub use segment::{Segmentation, segment};
