// SPDX-License-Identifier: MIT
//
// One module per subcommand. Each exposes a `run` that does the work and
// writes to stdout.

pub mod decode;
pub mod palettes;
pub mod render;
