//! Gradient interpolation — linear and multi-stop.
//!
//! Both gradients spread positions evenly over `[0, 1]`: index `i` of `n`
//! sits at `t = i / (n - 1)`, so the first character gets the first stop and
//! the last character gets the last stop exactly. A single character sits at
//! `t = 0`.

use tint_color::Color;

/// Normalized position of index `i` in a sequence of `n >= 2`.
#[inline]
fn position(i: usize, n: usize) -> f64 {
    i as f64 / (n - 1) as f64
}

/// Two-stop gradient from `start` to `end` over `n` positions.
///
/// `n == 1` yields exactly `[start]` regardless of `end`.
#[must_use]
pub fn linear(start: Color, end: Color, n: usize) -> Vec<Color> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => (0..n).map(|i| start.mix(end, position(i, n))).collect(),
    }
}

/// Multi-stop gradient over `n` positions.
///
/// The stops split `[0, 1]` into `stops.len() - 1` equal segments. Each
/// position is interpolated inside the segment it falls in; `t == 1.0`
/// is clamped into the last segment, and the final position is always the
/// final stop exactly.
///
/// - no stops: empty result
/// - one stop: every position is that stop
/// - `n == 1`: `[stops[0]]`
#[must_use]
pub fn multi(stops: &[Color], n: usize) -> Vec<Color> {
    match (stops, n) {
        (_, 0) | ([], _) => Vec::new(),
        ([only], _) => vec![*only; n],
        ([first, ..], 1) => vec![*first],
        _ => {
            let segments = stops.len() - 1;
            let seg_f = segments as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        return stops[segments];
                    }
                    let t = position(i, n);
                    let seg = segment_index(t, segments);
                    let local_t = (t - seg as f64 / seg_f) * seg_f;
                    stops[seg].mix(stops[seg + 1], local_t)
                })
                .collect()
        }
    }
}

/// `floor(t * segments)`, clamped to `[0, segments - 1]`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn segment_index(t: f64, segments: usize) -> usize {
    // Safe: t is in [0, 1], so the floor is in [0, segments].
    let seg = (t * segments as f64).floor() as usize;
    seg.min(segments - 1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
