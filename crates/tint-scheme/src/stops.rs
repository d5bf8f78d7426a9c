//! Gradient stop list — a validated, editable sequence of 1 to 6 colors.
//!
//! The engine accepts any count in `1..=MAX_STOPS`. Editing follows the
//! stricter rules of an interactive stop editor: stops are added as a
//! midpoint before the last stop, and a list never shrinks below
//! [`MIN_EDIT_STOPS`].

use tint_color::Color;

use crate::error::{Result, SchemeError};

/// Most stops a gradient may have.
pub const MAX_STOPS: usize = 6;

/// Fewest stops an edited gradient may be reduced to.
pub const MIN_EDIT_STOPS: usize = 2;

/// Ordered gradient stops.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GradientStops(Vec<Color>);

impl GradientStops {
    /// Validate and wrap a stop list.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::InvalidSchemeParameters`] for an empty list or
    /// more than [`MAX_STOPS`] stops.
    pub fn new(stops: Vec<Color>) -> Result<Self> {
        if stops.is_empty() {
            return Err(SchemeError::InvalidSchemeParameters(
                "a gradient needs at least one stop".into(),
            ));
        }
        if stops.len() > MAX_STOPS {
            return Err(SchemeError::InvalidSchemeParameters(format!(
                "a gradient takes at most {MAX_STOPS} stops, got {}",
                stops.len()
            )));
        }
        Ok(Self(stops))
    }

    /// Parse hex strings and validate the resulting list.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::InvalidColorFormat`] for the first malformed
    /// color, or the count errors of [`GradientStops::new`].
    pub fn parse<S: AsRef<str>>(stops: &[S]) -> Result<Self> {
        let colors = stops
            .iter()
            .map(|s| Color::hex(s.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// The stops in order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }

    /// Number of stops (always at least 1).
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Never empty by construction.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The first stop, the gradient's start color.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Color {
        self.0[0]
    }

    /// The last stop, the gradient's end color.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Color {
        self.0[self.0.len() - 1]
    }

    /// Replace the stop at `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::InvalidSchemeParameters`] if `idx` is out of range.
    pub fn set(&mut self, idx: usize, color: Color) -> Result<()> {
        let len = self.0.len();
        let slot = self.0.get_mut(idx).ok_or_else(|| out_of_range(idx, len))?;
        *slot = color;
        Ok(())
    }

    /// Insert the average of the last two stops just before the last stop.
    ///
    /// Returns the inserted color. A single-stop list gains a copy of its
    /// only stop.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::InvalidSchemeParameters`] if the list is full.
    pub fn insert_midpoint(&mut self) -> Result<Color> {
        if self.0.len() >= MAX_STOPS {
            return Err(SchemeError::InvalidSchemeParameters(format!(
                "cannot add a stop: already at the maximum of {MAX_STOPS}"
            )));
        }
        let last = self.0.len() - 1;
        let before = self.0[last.saturating_sub(1)];
        let mid = before.average(self.0[last]);
        self.0.insert(last, mid);
        Ok(mid)
    }

    /// Remove and return the stop at `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::InvalidSchemeParameters`] if `idx` is out of
    /// range or the list is already down to [`MIN_EDIT_STOPS`].
    pub fn remove(&mut self, idx: usize) -> Result<Color> {
        if idx >= self.0.len() {
            return Err(out_of_range(idx, self.0.len()));
        }
        if self.0.len() <= MIN_EDIT_STOPS {
            return Err(SchemeError::InvalidSchemeParameters(format!(
                "cannot remove a stop: a gradient keeps at least {MIN_EDIT_STOPS}"
            )));
        }
        Ok(self.0.remove(idx))
    }
}

impl Default for GradientStops {
    /// Bright red fading to near-black red.
    fn default() -> Self {
        Self(vec![Color::rgb(0xFF, 0x00, 0x00), Color::rgb(0x11, 0x00, 0x00)])
    }
}

impl AsRef<[Color]> for GradientStops {
    fn as_ref(&self) -> &[Color] {
        &self.0
    }
}

impl TryFrom<Vec<Color>> for GradientStops {
    type Error = SchemeError;

    fn try_from(stops: Vec<Color>) -> Result<Self> {
        Self::new(stops)
    }
}

fn out_of_range(idx: usize, len: usize) -> SchemeError {
    SchemeError::InvalidSchemeParameters(format!(
        "stop index {idx} out of range for {len} stops"
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
