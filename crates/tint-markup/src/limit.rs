// SPDX-License-Identifier: MIT
//
// Output length limit.
//
// The marker string is pasted into a field capped at 280 characters, where
// "character" means a UTF-16 code unit. Markers count toward the cap, which is
// why a many-colored scheme runs out of room long before a plain one. This
// module only measures; whether an over-long edit is refused is up to the
// caller.

/// Default cap on the encoded marker string, in UTF-16 code units.
pub const MAX_OUTPUT_LEN: usize = 280;

/// Length of a marker string in UTF-16 code units.
///
/// ASCII and most BMP text count one per character; astral characters such
/// as emoji count two.
#[must_use]
pub fn encoded_len(markup: &str) -> usize {
    markup.encode_utf16().count()
}

/// A maximum encoded length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputLimit {
    max: usize,
}

impl OutputLimit {
    /// A limit of `max` UTF-16 code units.
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max }
    }

    /// The configured maximum.
    #[must_use]
    pub const fn max(self) -> usize {
        self.max
    }

    /// Whether `markup` fits within the limit (inclusive).
    #[must_use]
    pub fn fits(self, markup: &str) -> bool {
        encoded_len(markup) <= self.max
    }

    /// Code units left before the limit, or zero if already over.
    #[must_use]
    pub fn remaining(self, markup: &str) -> usize {
        self.max.saturating_sub(encoded_len(markup))
    }
}

impl Default for OutputLimit {
    fn default() -> Self {
        Self::new(MAX_OUTPUT_LEN)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_counts_bytes() {
        assert_eq!(encoded_len("<#FF0000>abc"), 12);
    }

    #[test]
    fn astral_counts_two() {
        assert_eq!(encoded_len("\u{1F44B}"), 2);
        assert_eq!(encoded_len("é"), 1);
    }

    #[test]
    fn limit_is_inclusive() {
        let limit = OutputLimit::new(3);
        assert!(limit.fits("abc"));
        assert!(!limit.fits("abcd"));
        assert_eq!(limit.remaining("a"), 2);
        assert_eq!(limit.remaining("abcdef"), 0);
    }

    #[test]
    fn default_is_280() {
        assert_eq!(OutputLimit::default().max(), 280);
        assert!(OutputLimit::default().fits(&"x".repeat(280)));
        assert!(!OutputLimit::default().fits(&"x".repeat(281)));
    }
}
