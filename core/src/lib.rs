#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cache::*;
pub use error::*;
pub use grid::*;
pub use level::*;
pub use placed::*;
pub use planner::*;
pub use reveal::*;
pub use trim::*;
pub use types::*;
pub use word::*;

mod cache;
mod error;
mod grid;
mod level;
mod placed;
mod planner;
mod reveal;
mod trim;
mod types;
mod word;

pub const DEFAULT_MIN_WORD_LEN: usize = 3;
pub const DEFAULT_MAX_WORD_LEN: usize = 12;

/// Tunables shared by validation and layout generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub min_word_len: usize,
    pub max_word_len: usize,
    /// Blank rows left between the current layout and a word that could not be crossed in.
    pub fallback_gap: Coord,
}

impl LayoutConfig {
    pub const fn new_unchecked(
        min_word_len: usize,
        max_word_len: usize,
        fallback_gap: Coord,
    ) -> Self {
        Self {
            min_word_len,
            max_word_len,
            fallback_gap,
        }
    }

    pub fn new(min_word_len: usize, max_word_len: usize, fallback_gap: Coord) -> Self {
        let min_word_len = min_word_len.max(1);
        let max_word_len = max_word_len.max(min_word_len);
        // a zero gap would let the fallback word touch the layout above it
        let fallback_gap = fallback_gap.clamp(1, Coord::MAX / 2);
        Self::new_unchecked(min_word_len, max_word_len, fallback_gap)
    }

    pub const fn accepts_len(&self, len: usize) -> bool {
        len >= self.min_word_len && len <= self.max_word_len
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_MIN_WORD_LEN, DEFAULT_MAX_WORD_LEN, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_new_clamps_inverted_bounds() {
        let config = LayoutConfig::new(5, 2, 0);

        assert_eq!(config.min_word_len, 5);
        assert_eq!(config.max_word_len, 5);
        assert_eq!(config.fallback_gap, 1);
    }

    #[test]
    fn default_config_accepts_three_to_twelve() {
        let config = LayoutConfig::default();

        assert!(!config.accepts_len(2));
        assert!(config.accepts_len(3));
        assert!(config.accepts_len(12));
        assert!(!config.accepts_len(13));
    }
}
