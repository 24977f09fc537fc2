use alloc::vec::Vec;

use crate::*;
pub use greedy::*;

mod greedy;

pub trait LayoutPlanner {
    /// Assigns coordinates and a direction to every word. The result has one entry per input word,
    /// in input order.
    fn place_words(&self, words: &[Word]) -> Vec<PlacedWord>;
}

/// Places `words` with the default greedy planner.
pub fn place_words(words: &[Word]) -> Vec<PlacedWord> {
    GreedyPlanner::default().place_words(words)
}
