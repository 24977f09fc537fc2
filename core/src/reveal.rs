use alloc::collections::BTreeSet;
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Words the player has found so far. Only grows during a session, every entry is stored
/// normalized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoundWords(BTreeSet<String>);

impl FoundWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a found word, returns `false` if it was already known.
    pub fn insert(&mut self, text: &str) -> bool {
        self.0.insert(normalize_word(text))
    }

    pub fn contains(&self, text: &str) -> bool {
        self.0.contains(text) || self.0.contains(normalize_word(text).as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_subset(&self, other: &FoundWords) -> bool {
        self.0.is_subset(&other.0)
    }
}

impl<S: AsRef<str>> FromIterator<S> for FoundWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut found = Self::new();
        found.extend(iter);
        found
    }
}

impl<S: AsRef<str>> Extend<S> for FoundWords {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for text in iter {
            self.insert(text.as_ref());
        }
    }
}

/// Derives reveal state from scratch: a cell is revealed when at least one placed word covering it
/// has been found. A crossing cell is therefore shown as soon as either of its words is found. The
/// input grid is left untouched.
pub fn update_grid_with_found_words(grid: &Grid, found: &FoundWords) -> Grid {
    let mut cells = grid.cells.clone();
    for cell in cells.iter_mut() {
        cell.is_revealed = false;
    }

    for word in grid.words.iter().filter(|word| found.contains(&word.word)) {
        for (coords, _) in word.cells() {
            if let Some(cell) = cells.get_mut(coords.to_nd_index()) {
                cell.is_revealed = true;
            }
        }
    }

    Grid {
        cells,
        words: grid.words.clone(),
    }
}

impl Grid {
    /// Method form of [`update_grid_with_found_words`].
    pub fn with_found_words(&self, found: &FoundWords) -> Self {
        update_grid_with_found_words(self, found)
    }

    /// Placed words whose letters are all revealed.
    pub fn revealed_words(&self) -> impl Iterator<Item = &PlacedWord> {
        self.words.iter().filter(|word| {
            word.cells()
                .all(|(coords, _)| self.cell_at(coords).is_some_and(|cell| cell.is_revealed))
        })
    }
}
