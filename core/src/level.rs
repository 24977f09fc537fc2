use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// A validated level. Construction rejects malformed input, so a `Level` always has at least one
/// solution and only well-formed words. `Level` is not deserializable, stored levels are read as
/// records and go through [`Level::new`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Level {
    letters: Alphabet,
    solutions: Vec<Word>,
    bonus_words: Vec<Word>,
    grid_layout: Option<Vec<LayoutEntry>>,
}

impl Level {
    pub fn new<S: AsRef<str>>(
        letters: &str,
        solutions: &[S],
        bonus_words: &[S],
        grid_layout: Option<Vec<LayoutEntry>>,
        config: &LayoutConfig,
    ) -> Result<Self> {
        if solutions.is_empty() {
            return Err(LevelError::EmptySolutions);
        }

        let letters = Alphabet::parse(letters)?;
        let parse_all = |texts: &[S]| -> Result<Vec<Word>> {
            texts
                .iter()
                .map(|text| Word::new(text.as_ref(), &letters, config))
                .collect()
        };

        Ok(Self {
            solutions: parse_all(solutions)?,
            bonus_words: parse_all(bonus_words)?,
            letters,
            grid_layout,
        })
    }

    pub fn letters(&self) -> &Alphabet {
        &self.letters
    }

    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    pub fn bonus_words(&self) -> &[Word] {
        &self.bonus_words
    }

    pub fn grid_layout(&self) -> Option<&[LayoutEntry]> {
        self.grid_layout.as_deref()
    }

    pub fn is_solution(&self, text: &str) -> bool {
        let text = normalize_word(text);
        self.solutions.iter().any(|word| word.as_str() == text)
    }

    pub fn is_bonus_word(&self, text: &str) -> bool {
        let text = normalize_word(text);
        self.bonus_words.iter().any(|word| word.as_str() == text)
    }

    /// Solutions followed by bonus words, each distinct word once in first-seen order.
    pub fn grid_words(&self) -> Vec<Word> {
        let mut seen = BTreeSet::new();
        self.solutions
            .iter()
            .chain(&self.bonus_words)
            .filter(|word| seen.insert(word.as_str()))
            .cloned()
            .collect()
    }

    /// Everything the grid depends on; two levels with equal keys produce identical grids.
    pub fn key(&self) -> LevelKey {
        LevelKey {
            solutions: self.solutions.clone(),
            bonus_words: self.bonus_words.clone(),
            grid_layout: self.grid_layout.clone(),
        }
    }

    /// Builds the level grid with the default greedy planner, see [`Level::build_grid_with`].
    pub fn build_grid(&self, config: &LayoutConfig) -> LayoutOutcome {
        self.build_grid_with(&GreedyPlanner::new(*config))
    }

    /// Uses the persisted layout when there is one, otherwise plans the level words with
    /// `planner`. The result is materialized and trimmed.
    pub fn build_grid_with(&self, planner: &impl LayoutPlanner) -> LayoutOutcome {
        if let Some(layout) = &self.grid_layout {
            return from_grid_layout(layout, &self.solutions, &self.bonus_words);
        }

        let placed = planner.place_words(&self.grid_words());
        let LayoutOutcome { grid, issues } = materialize(&placed, BoundingBox::enclosing(&placed));
        LayoutOutcome {
            grid: grid.trimmed(),
            issues,
        }
    }

    /// Progress counts follow the level's words rather than the grid, so words left out of the
    /// grid still count.
    pub fn progress(&self, found: &FoundWords) -> LevelProgress {
        let count_found = |words: &[Word]| {
            words
                .iter()
                .map(Word::as_str)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .filter(|text| found.contains(text))
                .count()
        };
        let count_distinct = |words: &[Word]| words.iter().collect::<BTreeSet<_>>().len();

        LevelProgress {
            found_solutions: count_found(&self.solutions),
            total_solutions: count_distinct(&self.solutions),
            found_bonus: count_found(&self.bonus_words),
            total_bonus: count_distinct(&self.bonus_words),
        }
    }
}

/// Memoization key for a level grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelKey {
    pub solutions: Vec<Word>,
    pub bonus_words: Vec<Word>,
    pub grid_layout: Option<Vec<LayoutEntry>>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub found_solutions: usize,
    pub total_solutions: usize,
    pub found_bonus: usize,
    pub total_bonus: usize,
}

impl LevelProgress {
    pub const fn is_complete(&self) -> bool {
        self.found_solutions == self.total_solutions
    }

    pub const fn remaining_solutions(&self) -> usize {
        self.total_solutions - self.found_solutions
    }
}
