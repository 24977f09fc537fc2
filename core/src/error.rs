use alloc::string::String;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::*;

/// Malformed level input, detected before any placement is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("Level has no solution words")]
    EmptySolutions,
    #[error("Word {word:?} has {len} letters, expected {min}..={max}")]
    InvalidLength {
        word: String,
        len: usize,
        min: usize,
        max: usize,
    },
    #[error("Word {word:?} contains {ch:?}, only A-Z is allowed")]
    InvalidCharacter { word: String, ch: char },
    #[error("Word {word:?} uses {ch:?}, which is not among the level letters")]
    LetterNotInAlphabet { word: String, ch: char },
}

pub type Result<T> = core::result::Result<T, LevelError>;

/// Data-quality problems found while building a grid. These never abort the build, the affected
/// word is left out of the grid and the rest is produced.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridIssue {
    /// `found` is `None` when the letter would land outside the grid.
    #[error("{word} does not fit at {at:?}: needs {expected:?}, grid has {found:?}")]
    PlacementConflict {
        word: String,
        at: Coord2,
        expected: char,
        found: Option<char>,
    },
    #[error("layout word {word} is not a solution or bonus word")]
    UnexpectedLayoutWord { word: String },
    #[error("{word} has no entry in the layout")]
    MissingLayoutWord { word: String },
}

impl GridIssue {
    pub fn word(&self) -> &str {
        use GridIssue::*;
        match self {
            PlacementConflict { word, .. } => word,
            UnexpectedLayoutWord { word } => word,
            MissingLayoutWord { word } => word,
        }
    }

    /// Whether the issue removed a word that would otherwise have been drawn.
    pub const fn is_skip(&self) -> bool {
        matches!(
            self,
            Self::PlacementConflict { .. } | Self::UnexpectedLayoutWord { .. }
        )
    }
}
