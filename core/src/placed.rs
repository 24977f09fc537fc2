use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// A word pinned to the grid, `(x, y)` is the coordinate of its first letter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: Word,
    pub x: Coord,
    pub y: Coord,
    pub direction: Direction,
}

impl PlacedWord {
    pub fn new(word: Word, (x, y): Coord2, direction: Direction) -> Self {
        Self {
            word,
            x,
            y,
            direction,
        }
    }

    pub const fn start(&self) -> Coord2 {
        (self.x, self.y)
    }

    /// Coordinates of letter `index`, `None` once the word runs past `Coord::MAX`.
    pub fn coords_of(&self, index: usize) -> Option<Coord2> {
        let offset = Coord::try_from(index).ok()?;
        match self.direction {
            Direction::Horizontal => Some((self.x.checked_add(offset)?, self.y)),
            Direction::Vertical => Some((self.x, self.y.checked_add(offset)?)),
        }
    }

    /// Coordinates of the last letter.
    pub fn end(&self) -> Option<Coord2> {
        self.coords_of(self.word.letter_count().checked_sub(1)?)
    }

    /// Every `(coords, letter)` the word covers. Stops early if the word would overflow the
    /// coordinate space, check [`Self::end`] first when that matters.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, char)> + '_ {
        self.word
            .chars()
            .enumerate()
            .map_while(|(index, letter)| Some((self.coords_of(index)?, letter)))
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        let Some((end_x, end_y)) = self.end() else {
            return false;
        };
        x >= self.x && x <= end_x && y >= self.y && y <= end_y
    }

    pub(crate) fn shifted(&self, (dx, dy): Coord2) -> Self {
        Self {
            x: self.x - dx,
            y: self.y - dy,
            ..self.clone()
        }
    }
}

impl BoundingBox {
    /// Smallest box holding every word that fits the coordinate space.
    pub fn enclosing(words: &[PlacedWord]) -> Self {
        let corners = words
            .iter()
            .filter_map(|word| Some((word.start(), word.end()?)))
            .reduce(|(min, max), (start, end)| {
                (
                    (min.0.min(start.0), min.1.min(start.1)),
                    (max.0.max(end.0), max.1.max(end.1)),
                )
            });

        match corners {
            Some((min, max)) => Self::new(
                min,
                (
                    (max.0 - min.0).saturating_add(1),
                    (max.1 - min.1).saturating_add(1),
                ),
            ),
            None => Self::default(),
        }
    }
}

/// Raw entry of a persisted, pre-authored layout. The text is matched against the level words
/// before use.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub word: String,
    pub x: Coord,
    pub y: Coord,
    pub direction: Direction,
}

impl LayoutEntry {
    pub fn new(word: impl Into<String>, (x, y): Coord2, direction: Direction) -> Self {
        Self {
            word: word.into(),
            x,
            y,
            direction,
        }
    }
}

impl From<&PlacedWord> for LayoutEntry {
    fn from(placed: &PlacedWord) -> Self {
        Self::new(placed.word.as_str(), placed.start(), placed.direction)
    }
}
