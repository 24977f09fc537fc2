use alloc::collections::BTreeMap;
use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: Coord,
    pub y: Coord,
    pub letter: Option<char>,
    pub is_blocked: bool,
    pub is_revealed: bool,
}

impl Cell {
    pub const fn blocked((x, y): Coord2) -> Self {
        Self {
            x,
            y,
            letter: None,
            is_blocked: true,
            is_revealed: false,
        }
    }

    pub const fn with_letter((x, y): Coord2, letter: char) -> Self {
        Self {
            x,
            y,
            letter: Some(letter),
            is_blocked: false,
            is_revealed: false,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.x, self.y)
    }

    /// Letter the player currently sees, `None` for blocked or still hidden cells.
    pub const fn visible_letter(&self) -> Option<char> {
        if self.is_revealed { self.letter } else { None }
    }
}

/// Materialized puzzle grid. Cells are indexed `(x, y)`, `words` are the placed words that made
/// it into the grid, in grid coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub(crate) cells: Array2<Cell>,
    pub(crate) words: Vec<PlacedWord>,
}

impl Grid {
    pub fn empty() -> Self {
        Self {
            cells: blocked_cells((0, 0)),
            words: Vec::new(),
        }
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn size(&self) -> Coord2 {
        let (width, height) = self.cells.dim();
        // cells are only ever built from Coord2 sizes
        (width as Coord, height as Coord)
    }

    /// A grid with no letters, rendered as "no grid available".
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: Coord) -> impl Iterator<Item = &Cell> + '_ {
        (0..self.width()).filter_map(move |x| self.cell_at((x, y)))
    }

    /// Placed words covering `coords`, at most one per direction.
    pub fn words_at(&self, coords: Coord2) -> SmallVec<[&PlacedWord; 2]> {
        self.words
            .iter()
            .filter(|word| word.contains(coords))
            .collect()
    }

    pub fn letter_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| !cell.is_blocked).count() as CellCount
    }

    pub fn revealed_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_revealed).count() as CellCount
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_blocked || cell.is_revealed)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// Grid plus whatever had to be left out while building it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutOutcome {
    pub grid: Grid,
    pub issues: Vec<GridIssue>,
}

impl LayoutOutcome {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Words that were dropped from the grid. They still count towards level progress.
    pub fn skipped_words(&self) -> impl Iterator<Item = &str> {
        self.issues
            .iter()
            .filter(|issue| issue.is_skip())
            .map(GridIssue::word)
    }
}

fn blocked_cells(size: Coord2) -> Array2<Cell> {
    Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
        Cell::blocked((x as Coord, y as Coord))
    })
}

/// Checks that every letter of `word` lands inside `bbox` on a cell that is free or already holds
/// the same letter.
fn check_fits(
    cells: &Array2<Cell>,
    bbox: &BoundingBox,
    word: &PlacedWord,
) -> core::result::Result<(), GridIssue> {
    let conflict = |at: Coord2, expected: char, found: Option<char>| {
        GridIssue::PlacementConflict {
            word: word.word.as_str().into(),
            at,
            expected,
            found,
        }
    };

    if word.end().is_none() {
        let first = word.word.chars().next().unwrap_or(' ');
        return Err(conflict(word.start(), first, None));
    }

    for (coords, letter) in word.cells() {
        let local = bbox
            .to_local(coords)
            .ok_or_else(|| conflict(coords, letter, None))?;
        match cells[local.to_nd_index()].letter {
            Some(existing) if existing != letter => {
                return Err(conflict(coords, letter, Some(existing)));
            }
            _ => {}
        }
    }

    Ok(())
}

/// Writes `placed` into a grid covering `bbox`. Words that leave the box or contradict an earlier
/// word are skipped whole and reported, everything else is still written.
pub fn materialize(placed: &[PlacedWord], bbox: BoundingBox) -> LayoutOutcome {
    let mut cells = blocked_cells(bbox.size);
    let mut words = Vec::with_capacity(placed.len());
    let mut issues = Vec::new();

    for word in placed {
        if let Err(issue) = check_fits(&cells, &bbox, word) {
            log::warn!("Skipping word, {issue}");
            issues.push(issue);
            continue;
        }

        let local = word.shifted(bbox.origin);
        for (coords, letter) in local.cells() {
            cells[coords.to_nd_index()] = Cell::with_letter(coords, letter);
        }
        words.push(local);
    }

    LayoutOutcome {
        grid: Grid { cells, words },
        issues,
    }
}

/// Builds a grid from a pre-authored layout instead of planning one. Entries are matched
/// case-insensitively against `solutions` and `bonus_words`; unknown or repeated entries are left
/// out and level words without an entry are reported, neither stops the grid from being built.
pub fn from_grid_layout(
    layout: &[LayoutEntry],
    solutions: &[Word],
    bonus_words: &[Word],
) -> LayoutOutcome {
    let mut expected: BTreeMap<&str, &Word> = BTreeMap::new();
    for word in solutions.iter().chain(bonus_words) {
        expected.entry(word.as_str()).or_insert(word);
    }

    let mut matched = BTreeSet::new();
    let mut placed = Vec::with_capacity(layout.len());
    let mut issues = Vec::new();

    for entry in layout {
        let text = normalize_word(&entry.word);
        match expected.get(text.as_str()) {
            Some(&word) if matched.insert(word.as_str()) => {
                placed.push(PlacedWord::new(
                    word.clone(),
                    (entry.x, entry.y),
                    entry.direction,
                ));
            }
            _ => {
                log::warn!("Layout entry {text} matches no unplaced level word, ignoring it");
                issues.push(GridIssue::UnexpectedLayoutWord { word: text });
            }
        }
    }

    let mut reported = BTreeSet::new();
    for word in solutions.iter().chain(bonus_words) {
        if !matched.contains(word.as_str()) && reported.insert(word.as_str()) {
            log::warn!("Level word {word} is missing from the layout");
            issues.push(GridIssue::MissingLayoutWord {
                word: word.as_str().into(),
            });
        }
    }

    let LayoutOutcome {
        grid,
        issues: conflicts,
    } = materialize(&placed, BoundingBox::enclosing(&placed));
    issues.extend(conflicts);

    LayoutOutcome {
        grid: grid.trimmed(),
        issues,
    }
}
