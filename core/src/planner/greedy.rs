use alloc::vec;
use core::cmp::Reverse;
use hashbrown::HashMap;

use super::*;

/// Signed working coordinates, the layout may grow in any direction before it is normalized.
type Point = (i32, i32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Draft {
    x: i32,
    y: i32,
    direction: Direction,
}

impl Draft {
    const ORIGIN: Self = Self {
        x: 0,
        y: 0,
        direction: Direction::Horizontal,
    };

    fn cell(self, index: usize) -> Point {
        let (dx, dy) = self.direction.step();
        let index = index as i32;
        (self.x + dx * index, self.y + dy * index)
    }
}

#[derive(Copy, Clone, Debug)]
struct Slot {
    letter: u8,
    horizontal: bool,
    vertical: bool,
}

impl Slot {
    const fn runs(self, direction: Direction) -> bool {
        match direction {
            Direction::Horizontal => self.horizontal,
            Direction::Vertical => self.vertical,
        }
    }
}

/// Candidate ordering, smaller is better: most crossings, least extra area, then top-most and
/// left-most anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Rank {
    crossings: Reverse<usize>,
    growth: i64,
    y: i32,
    x: i32,
    direction: Direction,
}

#[derive(Debug, Default)]
struct Board {
    cells: HashMap<Point, Slot>,
    /// Inclusive `(min, max)` corners of everything placed so far.
    bounds: Option<(Point, Point)>,
}

impl Board {
    fn slot_at(&self, point: Point) -> Option<Slot> {
        self.cells.get(&point).copied()
    }

    fn is_occupied(&self, point: Point) -> bool {
        self.cells.contains_key(&point)
    }

    /// Number of crossings if `letters` can go at `draft`, `None` if the placement would clash with
    /// a letter, run along an existing word, or touch a word it does not cross.
    fn crossings(&self, letters: &[u8], draft: Draft) -> Option<usize> {
        let (dx, dy) = draft.direction.step();

        if self.is_occupied((draft.x - dx, draft.y - dy))
            || self.is_occupied(draft.cell(letters.len()))
        {
            return None;
        }

        let mut crossings = 0;
        for (index, &letter) in letters.iter().enumerate() {
            let (x, y) = draft.cell(index);
            match self.slot_at((x, y)) {
                Some(slot) if slot.letter != letter || slot.runs(draft.direction) => return None,
                Some(_) => crossings += 1,
                None => {
                    if self.is_occupied((x + dy, y + dx)) || self.is_occupied((x - dy, y - dx)) {
                        return None;
                    }
                }
            }
        }

        (crossings > 0).then_some(crossings)
    }

    fn growth(&self, len: usize, draft: Draft) -> i64 {
        let Some((min, max)) = self.bounds else {
            return 0;
        };
        let end = draft.cell(len - 1);
        let grown_min = (min.0.min(draft.x), min.1.min(draft.y));
        let grown_max = (max.0.max(end.0), max.1.max(end.1));
        area(grown_min, grown_max) - area(min, max)
    }

    fn insert(&mut self, letters: &[u8], draft: Draft) {
        for (index, &letter) in letters.iter().enumerate() {
            let point = draft.cell(index);
            let slot = self.cells.entry(point).or_insert(Slot {
                letter,
                horizontal: false,
                vertical: false,
            });
            match draft.direction {
                Direction::Horizontal => slot.horizontal = true,
                Direction::Vertical => slot.vertical = true,
            }
        }

        let start = draft.cell(0);
        let end = draft.cell(letters.len().saturating_sub(1));
        self.bounds = Some(match self.bounds {
            None => (start, end),
            Some((min, max)) => (
                (min.0.min(start.0), min.1.min(start.1)),
                (max.0.max(end.0), max.1.max(end.1)),
            ),
        });
    }

    /// Horizontal anchor below everything placed so far, `gap` blank rows away.
    fn detached_anchor(&self, gap: Coord) -> Draft {
        let (x, y) = match self.bounds {
            Some((min, max)) => (min.0, max.1 + 1 + i32::from(gap)),
            None => (0, 0),
        };
        Draft {
            x,
            y,
            direction: Direction::Horizontal,
        }
    }
}

fn area(min: Point, max: Point) -> i64 {
    i64::from(max.0 - min.0 + 1) * i64::from(max.1 - min.1 + 1)
}

fn to_coord(value: i32) -> Coord {
    // far past any playable size, the materializer reports such words as conflicts
    Coord::try_from(value).unwrap_or(Coord::MAX)
}

/// Greedy crossword planner: longest words first, each one crossing the already placed words where
/// it intersects the most of them. No backtracking, the result depends only on the input words and
/// their order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GreedyPlanner {
    config: LayoutConfig,
}

impl GreedyPlanner {
    pub const fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn best_crossing(
        &self,
        board: &Board,
        placed: &[(&[u8], Draft)],
        letters: &[u8],
    ) -> Option<Draft> {
        let mut best: Option<(Rank, Draft)> = None;

        for &(other, crossed) in placed {
            let direction = crossed.direction.orthogonal();
            let (dx, dy) = direction.step();

            for (crossed_index, &shared) in other.iter().enumerate() {
                let (sx, sy) = crossed.cell(crossed_index);
                for (index, _) in letters.iter().enumerate().filter(|&(_, &l)| l == shared) {
                    let draft = Draft {
                        x: sx - dx * index as i32,
                        y: sy - dy * index as i32,
                        direction,
                    };
                    let Some(crossings) = board.crossings(letters, draft) else {
                        continue;
                    };
                    let rank = Rank {
                        crossings: Reverse(crossings),
                        growth: board.growth(letters.len(), draft),
                        y: draft.y,
                        x: draft.x,
                        direction,
                    };
                    if best.is_none_or(|(best_rank, _)| rank < best_rank) {
                        best = Some((rank, draft));
                    }
                }
            }
        }

        best.map(|(_, draft)| draft)
    }
}

impl LayoutPlanner for GreedyPlanner {
    fn place_words(&self, words: &[Word]) -> Vec<PlacedWord> {
        let mut order: Vec<usize> = (0..words.len()).collect();
        order.sort_by_key(|&index| Reverse(words[index].letter_count()));

        let mut board = Board::default();
        let mut drafts = vec![Draft::ORIGIN; words.len()];
        let mut placed: Vec<(&[u8], Draft)> = Vec::with_capacity(words.len());

        for index in order {
            let letters = words[index].as_bytes();
            let draft = if placed.is_empty() {
                Draft::ORIGIN
            } else {
                self.best_crossing(&board, &placed, letters)
                    .unwrap_or_else(|| {
                        log::debug!("No crossing for {}, placing it detached", words[index]);
                        board.detached_anchor(self.config.fallback_gap)
                    })
            };
            board.insert(letters, draft);
            placed.push((letters, draft));
            drafts[index] = draft;
        }

        let (min_x, min_y) = board.bounds.map_or((0, 0), |(min, _)| min);
        words
            .iter()
            .zip(drafts)
            .map(|(word, draft)| {
                PlacedWord::new(
                    word.clone(),
                    (to_coord(draft.x - min_x), to_coord(draft.y - min_y)),
                    draft.direction,
                )
            })
            .collect()
    }
}
