//! Generated-input checks for the layout pipeline: planning, trimming and reveal must hold for
//! any list of well-formed words, not only the hand-picked ones in the unit tests.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use word_magic_core::{
    Alphabet, Cell, Coord2, Direction, FoundWords, Grid, LayoutConfig, Level, PlacedWord, Word,
    place_words, update_grid_with_found_words,
};

fn words(texts: &[String]) -> Vec<Word> {
    texts
        .iter()
        .map(|text| Word::new(text, &Alphabet::unrestricted(), &LayoutConfig::default()))
        .collect::<Result<_, _>>()
        .unwrap()
}

fn level(texts: &[String]) -> Level {
    Level::new("", texts, &[], None, &LayoutConfig::default()).unwrap()
}

/// Letter of every covered cell, `None` when two words disagree about a shared cell.
fn letters(placed: &[PlacedWord]) -> Option<HashMap<Coord2, char>> {
    let mut letters = HashMap::new();
    for word in placed {
        for (coords, letter) in word.cells() {
            if *letters.entry(coords).or_insert(letter) != letter {
                return None;
            }
        }
    }
    Some(letters)
}

fn step(coords: Coord2, direction: Direction, back: bool) -> Option<Coord2> {
    let (x, y) = coords;
    match (direction, back) {
        (Direction::Horizontal, true) => Some((x.checked_sub(1)?, y)),
        (Direction::Horizontal, false) => Some((x.checked_add(1)?, y)),
        (Direction::Vertical, true) => Some((x, y.checked_sub(1)?)),
        (Direction::Vertical, false) => Some((x, y.checked_add(1)?)),
    }
}

/// Maximal runs of two or more letters in `direction`, as `(start, length)`.
fn runs(letters: &HashMap<Coord2, char>, direction: Direction) -> Vec<(Coord2, usize)> {
    let occupied = |coords: Option<Coord2>| coords.is_some_and(|c| letters.contains_key(&c));
    letters
        .keys()
        .filter(|&&start| !occupied(step(start, direction, true)))
        .filter_map(|&start| {
            let mut len = 1;
            let mut at = start;
            while let Some(next) = step(at, direction, false).filter(|c| letters.contains_key(c)) {
                len += 1;
                at = next;
            }
            (len >= 2).then_some((start, len))
        })
        .collect()
}

/// Every run of letters in the layout reads as exactly one placed word.
fn runs_are_words(placed: &[PlacedWord], letters: &HashMap<Coord2, char>) -> bool {
    [Direction::Horizontal, Direction::Vertical]
        .into_iter()
        .all(|direction| {
            runs(letters, direction).into_iter().all(|(start, len)| {
                placed.iter().any(|word| {
                    word.direction == direction
                        && word.start() == start
                        && word.word.letter_count() == len
                })
            })
        })
}

fn borders_have_letters(grid: &Grid) -> bool {
    let (width, height) = grid.size();
    let letter = |coords: Coord2| !grid[coords].is_blocked;
    width > 0
        && height > 0
        && (0..width).any(|x| letter((x, 0)))
        && (0..width).any(|x| letter((x, height - 1)))
        && (0..height).any(|y| letter((0, y)))
        && (0..height).any(|y| letter((width - 1, y)))
}

fn revealed(grid: &Grid) -> HashSet<Coord2> {
    grid.cells()
        .iter()
        .filter(|cell| cell.is_revealed)
        .map(Cell::coords)
        .collect()
}

fn picked<'a>(texts: &'a [String], mask: &'a [bool]) -> impl Iterator<Item = &'a String> {
    texts.iter().zip(mask).filter(|&(_, &pick)| pick).map(|(text, _)| text)
}

fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z]{3,12}", 1..=12)
}

proptest! {
    #[test]
    fn planner_places_every_word_without_conflicts(texts in word_list()) {
        let placed = place_words(&words(&texts));

        prop_assert_eq!(placed.len(), texts.len());
        for (word, text) in placed.iter().zip(&texts) {
            prop_assert_eq!(word.word.as_str(), text.as_str());
        }
        let letters = letters(&placed);
        prop_assert!(letters.is_some(), "shared cell with two letters: {:?}", placed);
        let letters = letters.unwrap_or_default();
        prop_assert!(runs_are_words(&placed, &letters), "stray run of letters: {:?}", placed);
    }

    #[test]
    fn built_grid_is_clean_and_trimmed(texts in word_list()) {
        let level = level(&texts);

        let outcome = level.build_grid(&LayoutConfig::default());

        prop_assert!(outcome.is_clean(), "issues: {:?}", outcome.issues);
        prop_assert_eq!(outcome.grid.words().len(), level.grid_words().len());
        prop_assert!(borders_have_letters(&outcome.grid), "untrimmed grid: {:?}", outcome.grid);
    }

    #[test]
    fn reveal_is_monotonic_and_idempotent(
        texts in word_list(),
        first in prop::collection::vec(any::<bool>(), 12),
        second in prop::collection::vec(any::<bool>(), 12),
    ) {
        let grid = level(&texts).build_grid(&LayoutConfig::default()).grid;
        let found: FoundWords = picked(&texts, &first).collect();
        let mut more = found.clone();
        more.extend(picked(&texts, &second));

        let shown = update_grid_with_found_words(&grid, &found);
        let shown_more = update_grid_with_found_words(&grid, &more);

        prop_assert!(revealed(&shown).is_subset(&revealed(&shown_more)));
        prop_assert_eq!(&update_grid_with_found_words(&shown, &found), &shown);
        for cell in shown.cells() {
            let covered = grid
                .words_at(cell.coords())
                .iter()
                .any(|word| found.contains(&word.word));
            prop_assert_eq!(cell.is_revealed, covered, "cell {:?}", cell.coords());
        }
    }
}

#[test]
fn detached_word_lands_below_and_grid_stays_trimmed() {
    let texts = ["PLANET".to_owned(), "DOG".to_owned()];

    let outcome = level(&texts).build_grid(&LayoutConfig::default());
    let grid = outcome.grid.with_found_words(&FoundWords::from_iter(["dog"]));

    assert!(outcome.is_clean());
    assert_eq!(grid.size(), (6, 3));
    assert!(borders_have_letters(&grid));
    assert_eq!(grid.words()[1].start(), (0, 2));
    assert!((0..6).all(|x| grid[(x, 1)].is_blocked));
    assert_eq!(revealed(&grid), HashSet::from([(0, 2), (1, 2), (2, 2)]));
}
