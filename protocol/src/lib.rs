//! JSON records exchanged with level storage and the grid renderer.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use word_magic_core::{
    Cell, Coord, Direction, Grid, GridIssue, LayoutConfig, LayoutEntry, LayoutOutcome, Level,
    LevelError, PlacedWord,
};

#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Input that is not shaped like a level at all, e.g. `solutions` not being an array.
    #[error("Malformed level record: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Level(#[from] LevelError),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWordRecord {
    pub word: String,
    pub x: Coord,
    pub y: Coord,
    pub direction: Direction,
}

impl From<PlacedWordRecord> for LayoutEntry {
    fn from(record: PlacedWordRecord) -> Self {
        LayoutEntry::new(record.word, (record.x, record.y), record.direction)
    }
}

impl From<&PlacedWord> for PlacedWordRecord {
    fn from(placed: &PlacedWord) -> Self {
        Self {
            word: placed.word.to_string(),
            x: placed.x,
            y: placed.y,
            direction: placed.direction,
        }
    }
}

/// Level as stored by the level-storage service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub letters: String,
    pub solutions: Vec<String>,
    #[serde(default)]
    pub bonus_words: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_layout: Option<Vec<PlacedWordRecord>>,
}

impl LevelRecord {
    pub fn into_level(self, config: &LayoutConfig) -> Result<Level> {
        let grid_layout = self
            .grid_layout
            .map(|entries| entries.into_iter().map(LayoutEntry::from).collect());
        Ok(Level::new(
            &self.letters,
            self.solutions.as_slice(),
            self.bonus_words.as_slice(),
            grid_layout,
            config,
        )?)
    }
}

pub fn parse_level(json: &str) -> Result<LevelRecord> {
    Ok(serde_json::from_str(json)?)
}

/// Parses and validates in one step.
pub fn load_level(json: &str, config: &LayoutConfig) -> Result<Level> {
    let level = parse_level(json)?.into_level(config)?;
    log::debug!(
        "Loaded level with {} solutions and {} bonus words",
        level.solutions().len(),
        level.bonus_words().len()
    );
    Ok(level)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub x: Coord,
    pub y: Coord,
    pub letter: Option<char>,
    pub is_blocked: bool,
    pub is_revealed: bool,
}

impl From<&Cell> for CellView {
    fn from(cell: &Cell) -> Self {
        Self {
            x: cell.x,
            y: cell.y,
            letter: cell.letter,
            is_blocked: cell.is_blocked,
            is_revealed: cell.is_revealed,
        }
    }
}

/// Grid as handed to the renderer: rows top to bottom, plus the placed words for the progress
/// panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridView {
    pub width: Coord,
    pub height: Coord,
    pub cells: Vec<Vec<CellView>>,
    pub words: Vec<PlacedWordRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_words: Vec<String>,
}

impl GridView {
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            cells: (0..grid.height())
                .map(|y| grid.row(y).map(CellView::from).collect())
                .collect(),
            words: grid.words().iter().map(PlacedWordRecord::from).collect(),
            skipped_words: Vec::new(),
        }
    }

    pub fn from_outcome(outcome: &LayoutOutcome) -> Self {
        Self {
            skipped_words: outcome.skipped_words().map(str::to_owned).collect(),
            ..Self::from_grid(&outcome.grid)
        }
    }

    /// No letters to show, the client renders its "no grid available" state.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Human readable summary of what went wrong while building a grid, for logs and authoring
/// tools.
pub fn describe_issues(issues: &[GridIssue]) -> Vec<String> {
    issues.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use word_magic_core::FoundWords;

    const CAT_TAR: &str = r#"{
        "letters": "CATR",
        "solutions": ["cat", "tar"],
        "bonus_words": ["art"]
    }"#;

    #[test]
    fn parse_level_defaults_optional_fields() {
        let record = parse_level(r#"{ "letters": "CAT", "solutions": ["CAT"] }"#).unwrap();

        assert!(record.bonus_words.is_empty());
        assert_eq!(record.grid_layout, None);
    }

    #[test]
    fn parse_level_rejects_non_array_solutions() {
        let result = parse_level(r#"{ "letters": "CAT", "solutions": "CAT" }"#);

        assert!(matches!(result, Err(ProtocolError::Json(_))));
    }

    #[test]
    fn load_level_reports_malformed_words() {
        let result = load_level(
            r#"{ "letters": "CAT", "solutions": ["c4t"] }"#,
            &LayoutConfig::default(),
        );

        assert!(matches!(
            result,
            Err(ProtocolError::Level(LevelError::InvalidCharacter { ch: '4', .. }))
        ));
    }

    #[test]
    fn layout_record_uses_lowercase_directions() {
        let record = parse_level(
            r#"{
                "letters": "CATR",
                "solutions": ["CAT", "TAR"],
                "grid_layout": [
                    { "word": "CAT", "x": 0, "y": 1, "direction": "horizontal" },
                    { "word": "TAR", "x": 1, "y": 0, "direction": "vertical" }
                ]
            }"#,
        )
        .unwrap();
        let level = record.into_level(&LayoutConfig::default()).unwrap();

        let outcome = level.build_grid(&LayoutConfig::default());

        assert!(outcome.is_clean());
        assert_eq!(outcome.grid.size(), (3, 3));
    }

    #[test]
    fn grid_view_serializes_rows_in_camel_case() {
        let config = LayoutConfig::default();
        let level = load_level(CAT_TAR, &config).unwrap();
        let grid = level
            .build_grid(&config)
            .grid
            .with_found_words(&FoundWords::from_iter(["CAT"]));

        let view = GridView::from_grid(&grid);
        let json: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();

        assert_eq!(view.cells.len(), usize::from(view.height));
        assert!(view.cells.iter().all(|row| row.len() == usize::from(view.width)));
        assert_eq!(view.words.len(), 3);
        let first = &json["cells"][0][0];
        assert!(first.get("isBlocked").is_some());
        assert!(first.get("isRevealed").is_some());
        assert!(json.get("skippedWords").is_none());
        assert_eq!(json["words"][0]["direction"], "horizontal");
    }

    #[test]
    fn grid_view_lists_skipped_layout_words() {
        let level = load_level(
            r#"{
                "letters": "CATDOG",
                "solutions": ["CAT"],
                "grid_layout": [
                    { "word": "CAT", "x": 0, "y": 0, "direction": "horizontal" },
                    { "word": "DOG", "x": 0, "y": 2, "direction": "horizontal" }
                ]
            }"#,
            &LayoutConfig::default(),
        )
        .unwrap();

        let outcome = level.build_grid(&LayoutConfig::default());
        let view = GridView::from_outcome(&outcome);

        assert_eq!(view.skipped_words, ["DOG"]);
        assert_eq!((view.width, view.height), (3, 1));
        assert_eq!(
            describe_issues(&outcome.issues),
            ["layout word DOG is not a solution or bonus word"]
        );
    }

    #[test]
    fn empty_grid_view_signals_no_grid() {
        let view = GridView::from_grid(&Grid::empty());

        assert!(view.is_empty());
        assert!(view.cells.is_empty());
    }
}
