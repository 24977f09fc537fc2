use ndarray::Array2;

use crate::*;

/// Smallest box around every non-blocked cell, `None` when there are no letters at all.
pub fn letter_bounds(cells: &Array2<Cell>) -> Option<BoundingBox> {
    let (min, max) = cells
        .indexed_iter()
        .filter(|(_, cell)| !cell.is_blocked)
        .map(|((x, y), _)| (x, y))
        .fold(None, |acc: Option<((usize, usize), (usize, usize))>, (x, y)| {
            Some(match acc {
                None => ((x, y), (x, y)),
                Some((min, max)) => ((min.0.min(x), min.1.min(y)), (max.0.max(x), max.1.max(y))),
            })
        })?;

    Some(BoundingBox::new(
        (min.0 as Coord, min.1 as Coord),
        ((max.0 - min.0 + 1) as Coord, (max.1 - min.1 + 1) as Coord),
    ))
}

/// Copies the `bbox` region out of `cells`, renumbering cell coordinates from the new origin.
fn crop(cells: &Array2<Cell>, bbox: BoundingBox) -> Array2<Cell> {
    let (ox, oy) = bbox.origin;
    Array2::from_shape_fn(bbox.size.to_nd_index(), |(x, y)| {
        let (x, y) = (x as Coord, y as Coord);
        Cell {
            x,
            y,
            ..cells[(ox + x, oy + y).to_nd_index()]
        }
    })
}

/// Drops fully blocked border rows and columns. Relative positions of the kept cells are unchanged,
/// a grid without letters trims down to 0x0.
pub fn trim_grid(cells: &Array2<Cell>) -> Array2<Cell> {
    let bbox = letter_bounds(cells).unwrap_or_default();
    crop(cells, bbox)
}

impl Grid {
    /// Same crop as [`trim_grid`], with the placed words moved along.
    pub fn trimmed(self) -> Self {
        let bbox = letter_bounds(&self.cells).unwrap_or_default();
        if bbox.origin == (0, 0) && bbox.size == self.size() {
            return self;
        }

        Self {
            cells: crop(&self.cells, bbox),
            words: self
                .words
                .iter()
                .map(|word| word.shifted(bbox.origin))
                .collect(),
        }
    }
}
