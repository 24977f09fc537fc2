use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u16;

/// Count type used for cell totals.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const fn orthogonal(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Unit step `(dx, dy)` along the word.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Self::Horizontal => (1, 0),
            Self::Vertical => (0, 1),
        }
    }
}

/// Rectangle in grid coordinates, `size` counts cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub origin: Coord2,
    pub size: Coord2,
}

impl BoundingBox {
    pub const fn new(origin: Coord2, size: Coord2) -> Self {
        Self { origin, size }
    }

    pub const fn is_empty(&self) -> bool {
        self.size.0 == 0 || self.size.1 == 0
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn contains(&self, (x, y): Coord2) -> bool {
        let (ox, oy) = self.origin;
        x >= ox && y >= oy && x - ox < self.size.0 && y - oy < self.size.1
    }

    /// Translates absolute coordinates into ones relative to `origin`.
    pub const fn to_local(&self, coords: Coord2) -> Option<Coord2> {
        if self.contains(coords) {
            Some((coords.0 - self.origin.0, coords.1 - self.origin.1))
        } else {
            None
        }
    }
}
