use std::ops::Add;

/// Column/row of a cell. Signed so neighbor scans can step off the edge
/// without wrapping; validity is decided by the grid, never by casting.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The 8-neighborhood: the 3x3 box around `self` minus `self`.
    /// Neighbors past the `i32` range do not exist and are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = GridCoord> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(move |(dx, dy)| {
                Some(GridCoord::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
            })
    }
}

impl Add for GridCoord {
    type Output = GridCoord;

    /// Saturates; a saturated coordinate is never on a grid
    fn add(self, rhs: GridCoord) -> GridCoord {
        GridCoord::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        GridCoord::new(x, y)
    }
}
