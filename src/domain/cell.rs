/// A single cell of the field, stored as one byte.
/// Zero is dead, anything else reads as alive; the engine only ever writes 0 or 1.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Complement of the current state, used by pointer edits
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Conway's B3/S23 rule:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Raw byte: non-zero means alive
impl From<u8> for Cell {
    fn from(value: u8) -> Self {
        if value == 0 { Cell::Dead } else { Cell::Alive }
    }
}
