use super::{Cell, Grid, GridCoord};

/// A canned arrangement placed relative to the grid center.
/// `cells` are written alive first, then `erased` are written dead.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: Vec<(i32, i32)>,
    pub erased: Vec<(i32, i32)>,
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i32, i32)>) -> Self {
        Self { name, description, cells, erased: Vec::new() }
    }

    /// Offsets to clear after the alive cells are written
    pub fn with_erased(mut self, erased: Vec<(i32, i32)>) -> Self {
        self.erased = erased;
        self
    }

    /// Write the pattern around `center`; off-grid cells are dropped by the grid
    pub fn place_on(&self, grid: &mut Grid, center: GridCoord) {
        for &offset in &self.cells {
            grid.set_cell(center + GridCoord::from(offset), Cell::Alive);
        }
        for &offset in &self.erased {
            grid.set_cell(center + GridCoord::from(offset), Cell::Dead);
        }
    }
}

/// The patterns bound to keys 1 through 8
pub mod presets {
    use super::*;

    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![(3, 0), (3, 1), (3, 2), (2, 2), (1, 1)],
        )
    }

    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (-1, 1)],
        )
    }

    pub fn diehard() -> Pattern {
        Pattern::new(
            "Diehard",
            "Vanishes after 130 generations",
            vec![
                (-5, 0), (-4, 0), (-4, 1),
                (0, 1), (1, 1), (2, 1), (1, -1),
            ],
        )
    }

    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (-3, 0), (-2, 0), (-2, -2),
                (0, -1), (1, 0), (2, 0), (3, 0),
            ],
        )
    }

    /// Ten-cell seed of a block-laying switch engine
    pub fn infinite_growth_1() -> Pattern {
        Pattern::new(
            "Infinite growth 1",
            "Block-laying switch engine seed (10 cells)",
            vec![
                (-4, 0),
                (-2, 0), (-2, -1),
                (0, -2), (0, -3), (0, -4),
                (2, -3), (2, -4), (2, -5),
                (3, -4),
            ],
        )
    }

    /// 5x5 seed of a block-laying switch engine
    pub fn infinite_growth_2() -> Pattern {
        Pattern::new(
            "Infinite growth 2",
            "Block-laying switch engine seed (5x5)",
            vec![
                (-3, 0), (-2, 0), (-1, 0), (1, 0),
                (-3, 1),
                (0, 2), (1, 2),
                (-2, 3), (-1, 3), (1, 3),
                (-3, 4), (-1, 4), (1, 4),
            ],
        )
    }

    pub fn penta_decathlon() -> Pattern {
        let block = (-1..=1)
            .flat_map(|y| (-4..4).map(move |x| (x, y)))
            .collect();
        Pattern::new("Penta-decathlon", "Oscillator (period 15)", block)
            .with_erased(vec![(-3, 0), (2, 0)])
    }

    /// One 39-cell row with gaps punched in
    pub fn long_row() -> Pattern {
        Pattern::new("Long row", "Gapped 39-cell line", (-19..=19).map(|x| (x, 0)).collect())
            .with_erased(vec![
                (-11, 0),
                (-5, 0), (-4, 0), (-3, 0),
                (1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0),
                (14, 0),
            ])
    }

    /// Patterns in key order: index 0 is key 1
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            r_pentomino(),
            diehard(),
            acorn(),
            infinite_growth_1(),
            infinite_growth_2(),
            penta_decathlon(),
            long_row(),
        ]
    }
}
