use super::{Cell, GridCoord, Layout};
use crate::config::Config;
use rayon::prelude::*;

/// Fields with at least this many cells are stepped on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 128 * 128;

/// Grid owns the cell field and its screen layout.
/// Off-grid coordinates read as dead and ignore writes (dead border).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    layout: Layout,
}

impl Grid {
    /// Create an all-dead grid with no screen geometry
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
            layout: Layout::default(),
        }
    }

    /// Install cell counts, allocate an all-dead field and fit the layout to the video mode
    pub fn setup(&mut self, config: &Config) {
        let (width, height) = config.cell_counts;
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::Dead; width * height];
        self.layout = Layout::compute(
            config.video_mode.size_f32(),
            config.screen_edge_pad_ratio,
            config.cell_counts,
        );
    }

    /// Clear every cell; geometry is left untouched
    pub fn reset(&mut self, config: &Config) {
        let (width, height) = config.cell_counts;
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::Dead; width * height];
    }

    /// Get grid dimensions in cells
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn is_valid(&self, c: GridCoord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as usize) < self.width && (c.y as usize) < self.height
    }

    /// Row-major index, only for valid coordinates
    fn index(&self, c: GridCoord) -> usize {
        c.y as usize * self.width + c.x as usize
    }

    pub fn get_cell(&self, c: GridCoord) -> Cell {
        if self.is_valid(c) {
            self.cells[self.index(c)]
        } else {
            Cell::Dead
        }
    }

    pub fn set_cell(&mut self, c: GridCoord, cell: Cell) {
        if self.is_valid(c) {
            let idx = self.index(c);
            self.cells[idx] = cell;
        }
    }

    /// Alive cells among the 8 neighbors; off-grid neighbors count as dead
    pub fn alive_neighbor_count(&self, c: GridCoord) -> u8 {
        c.neighbors()
            .filter(|&n| self.get_cell(n).is_alive())
            .count() as u8
    }

    fn next_cell(&self, c: GridCoord) -> Cell {
        self.get_cell(c).evolve(self.alive_neighbor_count(c))
    }

    /// Next generation computed serially into a fresh field
    pub fn evolve(&self) -> Self {
        let cells = self
            .coords()
            .map(|c| self.next_cell(c))
            .collect();

        Self { cells, ..self.clone_shape() }
    }

    /// Next generation computed on the rayon pool, one row per task
    pub fn evolve_parallel(&self) -> Self {
        let width = self.width as i32;
        let cells: Vec<Cell> = (0..self.height as i32)
            .into_par_iter()
            .flat_map_iter(|y| (0..width).map(move |x| GridCoord::new(x, y)))
            .map(|c| self.next_cell(c))
            .collect();

        Self { cells, ..self.clone_shape() }
    }

    /// Advance one Conway generation. Reads only the pre-step field.
    pub fn process_step(&mut self) {
        *self = if self.cells.len() >= PARALLEL_THRESHOLD {
            self.evolve_parallel()
        } else {
            self.evolve()
        };
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of every alive cell, row by row
    pub fn alive_cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.coords().filter(|&c| self.get_cell(c).is_alive())
    }

    /// Every valid coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = GridCoord> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| GridCoord::new(x, y)))
    }

    fn clone_shape(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: Vec::new(),
            layout: self.layout,
        }
    }
}
