use super::GridCoord;

/// Axis-aligned screen rectangle in pixels
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// One straight grid line, endpoints in pixels
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LineSegment {
    pub start: (f32, f32),
    pub end: (f32, f32),
}

/// Pixel geometry of the grid: square cells of integer edge, centered on screen.
/// Computed once from the screen size and never changed afterwards.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Layout {
    cell_edge: f32,
    origin: (f32, f32),
    cell_counts: (usize, usize),
}

impl Layout {
    /// Fit `cell_counts` square cells inside the screen minus `pad_ratio` on every edge
    pub fn compute(screen_size: (f32, f32), pad_ratio: f32, cell_counts: (usize, usize)) -> Self {
        let (screen_w, screen_h) = screen_size;
        let (cols, rows) = (cell_counts.0 as f32, cell_counts.1 as f32);

        let pad_x = pad_ratio * screen_w;
        let pad_y = pad_ratio * screen_h;
        let raw_x = (screen_w - 2.0 * pad_x) / cols;
        let raw_y = (screen_h - 2.0 * pad_y) / rows;

        let cell_edge = raw_x.min(raw_y).floor().max(0.0);

        // Floored so grid lines land on whole pixels
        let origin = (
            ((screen_w - cell_edge * cols) / 2.0).floor(),
            ((screen_h - cell_edge * rows) / 2.0).floor(),
        );

        Self { cell_edge, origin, cell_counts }
    }

    /// Edge length of one square cell in pixels
    pub const fn cell_edge(&self) -> f32 {
        self.cell_edge
    }

    /// Top-left pixel of the grid
    pub const fn origin(&self) -> (f32, f32) {
        self.origin
    }

    /// Whole grid area on screen
    pub fn grid_region(&self) -> PixelRect {
        PixelRect {
            x: self.origin.0,
            y: self.origin.1,
            width: self.cell_edge * self.cell_counts.0 as f32,
            height: self.cell_edge * self.cell_counts.1 as f32,
        }
    }

    /// Top-left pixel of cell `c`. Defined for any coordinate.
    pub fn grid_to_screen(&self, c: GridCoord) -> (f32, f32) {
        (
            self.origin.0 + c.x as f32 * self.cell_edge,
            self.origin.1 + c.y as f32 * self.cell_edge,
        )
    }

    /// Cell whose square contains the pixel, or `None` outside the grid
    pub fn screen_to_grid(&self, px: f32, py: f32) -> Option<GridCoord> {
        if self.cell_edge <= 0.0 || !self.grid_region().contains(px, py) {
            return None;
        }

        let x = ((px - self.origin.0) / self.cell_edge).floor() as i32;
        let y = ((py - self.origin.1) / self.cell_edge).floor() as i32;

        let (cols, rows) = (self.cell_counts.0 as i32, self.cell_counts.1 as i32);
        (x >= 0 && y >= 0 && x < cols && y < rows).then_some(GridCoord::new(x, y))
    }

    /// Vertical then horizontal grid lines, including the outer border
    pub fn line_segments(&self) -> Vec<LineSegment> {
        let region = self.grid_region();
        let (left, top) = (region.x, region.y);
        let (right, bottom) = (region.x + region.width, region.y + region.height);

        let verticals = (0..=self.cell_counts.0).map(|i| {
            let x = left + i as f32 * self.cell_edge;
            LineSegment { start: (x, top), end: (x, bottom) }
        });
        let horizontals = (0..=self.cell_counts.1).map(|j| {
            let y = top + j as f32 * self.cell_edge;
            LineSegment { start: (left, y), end: (right, y) }
        });

        verticals.chain(horizontals).collect()
    }
}
