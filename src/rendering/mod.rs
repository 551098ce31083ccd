use macroquad::color::{Color, colors::BLACK};

use crate::config::Config;
use crate::domain::{Grid, LineSegment, PixelRect};

/// The drawing calls a frame needs. The host implements it over its window;
/// tests implement it by recording calls.
pub trait Canvas {
    fn clear(&mut self, color: Color);

    /// Filled rectangle with an optional (color, thickness) outline
    fn draw_rect(&mut self, rect: PixelRect, fill: Color, outline: Option<(Color, f32)>);

    fn draw_lines(&mut self, lines: &[LineSegment], color: Color, thickness: f32);
}

/// Square on screen for one cell
fn cell_rect(grid: &Grid, x: f32, y: f32) -> PixelRect {
    let edge = grid.layout().cell_edge();
    PixelRect { x, y, width: edge, height: edge }
}

/// Draw one frame: black clear, grid background, line overlay, then alive cells
pub fn draw_grid(canvas: &mut impl Canvas, grid: &Grid, config: &Config) {
    let layout = grid.layout();

    canvas.clear(BLACK);
    canvas.draw_rect(layout.grid_region(), config.grid_color_background, None);
    canvas.draw_lines(
        &layout.line_segments(),
        config.grid_color_outline,
        config.grid_line_thickness,
    );

    let outline = Some((config.grid_color_outline, config.grid_line_thickness));
    for c in grid.alive_cells() {
        let (x, y) = layout.grid_to_screen(c);
        canvas.draw_rect(cell_rect(grid, x, y), config.grid_color_on, outline);
    }
}
