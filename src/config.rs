//! Startup configuration. Fixed once the window is open.

use macroquad::color::Color;
use thiserror::Error;

use crate::host::VideoMode;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cell counts must be non-zero, got {0}x{1}")]
    EmptyGrid(usize, usize),
    #[error("cell counts {0}x{1} overflow the coordinate or index range")]
    GridTooLarge(usize, usize),
    #[error("screen edge pad ratio must be in [0, 0.5), got {0}")]
    PadRatio(f32),
    #[error("video mode {0} has no pixels")]
    EmptyVideoMode(VideoMode),
    #[error("grid line thickness must be positive, got {0}")]
    LineThickness(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Requested full-screen mode; replaced by the actual size once the window is open
    pub video_mode: VideoMode,
    pub fullscreen: bool,
    /// 0 means unlimited
    pub framerate_limit: u32,
    /// Fraction of the screen left empty on every edge
    pub screen_edge_pad_ratio: f32,
    /// (columns, rows)
    pub cell_counts: (usize, usize),
    pub grid_line_thickness: f32,
    pub grid_color_background: Color,
    pub grid_color_outline: Color,
    pub grid_color_on: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            video_mode: VideoMode::new(4112, 2580, 32),
            fullscreen: true,
            framerate_limit: 0,
            screen_edge_pad_ratio: 0.035,
            cell_counts: (30, 20),
            grid_line_thickness: 2.0,
            grid_color_background: Color::from_rgba(18, 18, 18, 255),
            grid_color_outline: Color::from_rgba(0, 0, 0, 255),
            grid_color_on: Color::from_rgba(255, 200, 64, 255),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (cols, rows) = self.cell_counts;
        if cols == 0 || rows == 0 {
            return Err(ConfigError::EmptyGrid(cols, rows));
        }
        let axis_limit = i32::MAX as usize;
        if cols > axis_limit || rows > axis_limit || cols.checked_mul(rows).is_none() {
            return Err(ConfigError::GridTooLarge(cols, rows));
        }
        if !(0.0..0.5).contains(&self.screen_edge_pad_ratio) {
            return Err(ConfigError::PadRatio(self.screen_edge_pad_ratio));
        }
        if self.video_mode.width == 0 || self.video_mode.height == 0 {
            return Err(ConfigError::EmptyVideoMode(self.video_mode));
        }
        if self.grid_line_thickness.is_nan() || self.grid_line_thickness <= 0.0 {
            return Err(ConfigError::LineThickness(self.grid_line_thickness));
        }
        Ok(())
    }

    /// Integer-division center cell that canned patterns are placed around
    pub fn center(&self) -> (i32, i32) {
        ((self.cell_counts.0 / 2) as i32, (self.cell_counts.1 / 2) as i32)
    }
}
