mod cell;
mod coord;
mod grid;
mod layout;
mod patterns;

pub use cell::Cell;
pub use coord::GridCoord;
pub use grid::{Grid, PARALLEL_THRESHOLD};
pub use layout::{Layout, LineSegment, PixelRect};
pub use patterns::{Pattern, presets};
