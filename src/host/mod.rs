//! The window the simulation runs in.

mod macroquad_host;

pub use macroquad_host::MacroquadHost;

use std::fmt;

use crate::input::Event;
use crate::rendering::Canvas;

/// Full-screen display mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VideoMode {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
}

impl VideoMode {
    pub const fn new(width: u32, height: u32, bits_per_pixel: u32) -> Self {
        Self { width, height, bits_per_pixel }
    }

    pub fn size_f32(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl fmt::Display for VideoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} @ {}bpp", self.width, self.height, self.bits_per_pixel)
    }
}

/// Outcome of matching a requested mode against what the display offers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeChoice {
    /// The requested mode is offered as-is
    Requested(VideoMode),
    /// Not offered; this is the largest mode at the requested depth
    Fallback(VideoMode),
    /// Nothing offered at the requested depth; keep the request
    Unlisted(VideoMode),
}

/// Accept `requested` if offered, else fall back to the largest mode at its depth
pub fn negotiate_video_mode(requested: VideoMode, available: &[VideoMode]) -> ModeChoice {
    let same_depth = available
        .iter()
        .filter(|mode| mode.bits_per_pixel == requested.bits_per_pixel);

    if same_depth.clone().any(|mode| *mode == requested) {
        return ModeChoice::Requested(requested);
    }

    same_depth
        .max_by_key(|mode| (mode.area(), mode.width))
        .map_or(ModeChoice::Unlisted(requested), |mode| ModeChoice::Fallback(*mode))
}

/// Windowing and drawing services the coordinator needs from the host library
#[allow(async_fn_in_trait)]
pub trait Host: Canvas {
    /// Modes the display offers at the given depth
    fn video_modes(&self, bits_per_pixel: u32) -> Vec<VideoMode>;

    /// Pixel size of the window as actually created
    fn actual_size(&self) -> (u32, u32);

    /// Cap presents per second; 0 removes the cap
    fn set_framerate_limit(&mut self, limit: u32);

    /// Drain pending input without blocking, oldest first
    fn poll_events(&mut self) -> Vec<Event>;

    fn is_open(&self) -> bool;

    /// Show the drawn frame; may wait for vsync or the framerate cap
    async fn present(&mut self);
}
