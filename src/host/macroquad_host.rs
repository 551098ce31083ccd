use std::time::{Duration, Instant};

use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::{EventHandler, KeyCode, KeyMods, MouseButton};
use macroquad::prelude::*;

use super::{Host, VideoMode};
use crate::domain::{LineSegment, PixelRect};
use crate::input::Event;
use crate::rendering::Canvas;

/// Collects replayed miniquad input in arrival order
#[derive(Default)]
struct EventCollector {
    events: Vec<Event>,
}

impl EventHandler for EventCollector {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, repeat: bool) {
        if !repeat {
            self.events.push(Event::KeyPressed(keycode));
        }
    }

    fn mouse_button_down_event(&mut self, _button: MouseButton, x: f32, y: f32) {
        self.events.push(Event::MouseButtonPressed { x, y });
    }
}

/// Host backed by the macroquad window opened in `main`
pub struct MacroquadHost {
    subscriber: usize,
    bits_per_pixel: u32,
    framerate_limit: u32,
    frame_start: Instant,
}

impl MacroquadHost {
    /// Must be called from inside the macroquad main future
    pub fn new(bits_per_pixel: u32) -> Self {
        // Route the close button through poll_events instead of exiting
        prevent_quit();
        Self {
            subscriber: register_input_subscriber(),
            bits_per_pixel,
            framerate_limit: 0,
            frame_start: Instant::now(),
        }
    }
}

impl Canvas for MacroquadHost {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn draw_rect(&mut self, rect: PixelRect, fill: Color, outline: Option<(Color, f32)>) {
        draw_rectangle(rect.x, rect.y, rect.width, rect.height, fill);
        if let Some((color, thickness)) = outline {
            draw_rectangle_lines(rect.x, rect.y, rect.width, rect.height, thickness, color);
        }
    }

    fn draw_lines(&mut self, lines: &[LineSegment], color: Color, thickness: f32) {
        for line in lines {
            draw_line(line.start.0, line.start.1, line.end.0, line.end.1, thickness, color);
        }
    }
}

impl Host for MacroquadHost {
    /// macroquad cannot list display modes; the only known one is the open window
    fn video_modes(&self, bits_per_pixel: u32) -> Vec<VideoMode> {
        if bits_per_pixel != self.bits_per_pixel {
            return Vec::new();
        }
        let (width, height) = self.actual_size();
        vec![VideoMode::new(width, height, bits_per_pixel)]
    }

    fn actual_size(&self) -> (u32, u32) {
        (screen_width() as u32, screen_height() as u32)
    }

    fn set_framerate_limit(&mut self, limit: u32) {
        self.framerate_limit = limit;
    }

    fn poll_events(&mut self) -> Vec<Event> {
        let mut collector = EventCollector::default();
        repeat_all_miniquad_input(&mut collector, self.subscriber);
        if is_quit_requested() {
            collector.events.push(Event::WindowClosed);
        }
        collector.events
    }

    fn is_open(&self) -> bool {
        true
    }

    async fn present(&mut self) {
        next_frame().await;

        if self.framerate_limit > 0 {
            let budget = Duration::from_secs_f64(1.0 / f64::from(self.framerate_limit));
            if let Some(remaining) = budget.checked_sub(self.frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
        self.frame_start = Instant::now();
    }
}
