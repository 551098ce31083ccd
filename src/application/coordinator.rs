use std::time::Instant;

use crate::config::Config;
use crate::domain::{Grid, GridCoord, Pattern, presets};
use crate::host::{Host, ModeChoice, negotiate_video_mode};
use crate::input::{self, Command, Event};
use crate::rendering;

/// Initial seconds between automatic generations
pub const DEFAULT_STEP_DELAY_SEC: f32 = 0.25;

/// Coordinator owns the run loop, the step clock and the pattern library.
/// All cell state lives in `grid` and is only changed through it.
pub struct Coordinator {
    config: Config,
    grid: Grid,
    patterns: Vec<Pattern>,
    pub running: bool,
    pub paused: bool,
    pub step_delay_sec: f32,
    pub elapsed_sec: f32,
    pub step_counter: u64,
}

impl Coordinator {
    /// Lay out the grid for the configured video mode; starts paused and empty
    pub fn new(config: Config) -> Self {
        let mut grid = Grid::default();
        grid.setup(&config);
        Self {
            config,
            grid,
            patterns: presets::all_patterns(),
            running: true,
            paused: true,
            step_delay_sec: DEFAULT_STEP_DELAY_SEC,
            elapsed_sec: 0.0,
            step_counter: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Settle the video mode against the host, adopt the real window size and relayout
    pub fn setup(&mut self, host: &mut impl Host) {
        let requested = self.config.video_mode;
        log::info!("Attempting video mode {requested}");

        let available = host.video_modes(requested.bits_per_pixel);
        match negotiate_video_mode(requested, &available) {
            ModeChoice::Requested(mode) => log::info!("Video mode {mode} accepted"),
            ModeChoice::Fallback(mode) => {
                let listed: Vec<String> = available.iter().map(ToString::to_string).collect();
                log::warn!(
                    "Video mode {requested} is not supported. Valid video modes at {}bpp: {}",
                    requested.bits_per_pixel,
                    listed.join(", ")
                );
                log::warn!("Falling back to {mode}");
                self.config.video_mode = mode;
            }
            ModeChoice::Unlisted(mode) => {
                log::info!("No video modes listed at {}bpp, keeping {mode}", mode.bits_per_pixel)
            }
        }

        let (width, height) = host.actual_size();
        let mode = &mut self.config.video_mode;
        if (mode.width, mode.height) != (width, height) {
            log::info!("Window opened at {width}x{height} instead of {mode}, using that");
            mode.width = width;
            mode.height = height;
        }

        if self.config.framerate_limit > 0 {
            host.set_framerate_limit(self.config.framerate_limit);
        }

        self.grid.setup(&self.config);
        log::debug!(
            "Grid {:?} cells, edge {}px, origin {:?}",
            self.grid.dimensions(),
            self.grid.layout().cell_edge(),
            self.grid.layout().origin()
        );
    }

    /// Setup, loop until quit or the window closes, then report the step count
    pub async fn run(&mut self, host: &mut impl Host) {
        self.setup(host);

        let mut clock = Instant::now();
        while self.running && host.is_open() {
            let now = Instant::now();
            let dt = now.duration_since(clock).as_secs_f32();
            clock = now;

            self.frame(host, dt);
            host.present().await;
        }

        self.teardown();
    }

    /// One loop iteration without the present: events, at most one step, draw
    pub fn frame(&mut self, host: &mut impl Host, dt: f32) {
        for event in host.poll_events() {
            self.handle_event(event);
        }
        self.update(dt);
        rendering::draw_grid(host, &self.grid, &self.config);
    }

    pub fn teardown(&self) {
        log::info!("Stopped after {} generations", self.step_counter);
        println!("Step Count={}", self.step_counter);
    }

    pub fn handle_event(&mut self, event: Event) {
        if event == Event::WindowClosed {
            log::info!("Stopping because window was closed externally");
        }
        if let Some(command) = input::command_for(event) {
            self.apply(command);
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Quit => self.running = false,
            Command::TogglePause => {
                self.paused = !self.paused;
                log::debug!("{}", if self.paused { "Paused" } else { "Running" });
            }
            Command::SpeedUp => self.scale_step_delay(0.9),
            Command::SlowDown => self.scale_step_delay(1.1),
            Command::Step => self.step(),
            Command::Reset => {
                self.reset();
                log::info!("Reset");
            }
            Command::LoadPattern(index) => self.load_pattern(index),
            Command::ToggleCellAt { x, y } => self.toggle_cell_at(x, y),
        }
    }

    /// Advance the step clock; fires at most one generation per call
    pub fn update(&mut self, dt: f32) {
        if self.paused {
            return;
        }

        self.elapsed_sec += dt;
        if self.elapsed_sec > self.step_delay_sec {
            // Cleared, not decremented: a long stall must not replay a burst of steps
            self.elapsed_sec = 0.0;
            self.step();
        }
    }

    /// Pause, clear every cell and zero the step counter
    pub fn reset(&mut self) {
        self.paused = true;
        self.grid.reset(&self.config);
        self.step_counter = 0;
        self.elapsed_sec = 0.0;
    }

    /// Reset, then place pattern `index` around the grid center
    pub fn load_pattern(&mut self, index: usize) {
        if index >= self.patterns.len() {
            return;
        }
        self.reset();
        let (cx, cy) = self.config.center();
        let pattern = &self.patterns[index];
        pattern.place_on(&mut self.grid, GridCoord::new(cx, cy));
        log::info!("Loaded {} ({})", pattern.name, pattern.description);
    }

    /// Flip the cell under a pointer press; ignored while running or off-grid
    pub fn toggle_cell_at(&mut self, x: f32, y: f32) {
        if !self.paused {
            return;
        }
        if let Some(c) = self.grid.layout().screen_to_grid(x, y) {
            let cell = self.grid.get_cell(c).toggle();
            self.grid.set_cell(c, cell);
            log::debug!("Cell ({}, {}) -> {:?}", c.x, c.y, cell);
        }
    }

    fn step(&mut self) {
        self.grid.process_step();
        self.step_counter += 1;
    }

    fn scale_step_delay(&mut self, factor: f32) {
        self.step_delay_sec *= factor;
        log::debug!("Step delay {:.3}s", self.step_delay_sec);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn coordinator() -> Coordinator {
        Coordinator::new(Config::default())
    }

    #[test]
    fn test_initial_state() {
        let c = coordinator();
        assert!(c.running);
        assert!(c.paused);
        assert_eq!(c.step_delay_sec, 0.25);
        assert_eq!(c.step_counter, 0);
        assert_eq!(c.grid().alive_count(), 0);
    }

    #[test]
    fn test_update_ignored_while_paused() {
        let mut c = coordinator();
        c.load_pattern(0);
        c.update(10.0);
        assert_eq!(c.step_counter, 0);
        assert_eq!(c.elapsed_sec, 0.0);
    }

    #[test]
    fn test_at_most_one_step_per_tick() {
        let mut c = coordinator();
        c.paused = false;
        c.update(10.0);
        assert_eq!(c.step_counter, 1);
        assert_eq!(c.elapsed_sec, 0.0);
    }

    #[test]
    fn test_step_fires_only_past_delay() {
        let mut c = coordinator();
        c.paused = false;
        c.update(0.1);
        c.update(0.1);
        assert_eq!(c.step_counter, 0);
        c.update(0.1);
        assert_eq!(c.step_counter, 1);
        assert_eq!(c.elapsed_sec, 0.0);
    }

    #[test]
    fn test_delay_exactly_reached_does_not_step() {
        let mut c = coordinator();
        c.paused = false;
        c.update(0.25);
        assert_eq!(c.step_counter, 0);
    }

    #[test]
    fn test_reset_zeros_counter_and_pauses() {
        let mut c = coordinator();
        c.load_pattern(1);
        c.apply(Command::Step);
        c.apply(Command::TogglePause);
        c.apply(Command::Reset);
        assert!(c.paused);
        assert_eq!(c.step_counter, 0);
        assert_eq!(c.grid().alive_count(), 0);
    }

    #[test]
    fn test_load_pattern_replaces_field() {
        let mut c = coordinator();
        c.load_pattern(7);
        c.load_pattern(0);
        assert_eq!(c.grid().alive_count(), 5);
        assert!(c.grid().get_cell(GridCoord::new(16, 11)).is_alive());
    }

    #[test]
    fn test_unknown_pattern_index_is_ignored() {
        let mut c = coordinator();
        c.load_pattern(0);
        c.load_pattern(8);
        assert_eq!(c.grid().alive_count(), 5);
    }

    #[test]
    fn test_pointer_miss_is_noop() {
        let mut c = coordinator();
        c.toggle_cell_at(0.0, 0.0);
        assert_eq!(c.grid().alive_count(), 0);
    }

    #[test]
    fn test_pointer_toggles_cell_under_press() {
        let mut c = coordinator();
        let target = GridCoord::new(3, 7);
        let (x, y) = c.grid().layout().grid_to_screen(target);
        c.toggle_cell_at(x + 1.0, y + 1.0);
        assert_eq!(c.grid().get_cell(target), Cell::Alive);
        assert_eq!(c.grid().alive_count(), 1);
    }

    #[test]
    fn test_quit_stops_running() {
        let mut c = coordinator();
        c.handle_event(Event::WindowClosed);
        assert!(!c.running);
    }
}
