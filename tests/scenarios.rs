//! End-to-end scenarios: Coordinator and Grid driven through a stub host.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use life_grid::domain::{LineSegment, PixelRect};
use life_grid::input::Event;
use life_grid::rendering::Canvas;
use life_grid::{Cell, Config, Coordinator, Grid, GridCoord, Host, VideoMode};
use macroquad::color::Color;
use macroquad::input::KeyCode;

/// Records draw calls and replays scripted input, one batch per poll
struct StubHost {
    modes: Vec<VideoMode>,
    actual: (u32, u32),
    script: VecDeque<Vec<Event>>,
    framerate_limit: Option<u32>,
    clears: usize,
    rects: Vec<(PixelRect, Color)>,
    presents: usize,
}

impl StubHost {
    fn new(config: &Config) -> Self {
        let mode = config.video_mode;
        Self {
            modes: vec![mode],
            actual: (mode.width, mode.height),
            script: VecDeque::new(),
            framerate_limit: None,
            clears: 0,
            rects: Vec::new(),
            presents: 0,
        }
    }

    fn then(mut self, events: Vec<Event>) -> Self {
        self.script.push_back(events);
        self
    }
}

impl Canvas for StubHost {
    fn clear(&mut self, _color: Color) {
        self.clears += 1;
        self.rects.clear();
    }

    fn draw_rect(&mut self, rect: PixelRect, fill: Color, _outline: Option<(Color, f32)>) {
        self.rects.push((rect, fill));
    }

    fn draw_lines(&mut self, _lines: &[LineSegment], _color: Color, _thickness: f32) {}
}

impl Host for StubHost {
    fn video_modes(&self, bits_per_pixel: u32) -> Vec<VideoMode> {
        self.modes
            .iter()
            .copied()
            .filter(|mode| mode.bits_per_pixel == bits_per_pixel)
            .collect()
    }

    fn actual_size(&self) -> (u32, u32) {
        self.actual
    }

    fn set_framerate_limit(&mut self, limit: u32) {
        self.framerate_limit = Some(limit);
    }

    fn poll_events(&mut self) -> Vec<Event> {
        self.script.pop_front().unwrap_or_else(|| vec![Event::WindowClosed])
    }

    fn is_open(&self) -> bool {
        true
    }

    async fn present(&mut self) {
        self.presents += 1;
    }
}

/// The stub never suspends, so one poll always completes
fn block_on<F: Future>(future: F) -> F::Output {
    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("stub host future suspended"),
    }
}

fn key(code: KeyCode) -> Event {
    Event::KeyPressed(code)
}

fn started() -> (Coordinator, StubHost) {
    let config = Config::default();
    let mut host = StubHost::new(&config);
    let mut coordinator = Coordinator::new(config);
    coordinator.setup(&mut host);
    (coordinator, host)
}

fn press(coordinator: &mut Coordinator, host: &mut StubHost, events: Vec<Event>) {
    host.script.push_back(events);
    coordinator.frame(host, 0.0);
}

fn alive(grid: &Grid) -> Vec<(i32, i32)> {
    let mut cells: Vec<_> = grid.alive_cells().map(|c| (c.x, c.y)).collect();
    cells.sort();
    cells
}

fn cell_center(coordinator: &Coordinator, x: i32, y: i32) -> Event {
    let layout = coordinator.grid().layout();
    let (sx, sy) = layout.grid_to_screen(GridCoord::new(x, y));
    let half = layout.cell_edge() / 2.0;
    Event::MouseButtonPressed { x: sx + half, y: sy + half }
}

fn glider_run() -> (Coordinator, StubHost, Vec<(i32, i32)>) {
    let (mut coordinator, mut host) = started();
    press(&mut coordinator, &mut host, vec![key(KeyCode::Key1)]);
    let initial = alive(coordinator.grid());
    press(&mut coordinator, &mut host, vec![key(KeyCode::Space)]);
    assert_eq!(coordinator.step_counter, 0);

    for _ in 0..4 {
        host.script.push_back(Vec::new());
        coordinator.frame(&mut host, 0.26);
    }
    (coordinator, host, initial)
}

#[test]
fn glider_advances() {
    let (coordinator, host, initial) = glider_run();

    assert_eq!(coordinator.step_counter, 4);
    assert!(!coordinator.paused);
    assert_eq!(coordinator.grid().alive_count(), 5);
    let shifted: Vec<_> = initial.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
    assert_eq!(alive(coordinator.grid()), shifted);

    // Background plus five alive squares in the last frame
    assert_eq!(host.rects.len(), 6);
}

#[test]
fn manual_step_respects_pause() {
    let (mut coordinator, mut host) = started();
    press(&mut coordinator, &mut host, vec![key(KeyCode::Key1)]);

    let mut expected = coordinator.grid().clone();
    for _ in 0..3 {
        expected.process_step();
    }

    press(
        &mut coordinator,
        &mut host,
        vec![key(KeyCode::Right), key(KeyCode::Right), key(KeyCode::Right)],
    );
    assert!(coordinator.paused);
    assert_eq!(coordinator.step_counter, 3);
    assert_eq!(alive(coordinator.grid()), alive(&expected));

    for _ in 0..5 {
        host.script.push_back(Vec::new());
        coordinator.frame(&mut host, 1.0);
    }
    assert_eq!(coordinator.step_counter, 3);
    assert_eq!(alive(coordinator.grid()), alive(&expected));
}

#[test]
fn reset_clears_everything() {
    let (mut coordinator, mut host, _) = glider_run();
    press(&mut coordinator, &mut host, vec![key(KeyCode::R)]);

    assert!(coordinator.paused);
    assert_eq!(coordinator.step_counter, 0);
    assert_eq!(coordinator.grid().alive_count(), 0);
    assert_eq!(host.rects.len(), 1);
}

#[test]
fn pointer_toggle_only_while_paused() {
    let (mut coordinator, mut host) = started();
    let target = GridCoord::new(10, 10);

    let click = cell_center(&coordinator, 10, 10);
    press(&mut coordinator, &mut host, vec![click]);
    assert_eq!(coordinator.grid().get_cell(target), Cell::Alive);

    press(&mut coordinator, &mut host, vec![click]);
    assert_eq!(coordinator.grid().get_cell(target), Cell::Dead);

    press(&mut coordinator, &mut host, vec![key(KeyCode::Space), click]);
    assert!(!coordinator.paused);
    assert_eq!(coordinator.grid().get_cell(target), Cell::Dead);
    assert_eq!(coordinator.grid().alive_count(), 0);
}

#[test]
fn pointer_outside_grid_is_ignored() {
    let (mut coordinator, mut host) = started();
    press(&mut coordinator, &mut host, vec![Event::MouseButtonPressed { x: 1.0, y: 1.0 }]);
    assert_eq!(coordinator.grid().alive_count(), 0);
}

#[test]
fn speed_keys_scale_step_delay() {
    let (mut coordinator, mut host) = started();
    press(
        &mut coordinator,
        &mut host,
        vec![key(KeyCode::Up), key(KeyCode::Up), key(KeyCode::Down)],
    );
    assert!((coordinator.step_delay_sec - 0.22275).abs() < 1e-6);
}

#[test]
fn blinker_parity() {
    let (mut coordinator, mut host) = started();
    let clicks = vec![
        cell_center(&coordinator, 10, 10),
        cell_center(&coordinator, 11, 10),
        cell_center(&coordinator, 12, 10),
    ];
    press(&mut coordinator, &mut host, clicks);
    assert_eq!(alive(coordinator.grid()), vec![(10, 10), (11, 10), (12, 10)]);

    press(&mut coordinator, &mut host, vec![key(KeyCode::Space)]);

    host.script.push_back(Vec::new());
    coordinator.frame(&mut host, 0.26);
    assert_eq!(alive(coordinator.grid()), vec![(11, 9), (11, 10), (11, 11)]);

    host.script.push_back(Vec::new());
    coordinator.frame(&mut host, 0.26);
    assert_eq!(alive(coordinator.grid()), vec![(10, 10), (11, 10), (12, 10)]);
}

#[test]
fn events_apply_in_arrival_order() {
    let (mut coordinator, mut host) = started();
    // Load, step, then reset: the reset must win
    press(
        &mut coordinator,
        &mut host,
        vec![key(KeyCode::Key2), key(KeyCode::Right), key(KeyCode::R)],
    );
    assert_eq!(coordinator.step_counter, 0);
    assert_eq!(coordinator.grid().alive_count(), 0);

    // Reset, then load: the pattern must survive
    press(&mut coordinator, &mut host, vec![key(KeyCode::R), key(KeyCode::Key3)]);
    assert_eq!(coordinator.grid().alive_count(), 7);
}

#[test]
fn unsupported_mode_falls_back_to_largest() {
    let config = Config { video_mode: VideoMode::new(4112, 2580, 32), ..Config::default() };
    let mut host = StubHost::new(&config);
    host.modes = vec![
        VideoMode::new(1920, 1080, 32),
        VideoMode::new(2560, 1440, 32),
        VideoMode::new(3840, 2160, 16),
    ];
    host.actual = (2560, 1440);

    let mut coordinator = Coordinator::new(config);
    coordinator.setup(&mut host);

    assert_eq!(coordinator.config().video_mode, VideoMode::new(2560, 1440, 32));
    let expected = life_grid::Layout::compute((2560.0, 1440.0), 0.035, (30, 20));
    assert_eq!(*coordinator.grid().layout(), expected);
}

#[test]
fn actual_window_size_is_adopted() {
    let config = Config { video_mode: VideoMode::new(1920, 1080, 32), ..Config::default() };
    let mut host = StubHost::new(&config);
    host.actual = (1600, 900);

    let mut coordinator = Coordinator::new(config);
    coordinator.setup(&mut host);

    assert_eq!(coordinator.config().video_mode, VideoMode::new(1600, 900, 32));
    let region = coordinator.grid().layout().grid_region();
    assert!(region.x >= 0.0 && region.x + region.width <= 1600.0);
    assert!(region.y >= 0.0 && region.y + region.height <= 900.0);
}

#[test]
fn framerate_limit_only_when_positive() {
    let (_, host) = started();
    assert_eq!(host.framerate_limit, None);

    let config = Config { framerate_limit: 60, ..Config::default() };
    let mut host = StubHost::new(&config);
    Coordinator::new(config).setup(&mut host);
    assert_eq!(host.framerate_limit, Some(60));
}

#[test]
fn run_loop_stops_on_escape() {
    let config = Config::default();
    let mut host = StubHost::new(&config)
        .then(vec![key(KeyCode::Key1)])
        .then(vec![key(KeyCode::Right)])
        .then(vec![key(KeyCode::Right), key(KeyCode::Escape)])
        .then(vec![key(KeyCode::Right)]);
    let mut coordinator = Coordinator::new(config);

    block_on(coordinator.run(&mut host));

    assert!(!coordinator.running);
    assert_eq!(coordinator.step_counter, 2);
    assert_eq!(host.clears, 3);
    assert_eq!(host.presents, 3);
    assert_eq!(host.script.len(), 1);
}

#[test]
fn run_loop_stops_when_window_closes() {
    let config = Config::default();
    let mut host = StubHost::new(&config).then(Vec::new());
    let mut coordinator = Coordinator::new(config);

    block_on(coordinator.run(&mut host));

    assert!(!coordinator.running);
    assert_eq!(host.presents, 2);
}
