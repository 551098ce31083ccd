use std::process::ExitCode;

use clap::Parser;
use macroquad::prelude::*;
use life_grid::{Config, Coordinator, MacroquadHost, VideoMode};

/// Conway's Game of Life on a full-screen grid.
///
/// Space: run/pause, Right: single step, Up/Down: faster/slower,
/// R: reset, 1-8: load a pattern, click (while paused): toggle a cell, Esc: quit.
#[derive(Parser, Debug)]
#[command(name = "life_grid", version, about)]
struct Cli {
    /// Grid columns
    #[arg(long)]
    columns: Option<usize>,

    /// Grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Requested video mode width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Requested video mode height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Requested video mode depth
    #[arg(long)]
    bpp: Option<u32>,

    /// Frames per second cap, 0 for unlimited
    #[arg(long)]
    framerate_limit: Option<u32>,

    /// Fraction of the screen left empty around the grid
    #[arg(long)]
    pad_ratio: Option<f32>,

    /// Open a normal window instead of going full-screen
    #[arg(long)]
    windowed: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        let defaults = Config::default();
        let mode = defaults.video_mode;
        Config {
            video_mode: VideoMode::new(
                self.width.unwrap_or(mode.width),
                self.height.unwrap_or(mode.height),
                self.bpp.unwrap_or(mode.bits_per_pixel),
            ),
            fullscreen: !self.windowed,
            framerate_limit: self.framerate_limit.unwrap_or(defaults.framerate_limit),
            screen_edge_pad_ratio: self.pad_ratio.unwrap_or(defaults.screen_edge_pad_ratio),
            cell_counts: (
                self.columns.unwrap_or(defaults.cell_counts.0),
                self.rows.unwrap_or(defaults.cell_counts.1),
            ),
            ..defaults
        }
    }
}

fn window_conf(config: &Config) -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: config.video_mode.width as i32,
        window_height: config.video_mode.height as i32,
        fullscreen: config.fullscreen,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(config: Config) {
    // Full-screen size is only reported after the first frame
    next_frame().await;
    let mut host = MacroquadHost::new(config.video_mode.bits_per_pixel);
    let mut coordinator = Coordinator::new(config);
    coordinator.run(&mut host).await;
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let config = Cli::parse().into_config();
    if let Err(e) = config.validate() {
        log::error!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    log::info!(
        "Grid {}x{}, requested {}",
        config.cell_counts.0,
        config.cell_counts.1,
        config.video_mode
    );

    macroquad::Window::from_config(window_conf(&config), run(config));
    ExitCode::SUCCESS
}
