// Domain layer - cells, layout, step engine, canned patterns
pub mod domain;

// Application layer - run loop and input handling
pub mod application;

// Infrastructure layer - host window, rendering, input mapping
pub mod config;
pub mod host;
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::Coordinator;
pub use config::{Config, ConfigError};
pub use domain::{Cell, Grid, GridCoord, Layout, Pattern, presets};
pub use host::{Host, MacroquadHost, VideoMode};
