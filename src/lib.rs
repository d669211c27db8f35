//! Brick Breaker - a deterministic arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, entities, collisions, game state)
//! - `driver`: Fixed-interval frame driver and input plumbing
//! - `config`: Injectable game configuration
//! - `autopilot`: Demo-mode input source that plays from snapshots

pub mod autopilot;
pub mod config;
pub mod driver;
pub mod error;
pub mod sim;

pub use autopilot::Autopilot;
pub use config::GameConfig;
pub use driver::{FrameDriver, Game};
pub use error::ConfigError;

/// Default configuration constants
pub mod consts {
    /// Fixed simulation interval in milliseconds (100 Hz)
    pub const TICK_INTERVAL_MS: u64 = 10;
    /// Maximum ticks run per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const CANVAS_WIDTH: u32 = 800;
    pub const CANVAS_HEIGHT: u32 = 600;

    /// Paddle defaults
    pub const PADDLE_WIDTH: u32 = 100;
    pub const PADDLE_HEIGHT: u32 = 20;
    /// Distance from the paddle's top edge to the bottom of the canvas
    pub const PADDLE_BOTTOM_OFFSET: u32 = 50;
    /// Horizontal paddle speed while an arrow is held (units per tick)
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_SIZE: u32 = 16;
    /// Launch speed (units per tick)
    pub const BALL_SPEED: f32 = 5.0;
    /// Width of the upward launch cone (radians, centred on straight up)
    pub const LAUNCH_CONE: f32 = std::f32::consts::FRAC_PI_2;
    /// Paddle deflection limit either side of vertical (60 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLUMNS: u32 = 9;
    pub const BRICK_WIDTH: u32 = 80;
    pub const BRICK_HEIGHT: u32 = 30;
    pub const BRICK_ROW_GAP: u32 = 5;
    pub const BRICK_TOP_OFFSET: u32 = 50;
    /// Points per row step; the top row is worth `rows * POINTS_PER_ROW`
    pub const POINTS_PER_ROW: u32 = 10;

    pub const STARTING_LIVES: u32 = 3;
}
