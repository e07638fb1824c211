//! Brick Breaker - A minimal Breakout-style arcade game core
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (shapes, collisions, game session)
//! - `renderer`: Host-facing draw list (the core never draws)
//! - `platform`: Tick driver and host abstraction
//! - `settings`: Data-driven game configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{GameSession, GameState, Key};

/// Game configuration constants
pub mod consts {
    /// Host tick interval in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 25;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1000.0;
    pub const ARENA_HEIGHT: f32 = 1000.0;
    pub const MARGIN: f32 = 10.0;

    /// Paddle step per Left/Right key press
    pub const MOVE_UNIT: f32 = 10.0;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 40.0;
    /// Row count range (inclusive)
    pub const BRICK_ROWS: (u32, u32) = (1, 5);
    /// Bricks per row range (inclusive)
    pub const BRICKS_PER_ROW: (u32, u32) = (1, 8);

    /// Paddle is this much wider than a brick
    pub const PADDLE_EXTRA_WIDTH: f32 = 10.0;
    /// Paddle sits this far above the floor
    pub const PADDLE_Y: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPAWN_Y: f32 = 100.0;
    /// Spawn x range (inclusive, whole units)
    pub const BALL_SPAWN_X: (i32, i32) = (1, 1000);
    /// Initial speed magnitude range per axis (inclusive, whole units)
    pub const BALL_SPEED: (i32, i32) = (5, 8);

    /// Up/Down speed multipliers
    pub const SPEED_UP_FACTOR: f32 = 1.1;
    pub const SLOW_DOWN_FACTOR: f32 = 0.9;

    /// The paddle only deflects balls falling faster than this
    pub const PADDLE_MIN_FALL_SPEED: f32 = 1.0;
}
