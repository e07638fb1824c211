//! Game settings
//!
//! Every tunable of the simulation lives here. Defaults mirror `crate::consts`;
//! a JSON file can override any subset of them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Spacing unit used by the brick layout
    pub margin: f32,
    /// Paddle step per key press
    pub move_unit: f32,

    // === Bricks ===
    pub brick_width: f32,
    pub brick_height: f32,
    /// Inclusive range for the number of rows
    pub brick_rows: (u32, u32),
    /// Inclusive range for the number of bricks in a row
    pub bricks_per_row: (u32, u32),

    // === Paddle ===
    pub paddle_y: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_spawn_y: f32,
    pub ball_spawn_x: (i32, i32),
    /// Inclusive range for |dx| and |dy| at spawn
    pub ball_speed: (i32, i32),
    pub speed_up_factor: f32,
    pub slow_down_factor: f32,

    // === Host ===
    pub tick_interval_ms: u64,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            margin: MARGIN,
            move_unit: MOVE_UNIT,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_rows: BRICK_ROWS,
            bricks_per_row: BRICKS_PER_ROW,

            paddle_y: PADDLE_Y,

            ball_radius: BALL_RADIUS,
            ball_spawn_y: BALL_SPAWN_Y,
            ball_spawn_x: BALL_SPAWN_X,
            ball_speed: BALL_SPEED,
            speed_up_factor: SPEED_UP_FACTOR,
            slow_down_factor: SLOW_DOWN_FACTOR,

            tick_interval_ms: TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

impl Settings {
    /// Default settings with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("brick_width", self.brick_width)?;
        positive("brick_height", self.brick_height)?;
        positive("ball_radius", self.ball_radius)?;
        positive("move_unit", self.move_unit)?;
        positive("speed_up_factor", self.speed_up_factor)?;
        positive("slow_down_factor", self.slow_down_factor)?;
        if self.margin < 0.0 {
            return Err(invalid("margin", "must not be negative"));
        }
        if self.paddle_width() > self.arena_width {
            return Err(invalid("brick_width", "paddle would be wider than the arena"));
        }
        if self.tick_interval_ms == 0 {
            return Err(invalid("tick_interval_ms", "must be at least 1"));
        }
        ordered("brick_rows", self.brick_rows.0, self.brick_rows.1)?;
        ordered("bricks_per_row", self.bricks_per_row.0, self.bricks_per_row.1)?;
        ordered("ball_spawn_x", self.ball_spawn_x.0, self.ball_spawn_x.1)?;
        ordered("ball_speed", self.ball_speed.0, self.ball_speed.1)?;
        Ok(())
    }

    /// Paddle is a little wider than a brick
    pub fn paddle_width(&self) -> f32 {
        self.brick_width + PADDLE_EXTRA_WIDTH
    }

    pub fn paddle_height(&self) -> f32 {
        self.brick_height / 2.0
    }

    /// Paddle starts centered
    pub fn paddle_start_x(&self) -> f32 {
        self.arena_width / 2.0 - self.paddle_width() / 2.0
    }

    /// Distance between the left edges of neighbouring bricks
    pub fn brick_spacing(&self) -> f32 {
        self.brick_width + self.margin * 3.0
    }

    /// Rightmost x the paddle may occupy
    pub fn paddle_max_x(&self) -> f32 {
        self.arena_width - self.paddle_width()
    }
}

fn invalid(field: &'static str, reason: &str) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            reason: format!("must be positive, got {value}"),
        })
    }
}

fn ordered<T: PartialOrd + std::fmt::Debug>(
    field: &'static str,
    lo: T,
    hi: T,
) -> Result<(), SettingsError> {
    if lo <= hi {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            reason: format!("range {lo:?}..={hi:?} is empty"),
        })
    }
}
