//! Tick-driven simulation module
//!
//! All gameplay logic lives here. This module must stay host-agnostic:
//! - One mutation pass per tick, inputs applied between ticks
//! - Seeded RNG only
//! - Stable iteration order (brick collection order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod shape;
pub mod state;
pub mod tick;

pub use collision::{HitSide, brick_hit, circle_in_rect};
pub use input::Key;
pub use shape::{Circle, Rect, Shape, ShapeKind};
pub use state::{Ball, Brick, GameEvent, GameSession, GameState, Paddle};
pub use tick::{Contact, step_ball, tick};
