//! Game state and core simulation types
//!
//! The session is an explicitly owned value: the host constructs one and
//! passes it to `tick` and the input handlers.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::HitSide;
use super::shape::{Circle, Rect, Shape, ShapeKind};
use crate::settings::{Settings, SettingsError};

/// Top-level game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No round in progress
    Off,
    /// Ball moving, ticks advance the simulation
    Running,
    /// Ball frozen, velocity remembered
    Paused,
}

/// Something that happened during a tick, for host-side effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    CeilingBounce,
    PaddleBounce,
    BrickDestroyed { index: usize, side: HitSide },
    /// Ball reached the floor
    RoundLost,
    /// Last visible brick destroyed
    RoundCleared,
}

/// A destructible brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
}

impl Brick {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(pos, width, height),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.rect.visible
    }
}

/// The player's paddle ("racket")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        let mut rect = Rect::new(pos, width, height);
        rect.visible = false;
        Self { rect }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.rect.x()
    }

    /// Shift horizontally; bounds are the caller's concern
    pub fn move_by(&mut self, offset: f32) {
        self.rect.set_x(self.rect.x() + offset);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub circle: Circle,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(center: Vec2, radius: f32, vel: Vec2) -> Self {
        Self {
            circle: Circle::new(center, radius),
            vel,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.circle.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.circle.radius
    }

    /// Advance the center by the current velocity
    ///
    /// Called once at the start of every tick and again after every
    /// reflection, so bounce ticks move the ball twice.
    pub fn apply_velocity(&mut self) {
        self.circle.center += self.vel;
    }

    pub fn reflect_x(&mut self) {
        self.vel.x = -self.vel.x;
        self.apply_velocity();
    }

    pub fn reflect_y(&mut self) {
        self.vel.y = -self.vel.y;
        self.apply_velocity();
    }

    /// Scale both velocity components
    pub fn scale_speed(&mut self, factor: f32) {
        self.vel *= factor;
    }
}

macro_rules! impl_shape {
    ($ty:ty, $field:ident) => {
        impl Shape for $ty {
            fn kind(&self) -> ShapeKind {
                self.$field.kind()
            }

            fn position(&self) -> Vec2 {
                self.$field.position()
            }

            fn size(&self) -> Vec2 {
                self.$field.size()
            }

            fn visible(&self) -> bool {
                self.$field.visible
            }
        }
    };
}

impl_shape!(Brick, rect);
impl_shape!(Paddle, rect);
impl_shape!(Ball, circle);

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession {
    pub settings: Settings,
    pub state: GameState,
    /// Bricks in layout order (collision tie-break order)
    pub bricks: Vec<Brick>,
    pub paddle: Paddle,
    /// Last spawned ball; hidden once its round ends
    pub ball: Option<Ball>,
    /// Velocity saved by pause, restored by resume
    pub paused_vel: Option<Vec2>,
    /// Ticks simulated while running
    pub time_ticks: u64,
    seed: u64,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session in `Off` with an initial brick layout
    ///
    /// Settings are validated first; the layout, spawn and paddle code
    /// assume ordered ranges and a paddle that fits the arena.
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;

        let seed = settings.seed.unwrap_or_else(|| {
            let seed = rand::random();
            log::info!("No seed configured, using {seed}");
            seed
        });

        let paddle = Paddle::new(
            Vec2::new(settings.paddle_start_x(), settings.paddle_y),
            settings.paddle_width(),
            settings.paddle_height(),
        );

        let mut session = Self {
            settings,
            state: GameState::Off,
            bricks: Vec::new(),
            paddle,
            ball: None,
            paused_vel: None,
            time_ticks: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        };
        session.create_bricks();
        Ok(session)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Ball currently in play, if any
    pub fn active_ball(&self) -> Option<&Ball> {
        self.ball.as_ref().filter(|b| b.circle.visible)
    }

    pub fn visible_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.is_visible())
    }

    pub fn visible_brick_count(&self) -> usize {
        self.visible_bricks().count()
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Generate a random brick layout, appending rows to the collection
    pub fn create_bricks(&mut self) {
        let (rows_lo, rows_hi) = self.settings.brick_rows;
        let (per_row_lo, per_row_hi) = self.settings.bricks_per_row;
        let spacing = self.settings.brick_spacing();
        let row_height = self.settings.arena_height / 12.0;

        let rows = self.rng.random_range(rows_lo..=rows_hi);
        if rows == 0 {
            log::warn!("Layout has no rows, round is trivially won");
        }

        for row in 1..=rows {
            let count = self.rng.random_range(per_row_lo..=per_row_hi);
            if count == 0 {
                log::warn!("Layout row {row} is empty");
            }

            let mut x = self.settings.arena_width / 2.0 - count as f32 * spacing / 2.0
                + self.settings.margin * 3.0;
            let y = self.settings.arena_height - row_height * row as f32;
            for _ in 0..count {
                self.bricks.push(Brick::new(
                    Vec2::new(x, y),
                    self.settings.brick_width,
                    self.settings.brick_height,
                ));
                x += spacing;
            }
        }

        log::info!("Generated {} bricks in {} rows", self.bricks.len(), rows);
    }

    /// Spawn a fresh ball with a random position and velocity
    pub(crate) fn spawn_ball(&mut self) -> Ball {
        let (x_lo, x_hi) = self.settings.ball_spawn_x;
        let (speed_lo, speed_hi) = self.settings.ball_speed;

        let x = self.rng.random_range(x_lo..=x_hi) as f32;
        let dx = -(self.rng.random_range(speed_lo..=speed_hi) as f32);
        let dy = self.rng.random_range(speed_lo..=speed_hi) as f32;

        Ball::new(
            Vec2::new(x, self.settings.ball_spawn_y),
            self.settings.ball_radius,
            Vec2::new(dx, dy),
        )
    }

    /// Tear down the round: hide everything and return to `Off`
    pub(crate) fn end_round(&mut self) {
        if let Some(ball) = self.ball.as_mut() {
            ball.circle.set_visible(false);
        }
        for brick in &mut self.bricks {
            brick.rect.set_visible(false);
        }
        self.bricks.clear();
        self.paddle.rect.set_visible(false);
        self.paused_vel = None;
        self.state = GameState::Off;
    }
}
