//! Host-facing render data
//!
//! The core never draws. After each update the host builds a `Scene` and
//! draws its items back to front.

pub mod shapes;

use serde::{Deserialize, Serialize};

pub use shapes::{Color, DrawItem};

use crate::sim::{GameSession, GameState};
use shapes::{BALL_COLOR, BRICK_COLOR, PADDLE_COLOR};

/// Everything visible on screen, back to front
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub state: GameState,
    pub items: Vec<DrawItem>,
}

impl Scene {
    /// Collect the visible background, bricks, paddle and ball
    pub fn from_session(session: &GameSession) -> Self {
        let settings = &session.settings;
        let mut items = Vec::with_capacity(session.bricks.len() + 3);

        items.push(DrawItem::background(settings.arena_width, settings.arena_height));
        items.extend(
            session
                .visible_bricks()
                .map(|brick| DrawItem::of(brick, BRICK_COLOR)),
        );
        if session.paddle.rect.visible {
            items.push(DrawItem::of(&session.paddle, PADDLE_COLOR));
        }
        if let Some(ball) = session.active_ball() {
            items.push(DrawItem::of(ball, BALL_COLOR));
        }

        Self {
            state: session.state,
            items,
        }
    }

    /// Serialize for a host running outside the process (e.g. a web page)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
