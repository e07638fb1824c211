//! Fixed-interval simulation tick
//!
//! Advances the ball once per host tick and applies whatever it hit.

use super::collision::{HitSide, brick_hit, hits_ceiling, hits_floor, hits_paddle, hits_side_wall};
use super::state::{Ball, Brick, GameEvent, GameSession, GameState, Paddle};
use crate::consts::PADDLE_MIN_FALL_SPEED;
use crate::settings::Settings;

/// What the ball touched during one step (first match wins)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    None,
    SideWall,
    Ceiling,
    Paddle,
    Floor,
    Brick { index: usize, side: HitSide },
}

/// Advance the session by one tick
///
/// Returns whether the host should redraw. Ticks outside `Running` are no-ops.
pub fn tick(session: &mut GameSession) -> bool {
    if session.state != GameState::Running {
        return false;
    }
    let Some(ball) = session.ball.as_mut() else {
        return false;
    };

    session.time_ticks += 1;
    let contact = step_ball(ball, &session.paddle, &mut session.bricks, &session.settings);

    match contact {
        Contact::None => {}
        Contact::SideWall => {
            log::debug!("Side wall bounce, vel={}", ball.vel);
            session.push_event(GameEvent::WallBounce);
        }
        Contact::Ceiling => {
            log::debug!("Ceiling bounce, vel={}", ball.vel);
            session.push_event(GameEvent::CeilingBounce);
        }
        Contact::Paddle => {
            log::debug!("Paddle bounce, vel={}", ball.vel);
            session.push_event(GameEvent::PaddleBounce);
        }
        Contact::Floor => {
            log::info!("Ball lost after {} ticks", session.time_ticks);
            session.end_round();
            session.push_event(GameEvent::RoundLost);
        }
        Contact::Brick { index, side } => {
            log::debug!("Brick {index} destroyed ({side:?})");
            session.push_event(GameEvent::BrickDestroyed { index, side });
        }
    }

    // Also covers layouts that started out empty
    if session.state == GameState::Running && session.visible_brick_count() == 0 {
        log::info!("All bricks cleared after {} ticks", session.time_ticks);
        session.end_round();
        session.push_event(GameEvent::RoundCleared);
    }

    true
}

/// Move the ball one step and resolve at most one contact
///
/// The ball always advances by its velocity first. A reflection flips one
/// velocity component and advances again by the new velocity.
pub fn step_ball(
    ball: &mut Ball,
    paddle: &Paddle,
    bricks: &mut [Brick],
    settings: &Settings,
) -> Contact {
    ball.apply_velocity();

    if hits_side_wall(&ball.circle, settings.arena_width) {
        ball.reflect_x();
        return Contact::SideWall;
    }

    if hits_ceiling(&ball.circle, settings.arena_height) {
        ball.reflect_y();
        return Contact::Ceiling;
    }

    if ball.vel.y < -PADDLE_MIN_FALL_SPEED && hits_paddle(&ball.circle, &paddle.rect) {
        ball.reflect_y();
        return Contact::Paddle;
    }

    if hits_floor(&ball.circle) {
        ball.circle.set_visible(false);
        return Contact::Floor;
    }

    for (index, brick) in bricks.iter_mut().enumerate() {
        if !brick.is_visible() {
            continue;
        }
        let Some(side) = brick_hit(&ball.circle, ball.vel, &brick.rect) else {
            continue;
        };

        brick.rect.set_visible(false);
        match side {
            HitSide::Side => ball.reflect_x(),
            HitSide::TopBottom => ball.reflect_y(),
        }
        return Contact::Brick { index, side };
    }

    Contact::None
}

impl GameSession {
    /// Host tick entry point; the counter is only used for tracing
    pub fn update(&mut self, tick_index: u64) -> bool {
        log::trace!("tick {tick_index}");
        tick(self)
    }
}
