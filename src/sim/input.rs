//! Discrete input handling and state transitions
//!
//! Keys mutate the session immediately; there is no queue. Every handler
//! returns whether the host should redraw.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameSession, GameState};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Start / pause / resume
    Enter,
    Left,
    Right,
    /// Speed the ball up
    Up,
    /// Slow the ball down
    Down,
}

impl Key {
    /// Map a host key name ("enter", "left", ...) to a key
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "enter" | "return" => Some(Key::Enter),
            "left" => Some(Key::Left),
            "right" => Some(Key::Right),
            "up" => Some(Key::Up),
            "down" => Some(Key::Down),
            _ => None,
        }
    }
}

impl GameSession {
    /// Host input entry point
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Enter => {
                match self.state {
                    GameState::Off => self.start_game(),
                    GameState::Running => self.pause_game(),
                    GameState::Paused => self.resume_game(),
                }
                true
            }
            Key::Left => self.move_paddle(-1.0),
            Key::Right => self.move_paddle(1.0),
            Key::Up => self.scale_ball_speed(self.settings.speed_up_factor),
            Key::Down => self.scale_ball_speed(self.settings.slow_down_factor),
        }
    }

    /// Begin a round: lay out bricks if none remain, show the paddle, spawn a ball
    pub fn start_game(&mut self) {
        if self.bricks.is_empty() {
            self.create_bricks();
        }
        self.paddle.rect.set_visible(true);

        let ball = self.spawn_ball();
        log::info!(
            "Round started: ball at {} vel {}, {} bricks",
            ball.center(),
            ball.vel,
            self.visible_brick_count()
        );
        self.ball = Some(ball);
        self.paused_vel = None;
        self.state = GameState::Running;
    }

    /// Freeze the ball, remembering its velocity
    pub fn pause_game(&mut self) {
        if let Some(ball) = self.ball.as_mut() {
            self.paused_vel = Some(ball.vel);
            ball.vel = Vec2::ZERO;
        }
        self.state = GameState::Paused;
        log::info!("Paused");
    }

    /// Restore the velocity saved by `pause_game`
    pub fn resume_game(&mut self) {
        if let (Some(ball), Some(vel)) = (self.ball.as_mut(), self.paused_vel.take()) {
            ball.vel = vel;
        }
        self.state = GameState::Running;
        log::info!("Resumed");
    }

    /// Move the paddle `steps` move units, clamped to the arena
    ///
    /// Allowed in every state, including while the paddle is hidden.
    pub fn move_paddle(&mut self, steps: f32) -> bool {
        let offset = steps * self.settings.move_unit;
        let new_x = (self.paddle.x() + offset).clamp(0.0, self.settings.paddle_max_x());
        self.paddle.move_by(new_x - self.paddle.x());
        true
    }

    /// Scale the ball velocity; ignored when no round is in progress
    pub fn scale_ball_speed(&mut self, factor: f32) -> bool {
        if self.state == GameState::Off {
            log::debug!("Ignoring speed change with no ball in play");
            return false;
        }
        match self.ball.as_mut() {
            Some(ball) => {
                ball.scale_speed(factor);
                log::debug!("Ball speed scaled by {factor}: vel={}", ball.vel);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::settings::Settings;
    use crate::sim::shape::Shape;

    fn session() -> GameSession {
        GameSession::new(Settings::seeded(11)).unwrap()
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("Enter"), Some(Key::Enter));
        assert_eq!(Key::from_name("left"), Some(Key::Left));
        assert_eq!(Key::from_name("space"), None);
    }

    #[test]
    fn test_enter_cycles_states() {
        let mut s = session();
        assert!(s.handle_key(Key::Enter));
        assert_eq!(s.state, GameState::Running);
        assert!(s.paddle.visible());
        assert!(s.active_ball().is_some());

        s.handle_key(Key::Enter);
        assert_eq!(s.state, GameState::Paused);
        assert_eq!(s.ball.as_ref().unwrap().vel, Vec2::ZERO);

        s.handle_key(Key::Enter);
        assert_eq!(s.state, GameState::Running);
        assert_ne!(s.ball.as_ref().unwrap().vel, Vec2::ZERO);
    }

    #[test]
    fn test_start_twice_keeps_bricks() {
        let mut s = session();
        let count = s.bricks.len();
        s.start_game();
        s.start_game();
        assert_eq!(s.bricks.len(), count);
    }

    #[test]
    fn test_start_after_round_end_regenerates() {
        let mut s = session();
        s.start_game();
        s.end_round();
        assert!(s.bricks.is_empty());
        s.handle_key(Key::Enter);
        assert!(!s.bricks.is_empty());
        assert!(s.bricks.iter().all(|b| b.is_visible()));
    }

    #[test]
    fn test_pause_resume_after_scaling() {
        let mut s = session();
        s.start_game();
        s.handle_key(Key::Up);
        s.handle_key(Key::Up);
        s.handle_key(Key::Down);
        let vel = s.ball.as_ref().unwrap().vel;

        s.pause_game();
        s.resume_game();
        let restored = s.ball.as_ref().unwrap().vel;
        assert_eq!(restored.x.to_bits(), vel.x.to_bits());
        assert_eq!(restored.y.to_bits(), vel.y.to_bits());
    }

    #[test]
    fn test_speed_keys_scale_both_components() {
        let mut s = session();
        s.start_game();
        let vel = s.ball.as_ref().unwrap().vel;
        assert!(s.handle_key(Key::Up));
        assert_eq!(s.ball.as_ref().unwrap().vel, vel * 1.1);
        assert!(s.handle_key(Key::Down));
        assert_eq!(s.ball.as_ref().unwrap().vel, vel * 1.1 * 0.9);
    }

    #[test]
    fn test_speed_keys_ignored_when_off() {
        let mut s = session();
        assert!(!s.handle_key(Key::Up));
        assert!(!s.handle_key(Key::Down));
        assert!(s.ball.is_none());

        // Also after a round has ended and the old ball is hidden
        s.start_game();
        s.end_round();
        let vel = s.ball.as_ref().unwrap().vel;
        assert!(!s.handle_key(Key::Up));
        assert_eq!(s.ball.as_ref().unwrap().vel, vel);
    }

    #[test]
    fn test_paddle_moves_while_off() {
        let mut s = session();
        assert!(s.handle_key(Key::Left));
        assert_eq!(s.paddle.x(), 445.0);
        s.handle_key(Key::Right);
        s.handle_key(Key::Right);
        assert_eq!(s.paddle.x(), 465.0);
    }

    #[test]
    fn test_paddle_clamps_at_walls() {
        let mut s = session();
        for _ in 0..100 {
            s.handle_key(Key::Left);
        }
        assert_eq!(s.paddle.x(), 0.0);
        for _ in 0..200 {
            s.handle_key(Key::Right);
        }
        assert_eq!(s.paddle.x(), 910.0);
    }

    proptest! {
        /// Any sequence of moves keeps the paddle inside the arena
        #[test]
        fn prop_paddle_always_in_bounds(moves in prop::collection::vec(any::<bool>(), 0..300)) {
            let mut s = session();
            for right in moves {
                s.handle_key(if right { Key::Right } else { Key::Left });
                prop_assert!(s.paddle.x() >= 0.0);
                prop_assert!(s.paddle.x() <= s.settings.paddle_max_x());
            }
        }

        /// Pause/resume restores the velocity bit for bit
        #[test]
        fn prop_pause_resume_exact(dx in -20.0f32..20.0, dy in -20.0f32..20.0, ups in 0usize..5) {
            let mut s = session();
            s.start_game();
            s.ball.as_mut().unwrap().vel = Vec2::new(dx, dy);
            for _ in 0..ups {
                s.handle_key(Key::Up);
            }
            let vel = s.ball.as_ref().unwrap().vel;
            s.handle_key(Key::Enter);
            prop_assert_eq!(s.state, GameState::Paused);
            s.handle_key(Key::Enter);
            prop_assert_eq!(s.state, GameState::Running);
            let restored = s.ball.as_ref().unwrap().vel;
            prop_assert_eq!(restored.x.to_bits(), vel.x.to_bits());
            prop_assert_eq!(restored.y.to_bits(), vel.y.to_bits());
        }
    }
}
