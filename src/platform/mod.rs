//! Platform abstraction layer
//!
//! The host owns the window, the timer and the keyboard. It hands ticks and
//! key presses to a `TickDriver`, which forwards redraw requests back.

use std::time::Duration;

use crate::settings::{Settings, SettingsError};
use crate::sim::{GameSession, GameState, Key};

/// Capabilities the core needs from the host UI
pub trait Host {
    /// Schedule a repaint; fire-and-forget
    fn request_redraw(&mut self);
}

/// Host that ignores redraw requests (headless runs, tests)
#[derive(Debug, Default)]
pub struct Headless {
    pub redraws: u64,
}

impl Host for Headless {
    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}

/// Owns the session and serializes ticks and key presses against it
///
/// A multi-threaded host wraps the whole driver in a single mutex.
pub struct TickDriver<H: Host> {
    session: GameSession,
    host: H,
    tick_index: u64,
}

impl<H: Host> TickDriver<H> {
    pub fn new(settings: Settings, host: H) -> Result<Self, SettingsError> {
        Ok(Self {
            session: GameSession::new(settings)?,
            host,
            tick_index: 0,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Interval the host timer should fire at
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.session.settings.tick_interval_ms)
    }

    /// Timer callback
    pub fn tick(&mut self) {
        let redraw = self.session.update(self.tick_index);
        self.tick_index += 1;
        if redraw {
            self.host.request_redraw();
        }
    }

    /// Key-down callback
    pub fn key(&mut self, key: Key) {
        if self.session.handle_key(key) {
            self.host.request_redraw();
        }
    }

    /// Key-down callback from a host key name; unknown names are ignored
    pub fn key_named(&mut self, name: &str) {
        match Key::from_name(name) {
            Some(key) => self.key(key),
            None => log::trace!("Ignoring key {name:?}"),
        }
    }
}

/// Demo player: keeps the paddle under the ball
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Dead zone around the paddle center
    pub slack: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { slack: 5.0 }
    }
}

impl Autopilot {
    /// Key to press this tick, if any
    pub fn next_key(&self, session: &GameSession) -> Option<Key> {
        if session.state == GameState::Off {
            return Some(Key::Enter);
        }
        let ball = session.active_ball()?;

        // Lead the target slightly so fast balls are met early
        let target = ball.center().x + ball.vel.x * 2.0;
        let paddle_center = session.paddle.x() + session.settings.paddle_width() / 2.0;
        if target < paddle_center - self.slack {
            Some(Key::Left)
        } else if target > paddle_center + self.slack {
            Some(Key::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::Ball;

    #[test]
    fn test_driver_forwards_redraws() {
        let mut driver = TickDriver::new(Settings::seeded(4), Headless::default()).unwrap();
        assert_eq!(driver.interval(), Duration::from_millis(25));

        // Ticks while Off are not redrawn
        driver.tick();
        assert_eq!(driver.host().redraws, 0);

        driver.key(Key::Enter);
        assert_eq!(driver.host().redraws, 1);
        driver.tick();
        assert_eq!(driver.host().redraws, 2);

        // Ignored speed key does not redraw
        driver.key(Key::Enter);
        driver.key(Key::Enter);
        assert_eq!(driver.session().state, GameState::Running);
        driver.session_mut().end_round();
        driver.key(Key::Up);
        assert_eq!(driver.host().redraws, 4);
    }

    #[test]
    fn test_key_named() {
        let mut driver = TickDriver::new(Settings::seeded(4), Headless::default()).unwrap();
        driver.key_named("escape");
        assert_eq!(driver.session().state, GameState::Off);
        driver.key_named("enter");
        assert_eq!(driver.session().state, GameState::Running);
    }

    #[test]
    fn test_driver_rejects_invalid_settings() {
        let settings = Settings {
            tick_interval_ms: 0,
            ..Settings::seeded(4)
        };
        let result = TickDriver::new(settings, Headless::default());
        assert!(matches!(
            result,
            Err(SettingsError::Invalid { field: "tick_interval_ms", .. })
        ));
    }

    #[test]
    fn test_autopilot_tracks_ball() {
        let mut session = GameSession::new(Settings::seeded(4)).unwrap();
        let pilot = Autopilot::default();
        assert_eq!(pilot.next_key(&session), Some(Key::Enter));

        session.start_game();
        session.ball = Some(Ball::new(Vec2::new(100.0, 500.0), 10.0, Vec2::new(-5.0, 5.0)));
        assert_eq!(pilot.next_key(&session), Some(Key::Left));
        session.ball = Some(Ball::new(Vec2::new(900.0, 500.0), 10.0, Vec2::new(5.0, 5.0)));
        assert_eq!(pilot.next_key(&session), Some(Key::Right));
        session.ball = Some(Ball::new(Vec2::new(500.0, 500.0), 10.0, Vec2::new(0.0, 5.0)));
        assert_eq!(pilot.next_key(&session), None);
    }
}
