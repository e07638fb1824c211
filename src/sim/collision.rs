//! Collision predicates between the ball and the board
//!
//! All checks are axis-aligned approximations: the ball is treated as its
//! bounding box when tested against rectangles. Edges are inclusive.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shape::{Circle, Rect};

/// Which face of a brick the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitSide {
    /// Horizontal approach, reflects dx
    Side,
    /// Vertical approach, reflects dy
    TopBottom,
}

/// Ball crossed the left or right wall
#[inline]
pub fn hits_side_wall(ball: &Circle, arena_width: f32) -> bool {
    ball.left() < 0.0 || ball.right() > arena_width
}

/// Ball crossed the ceiling
#[inline]
pub fn hits_ceiling(ball: &Circle, arena_height: f32) -> bool {
    ball.top() > arena_height
}

/// Ball reached the floor
#[inline]
pub fn hits_floor(ball: &Circle) -> bool {
    ball.bottom() <= 0.0
}

/// Ball bottom inside the paddle's vertical span and horizontal extents overlapping
pub fn hits_paddle(ball: &Circle, paddle: &Rect) -> bool {
    let bottom = ball.bottom();
    if bottom < paddle.y() || bottom > paddle.top() {
        return false;
    }
    ball.right() >= paddle.x() && ball.left() <= paddle.right()
}

/// A point lies inside `rect` grown by `radius` on every side
pub fn circle_in_rect(point: Vec2, radius: f32, rect: &Rect) -> bool {
    point.x + radius >= rect.x()
        && point.x - radius <= rect.right()
        && within_vertical_span(point, radius, rect)
}

/// A point's y lies inside `rect`'s vertical span grown by `radius`
#[inline]
pub fn within_vertical_span(point: Vec2, radius: f32, rect: &Rect) -> bool {
    point.y + radius >= rect.y() && point.y - radius <= rect.top()
}

/// Classify a ball/brick contact
///
/// `velocity` is the displacement applied this tick; the ball came from
/// `center - velocity`. Returns `None` when the ball does not touch the brick.
pub fn brick_hit(ball: &Circle, velocity: Vec2, brick: &Rect) -> Option<HitSide> {
    if !circle_in_rect(ball.center, ball.radius, brick) {
        return None;
    }
    let prev_center = ball.center - velocity;
    if within_vertical_span(prev_center, ball.radius, brick) {
        Some(HitSide::Side)
    } else {
        Some(HitSide::TopBottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brick() -> Rect {
        Rect::new(Vec2::new(100.0, 100.0), 80.0, 40.0)
    }

    #[test]
    fn test_side_walls() {
        assert!(hits_side_wall(&Circle::new(Vec2::new(9.0, 500.0), 10.0), 1000.0));
        assert!(hits_side_wall(&Circle::new(Vec2::new(991.0, 500.0), 10.0), 1000.0));
        // Touching exactly is not a hit
        assert!(!hits_side_wall(&Circle::new(Vec2::new(10.0, 500.0), 10.0), 1000.0));
        assert!(!hits_side_wall(&Circle::new(Vec2::new(990.0, 500.0), 10.0), 1000.0));
    }

    #[test]
    fn test_ceiling_and_floor() {
        assert!(hits_ceiling(&Circle::new(Vec2::new(500.0, 991.0), 10.0), 1000.0));
        assert!(!hits_ceiling(&Circle::new(Vec2::new(500.0, 990.0), 10.0), 1000.0));
        // Floor is inclusive
        assert!(hits_floor(&Circle::new(Vec2::new(500.0, 10.0), 10.0)));
        assert!(!hits_floor(&Circle::new(Vec2::new(500.0, 10.5), 10.0)));
    }

    #[test]
    fn test_paddle_overlap() {
        let paddle = Rect::new(Vec2::new(455.0, 20.0), 90.0, 20.0);
        assert!(hits_paddle(&Circle::new(Vec2::new(500.0, 50.0), 10.0), &paddle));
        // Grazing the right edge
        assert!(hits_paddle(&Circle::new(Vec2::new(555.0, 45.0), 10.0), &paddle));
        // Too far right
        assert!(!hits_paddle(&Circle::new(Vec2::new(556.0, 45.0), 10.0), &paddle));
        // Bottom above the paddle
        assert!(!hits_paddle(&Circle::new(Vec2::new(500.0, 51.0), 10.0), &paddle));
    }

    #[test]
    fn test_brick_side_hit() {
        let ball = Circle::new(Vec2::new(91.0, 120.0), 10.0);
        assert_eq!(brick_hit(&ball, Vec2::new(6.0, 0.0), &brick()), Some(HitSide::Side));
    }

    #[test]
    fn test_brick_bottom_hit() {
        let ball = Circle::new(Vec2::new(140.0, 92.0), 10.0);
        assert_eq!(brick_hit(&ball, Vec2::new(0.0, 6.0), &brick()), Some(HitSide::TopBottom));
    }

    #[test]
    fn test_brick_miss() {
        let ball = Circle::new(Vec2::new(140.0, 80.0), 10.0);
        assert_eq!(brick_hit(&ball, Vec2::new(0.0, 6.0), &brick()), None);
    }
}
