//! Geometry primitives for bricks, paddle and ball
//!
//! The arena uses y-up coordinates with the origin at the bottom-left corner:
//! - `Rect`: axis-aligned box anchored at its bottom-left corner
//! - `Circle`: center + radius
//!
//! Entities compose one of these and expose it through the `Shape` trait.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which primitive an entity is drawn as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rect,
    Circle,
}

/// Capability shared by every entity on the board
pub trait Shape {
    fn kind(&self) -> ShapeKind;
    /// Bottom-left corner for rectangles, center for circles
    fn position(&self) -> Vec2;
    /// Width/height for rectangles, (radius, radius) for circles
    fn size(&self) -> Vec2;
    fn visible(&self) -> bool;
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Bottom-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub visible: bool,
}

impl Rect {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            pos,
            width,
            height,
            visible: true,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn set_x(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.height
    }
}

impl Shape for Rect {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rect
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    fn visible(&self) -> bool {
        self.visible
    }
}

/// A circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub visible: bool,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            visible: true,
        }
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Lowest y touched by the circle
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y - self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.radius
    }
}

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn position(&self) -> Vec2 {
        self.center
    }

    fn size(&self) -> Vec2 {
        Vec2::splat(self.radius)
    }

    fn visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(Vec2::new(100.0, 100.0), 80.0, 40.0);
        assert_eq!(rect.right(), 180.0);
        assert_eq!(rect.top(), 140.0);
        assert_eq!(rect.size(), Vec2::new(80.0, 40.0));
        assert!(rect.visible());
    }

    #[test]
    fn test_circle_extent() {
        let mut circle = Circle::new(Vec2::new(50.0, 60.0), 10.0);
        assert_eq!(circle.left(), 40.0);
        assert_eq!(circle.bottom(), 50.0);
        circle.set_visible(false);
        assert!(!circle.visible());
        assert_eq!(circle.kind(), ShapeKind::Circle);
    }
}
