//! Draw items for 2D primitives

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Shape, ShapeKind};

/// RGBA color, components in 0-1
pub type Color = [f32; 4];

pub const BACKGROUND_COLOR: Color = [1.0, 1.0, 1.0, 1.0];
pub const EDGE_COLOR: Color = [0.0, 0.0, 0.0, 1.0];
pub const BRICK_COLOR: Color = [1.0, 1.0, 0.0, 1.0];
pub const PADDLE_COLOR: Color = [0.0, 0.0, 1.0, 1.0];
pub const BALL_COLOR: Color = [0.12, 0.47, 0.71, 1.0];

/// One shape for the host to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawItem {
    pub kind: ShapeKind,
    /// Bottom-left corner (rect) or center (circle)
    pub position: Vec2,
    /// Width/height (rect) or (radius, radius) (circle)
    pub size: Vec2,
    pub fill: Color,
    /// Outline color, if any
    pub edge: Option<Color>,
    pub visible: bool,
}

impl DrawItem {
    /// Describe any entity with the given fill
    pub fn of(shape: &impl Shape, fill: Color) -> Self {
        Self {
            kind: shape.kind(),
            position: shape.position(),
            size: shape.size(),
            fill,
            edge: None,
            visible: shape.visible(),
        }
    }

    /// White arena background with a black edge
    pub fn background(width: f32, height: f32) -> Self {
        Self {
            kind: ShapeKind::Rect,
            position: Vec2::ZERO,
            size: Vec2::new(width, height),
            fill: BACKGROUND_COLOR,
            edge: Some(EDGE_COLOR),
            visible: true,
        }
    }

    /// Circle radius, or None for rectangles
    pub fn radius(&self) -> Option<f32> {
        match self.kind {
            ShapeKind::Circle => Some(self.size.x),
            ShapeKind::Rect => None,
        }
    }
}
