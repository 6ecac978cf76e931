use std::fmt;

use crate::collision::AABB;
use crate::common::Color;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;

/// Vertical gap between a body's top-left corner and its velocity readout.
const LABEL_OFFSET_Y: f64 = 30.0;

/// Read-only copy of one body, taken after a step, for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub index: usize,
    pub bounds: AABB,
    pub velocity: Vec2,
    pub mass: f64,
    pub color: Color,
}

impl BodyState {
    pub fn capture(index: usize, body: &Body) -> Self {
        BodyState {
            index,
            bounds: *body.bounds(),
            velocity: body.velocity,
            mass: body.mass(),
            color: body.color,
        }
    }

    /// Velocity readout, one decimal per axis: `Velocity: (0.3, -1.2)`.
    pub fn velocity_label(&self) -> String {
        format!("Velocity: {:.1}", self.velocity)
    }

    /// Where the readout is drawn: just above the body's top-left corner.
    pub fn label_anchor(&self) -> Vec2 {
        Vec2::new(self.bounds.left(), self.bounds.top() - LABEL_OFFSET_Y)
    }
}

impl fmt::Display for BodyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "body {} at {:.1}: {}",
            self.index,
            self.bounds.position,
            self.velocity_label()
        )
    }
}
