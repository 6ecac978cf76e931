// Defines an Axis-Aligned Bounding Box

use crate::error::PhysicsError;
use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box anchored at its top-left corner.
///
/// Screen coordinates: y grows downward, so `bottom() >= top()`.
/// Edges and center are derived from `position` and the fixed size; moving an
/// edge with one of the `set_*` methods translates the box without resizing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub position: Vec2,
    width: f64,
    height: f64,
}

impl AABB {
    /// Creates a new AABB. Extents must be finite and non-negative.
    pub fn new(position: Vec2, width: f64, height: f64) -> Result<Self, PhysicsError> {
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(PhysicsError::InvalidSize { width, height });
        }
        if !position.is_finite() {
            return Err(PhysicsError::InvalidPosition {
                x: position.x,
                y: position.y,
            });
        }
        Ok(AABB {
            position,
            width,
            height,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn left(&self) -> f64 {
        self.position.x
    }

    pub fn right(&self) -> f64 {
        self.position.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.position.y
    }

    pub fn bottom(&self) -> f64 {
        self.position.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size() * 0.5
    }

    pub fn set_left(&mut self, x: f64) {
        self.position.x = x;
    }

    pub fn set_right(&mut self, x: f64) {
        self.position.x = x - self.width;
    }

    pub fn set_bottom(&mut self, y: f64) {
        self.position.y = y - self.height;
    }

    /// Moves the box by `delta` in place.
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Checks if this AABB overlaps with another AABB.
    /// Boxes that only share an edge or corner count as overlapping.
    pub fn overlaps(&self, other: &AABB) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.bottom() < other.top()
            || self.top() > other.bottom())
    }
}
