use crate::collision::AABB;
use crate::common::Color;
use crate::error::PhysicsError;
use crate::math::vec2::Vec2;

/// A rectangular body. No rotation; the box stays axis-aligned for its lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    // Geometry (size is fixed at creation)
    bounds: AABB,

    // Primary state
    pub velocity: Vec2, // units per tick

    // Physical properties
    mass: f64,
    inv_mass: f64, // 1.0 / mass

    // Presentation only
    pub color: Color,
}

impl Body {
    /// Creates a body at rest with its top-left corner at `position`.
    /// Fails if the mass is not strictly positive or the size is invalid.
    pub fn new(
        position: Vec2,
        width: f64,
        height: f64,
        color: Color,
        mass: f64,
    ) -> Result<Self, PhysicsError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(PhysicsError::InvalidMass { mass });
        }
        let bounds = AABB::new(position, width, height)?;

        Ok(Self {
            bounds,
            velocity: Vec2::ZERO,
            mass,
            inv_mass: 1.0 / mass,
            color,
        })
    }

    /// Builder-style initial velocity. NaN or infinite components are rejected.
    pub fn with_velocity(mut self, velocity: Vec2) -> Result<Self, PhysicsError> {
        if !velocity.is_finite() {
            return Err(PhysicsError::InvalidVelocity {
                x: velocity.x,
                y: velocity.y,
            });
        }
        self.velocity = velocity;
        Ok(self)
    }

    /// The body's box. Read-only outside the crate so the size cannot change.
    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    pub(crate) fn bounds_mut(&mut self) -> &mut AABB {
        &mut self.bounds
    }

    /// Top-left corner.
    pub fn position(&self) -> Vec2 {
        self.bounds.position
    }

    /// Moves the top-left corner; width and height are kept.
    pub fn set_position(&mut self, position: Vec2) -> Result<(), PhysicsError> {
        if !position.is_finite() {
            return Err(PhysicsError::InvalidPosition {
                x: position.x,
                y: position.y,
            });
        }
        self.bounds.position = position;
        Ok(())
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    /// True when both position and velocity are free of NaN/Inf.
    pub fn is_finite(&self) -> bool {
        self.velocity.is_finite() && self.bounds.position.is_finite()
    }
}
