//! World constants shared by every body for the lifetime of a simulation.

use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;
use crate::math::vec2::Vec2;

/// Tick rate the default constants are tuned for.
///
/// Gravity is a velocity increment per tick and velocity is a displacement per
/// tick; nothing is scaled by elapsed time. Running the same scene at another
/// rate changes how fast it plays out, not just how smoothly.
pub const FIXED_TICK_RATE_HZ: u32 = 60;

/// Immutable world configuration. Coordinates are screen-style (y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Velocity added to every body each tick (not an acceleration).
    pub gravity: Vec2,
    pub floor_y: f64,
    pub left_wall_x: f64,
    pub right_wall_x: f64,
    /// Damping applied when a body bounces off the floor or a wall.
    pub boundary_restitution: f64,
    /// Restitution used in body-body impulses.
    pub collision_restitution: f64,
    // Arena size only bounds what gets drawn; physics never reads it.
    pub arena_width: f64,
    pub arena_height: f64,
    /// Frame pacing for the caller. Does not scale the physics.
    pub tick_rate_hz: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            gravity: Vec2::new(0.0, 0.1),
            floor_y: 350.0,
            left_wall_x: 50.0,
            right_wall_x: 550.0,
            boundary_restitution: 0.6,
            collision_restitution: 0.6,
            arena_width: 600.0,
            arena_height: 400.0,
            tick_rate_hz: FIXED_TICK_RATE_HZ,
        }
    }
}

impl WorldConfig {
    /// Checks the configuration once, up front, so the per-tick update never
    /// has to.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let invalid = |msg: String| Err(PhysicsError::InvalidConfig(msg));

        if !self.gravity.is_finite() {
            return invalid(format!("gravity {:?} is not finite", self.gravity));
        }
        for (name, value) in [
            ("floor_y", self.floor_y),
            ("left_wall_x", self.left_wall_x),
            ("right_wall_x", self.right_wall_x),
        ] {
            if !value.is_finite() {
                return invalid(format!("{} = {} is not finite", name, value));
            }
        }
        if self.left_wall_x >= self.right_wall_x {
            return invalid(format!(
                "left wall ({}) must be left of right wall ({})",
                self.left_wall_x, self.right_wall_x
            ));
        }
        for (name, value) in [
            ("boundary_restitution", self.boundary_restitution),
            ("collision_restitution", self.collision_restitution),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return invalid(format!("{} = {} is outside [0, 1]", name, value));
            }
        }
        if !(self.arena_width > 0.0 && self.arena_height > 0.0)
            || !self.arena_width.is_finite()
            || !self.arena_height.is_finite()
        {
            return invalid(format!(
                "arena {}x{} must have positive finite size",
                self.arena_width, self.arena_height
            ));
        }
        if self.tick_rate_hz == 0 {
            return invalid("tick_rate_hz must be at least 1".to_string());
        }
        Ok(())
    }

    /// Wall-clock length of one tick at the configured rate.
    pub fn tick_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.tick_rate_hz.max(1)))
    }
}
