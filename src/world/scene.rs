//! Declarative description of a world and the bodies it starts with.
//!
//! A scene is plain data (it (de)serializes with serde) and only becomes a
//! [`SimulationContext`] through [`SceneConfig::build`], which is where every
//! body and the world configuration get validated.

use serde::{Deserialize, Serialize};

use crate::common::Color;
use crate::error::PhysicsError;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::world::config::WorldConfig;
use crate::world::simulation::SimulationContext;

/// Initial state of one body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    /// Top-left corner.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    pub mass: f64,
    #[serde(default)]
    pub velocity: Vec2,
}

impl BodySpec {
    pub fn build(&self) -> Result<Body, PhysicsError> {
        Body::new(
            Vec2::new(self.x, self.y),
            self.width,
            self.height,
            self.color,
            self.mass,
        )?
        .with_velocity(self.velocity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub world: WorldConfig,
    pub bodies: Vec<BodySpec>,
}

impl Default for SceneConfig {
    /// Two 50x50 boxes of mass 1 dropped side by side into the default arena.
    fn default() -> Self {
        let square = |x: f64, color: Color| BodySpec {
            x,
            y: 50.0,
            width: 50.0,
            height: 50.0,
            color,
            mass: 1.0,
            velocity: Vec2::ZERO,
        };
        SceneConfig {
            world: WorldConfig::default(),
            bodies: vec![square(50.0, Color::RED), square(200.0, Color::GREEN)],
        }
    }
}

impl SceneConfig {
    /// Validates the scene and builds a simulation ready to step.
    pub fn build(&self) -> Result<SimulationContext, PhysicsError> {
        let mut ctx = SimulationContext::new(self.world)?;
        for spec in &self.bodies {
            ctx.add_body(spec.build()?)?;
        }
        log::info!(
            "scene built: {} bodies, gravity {:?}, floor {}, walls {}..{}",
            self.bodies.len(),
            self.world.gravity,
            self.world.floor_y,
            self.world.left_wall_x,
            self.world.right_wall_x
        );
        Ok(ctx)
    }
}
