pub mod collision;
pub mod common;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod world;

// Re-export key types for easier use
pub use collision::AABB;
pub use common::Color;
pub use error::PhysicsError;
pub use math::vec2::Vec2;
pub use objects::body::Body;
pub use world::{BodyState, SceneConfig, SimulationContext, StepReport, WorldConfig};
