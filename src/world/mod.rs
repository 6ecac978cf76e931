pub mod config;
pub mod scene;
pub mod simulation;
pub mod snapshot;

// Re-export key types
pub use config::{WorldConfig, FIXED_TICK_RATE_HZ};
pub use scene::{BodySpec, SceneConfig};
pub use simulation::{SimulationContext, StepReport};
pub use snapshot::BodyState;
