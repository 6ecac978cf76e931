//! Error taxonomy for the engine.
//!
//! Invalid state is meant to be rejected when bodies and worlds are built, so
//! the per-tick update only ever sees `DegenerateNormal` (recoverable, the pair
//! is skipped) or `NonFiniteState` (the simulation has blown up).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// Mass must be strictly positive and finite; impulse resolution divides by it.
    #[error("invalid body mass {mass}: mass must be finite and > 0")]
    InvalidMass { mass: f64 },

    #[error("invalid body size {width}x{height}: extents must be finite and >= 0")]
    InvalidSize { width: f64, height: f64 },

    #[error("invalid body position ({x}, {y}): coordinates must be finite")]
    InvalidPosition { x: f64, y: f64 },

    #[error("invalid body velocity ({x}, {y}): components must be finite")]
    InvalidVelocity { x: f64, y: f64 },

    #[error("invalid world configuration: {0}")]
    InvalidConfig(String),

    /// The two bodies share a center, so there is no axis to push along.
    #[error("collision normal is undefined: body centers coincide")]
    DegenerateNormal,

    #[error("body {body} has a non-finite position or velocity")]
    NonFiniteState { body: usize },

    #[error("no body with index {index}")]
    UnknownBody { index: usize },
}
