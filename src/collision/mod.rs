pub mod aabb;
pub mod boundary;
pub mod detection;
pub mod response;

// Re-export key types
pub use aabb::AABB;
pub use boundary::{resolve_boundaries, BoundaryContact, Wall};
pub use detection::collides;
pub use response::resolve_collision;
