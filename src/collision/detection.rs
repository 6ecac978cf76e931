use crate::objects::body::Body;

/// Checks whether two bodies' rectangles intersect.
/// Touching edges count as a collision.
pub fn collides(body_a: &Body, body_b: &Body) -> bool {
    body_a.bounds().overlaps(body_b.bounds())
}
