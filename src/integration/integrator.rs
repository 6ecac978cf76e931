use crate::math::vec2::Vec2;
use crate::objects::body::Body;

/// Advances a body by one fixed tick using Semi-Implicit Euler.
///
/// There is no `dt`: `gravity` is the velocity gained per tick and the
/// velocity is the displacement per tick, so the result depends on the tick
/// rate the caller runs at (see [`crate::world::FIXED_TICK_RATE_HZ`]).
pub fn integrate(body: &mut Body, gravity: Vec2) {
    // v = v + g
    body.velocity += gravity;
    // p = p + v, using the velocity just updated
    let velocity = body.velocity;
    body.bounds_mut().translate(velocity);
}
