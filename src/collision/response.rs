use crate::error::PhysicsError;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;

/// Exchanges momentum between two colliding bodies and returns the impulse
/// applied to `body_b` (`body_a` receives its negation).
///
/// The push axis is the center-to-center displacement, not a contact normal,
/// and the un-normalized displacement feeds the impulse magnitude:
///
/// ```text
/// j = -(1 + e) * (v_b - v_a) . (c_b - c_a) / (1/m_a + 1/m_b)
/// J = j * normalize(c_b - c_a)
/// ```
///
/// Callers should only invoke this when [`super::collides`] reports an
/// overlap. Returns [`PhysicsError::DegenerateNormal`] without touching either
/// body when the centers coincide.
pub fn resolve_collision(
    body_a: &mut Body,
    body_b: &mut Body,
    restitution: f64,
) -> Result<Vec2, PhysicsError> {
    let center_delta = body_b.center() - body_a.center();
    let normal = center_delta
        .try_normalize()
        .ok_or(PhysicsError::DegenerateNormal)?;

    let relative_velocity = body_b.velocity - body_a.velocity;
    let impulse_magnitude = -(1.0 + restitution) * relative_velocity.dot(center_delta)
        / (body_a.inv_mass() + body_b.inv_mass());
    let impulse = impulse_magnitude * normal;

    body_a.velocity -= impulse * body_a.inv_mass();
    body_b.velocity += impulse * body_b.inv_mass();

    log::trace!(
        "impulse {:?} (j={:.3}): v_a={:?} v_b={:?}",
        impulse,
        impulse_magnitude,
        body_a.velocity,
        body_b.velocity
    );
    Ok(impulse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Color;
    const EPSILON: f64 = 1e-9;

    fn box_at(x: f64, y: f64, mass: f64, velocity: Vec2) -> Body {
        Body::new(Vec2::new(x, y), 50.0, 50.0, Color::RED, mass)
            .unwrap()
            .with_velocity(velocity)
            .unwrap()
    }

    #[test]
    fn test_head_on_equal_mass() {
        // Centers 40 apart along x
        let mut a = box_at(0.0, 0.0, 1.0, Vec2::new(1.0, 0.0));
        let mut b = box_at(40.0, 0.0, 1.0, Vec2::new(-1.0, 0.0));

        let impulse = resolve_collision(&mut a, &mut b, 0.6).unwrap();

        // rel = (-2, 0), delta = (40, 0): j = -1.6 * -80 / 2 = 64
        assert!((impulse.x - 64.0).abs() < EPSILON);
        assert!(impulse.y.abs() < EPSILON);
        assert!((a.velocity.x - -63.0).abs() < EPSILON);
        assert!((b.velocity.x - 63.0).abs() < EPSILON);
    }

    #[test]
    fn test_equal_mass_changes_are_opposite() {
        let mut a = box_at(0.0, 0.0, 1.0, Vec2::new(0.5, 1.0));
        let mut b = box_at(30.0, 20.0, 1.0, Vec2::new(-0.2, 0.3));
        let (va, vb) = (a.velocity, b.velocity);

        resolve_collision(&mut a, &mut b, 0.6).unwrap();

        let dva = a.velocity - va;
        let dvb = b.velocity - vb;
        assert!((dva + dvb).magnitude() < EPSILON);
        // Both changes lie on the center-to-center axis
        let axis = (b.center() - a.center()).normalize();
        assert!((dva.x * axis.y - dva.y * axis.x).abs() < EPSILON);
    }

    #[test]
    fn test_momentum_conserved_unequal_mass() {
        let mut a = box_at(0.0, 0.0, 1.0, Vec2::new(2.0, 0.5));
        let mut b = box_at(25.0, 10.0, 3.0, Vec2::new(-1.0, 0.0));
        let before = a.momentum() + b.momentum();

        resolve_collision(&mut a, &mut b, 0.6).unwrap();

        let after = a.momentum() + b.momentum();
        assert!((after - before).magnitude() < EPSILON);
    }

    #[test]
    fn test_coincident_centers_rejected() {
        let mut a = box_at(10.0, 10.0, 1.0, Vec2::new(1.0, 0.0));
        let mut b = box_at(10.0, 10.0, 1.0, Vec2::new(-1.0, 0.0));
        let (a0, b0) = (a.clone(), b.clone());

        let result = resolve_collision(&mut a, &mut b, 0.6);
        assert_eq!(result, Err(PhysicsError::DegenerateNormal));
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn test_separating_bodies_are_not_exempt() {
        // There is no approach check: the relative velocity along the axis is
        // reversed and amplified whichever way the bodies were moving.
        let mut a = box_at(0.0, 0.0, 1.0, Vec2::new(-1.0, 0.0));
        let mut b = box_at(40.0, 0.0, 1.0, Vec2::new(1.0, 0.0));

        let impulse = resolve_collision(&mut a, &mut b, 0.6).unwrap();
        assert!((impulse.x - -64.0).abs() < EPSILON);
        assert!((a.velocity.x - 63.0).abs() < EPSILON);
        assert!((b.velocity.x - -63.0).abs() < EPSILON);
    }
}
