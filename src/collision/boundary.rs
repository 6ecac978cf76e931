//! Static arena limits: a floor below and a wall on each side.
//!
//! Resolution clamps the offending edge onto the limit and forces the matching
//! velocity component to point away from it, damped by the restitution. The
//! sign of the incoming velocity is ignored, so a body can never stay lodged
//! inside a limit.

use crate::objects::body::Body;
use crate::world::config::WorldConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
}

/// Which limits a body was pushed back from during one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryContact {
    pub floor: bool,
    pub wall: Option<Wall>,
}

impl BoundaryContact {
    pub fn any(&self) -> bool {
        self.floor || self.wall.is_some()
    }

    /// Number of surfaces touched (0, 1 or 2).
    pub fn count(&self) -> usize {
        usize::from(self.floor) + usize::from(self.wall.is_some())
    }
}

/// Clamps `body` into the arena described by `config`.
///
/// The left wall is checked before the right one and the two are exclusive:
/// a body wider than the gap between the walls only ever resolves against the
/// left wall.
pub fn resolve_boundaries(body: &mut Body, config: &WorldConfig) -> BoundaryContact {
    let restitution = config.boundary_restitution;
    let mut contact = BoundaryContact::default();

    if body.bounds().bottom() >= config.floor_y {
        body.bounds_mut().set_bottom(config.floor_y);
        body.velocity.y = -body.velocity.y.abs() * restitution;
        contact.floor = true;
    }

    if body.bounds().left() <= config.left_wall_x {
        body.bounds_mut().set_left(config.left_wall_x);
        body.velocity.x = body.velocity.x.abs() * restitution;
        contact.wall = Some(Wall::Left);
    } else if body.bounds().right() >= config.right_wall_x {
        body.bounds_mut().set_right(config.right_wall_x);
        body.velocity.x = -body.velocity.x.abs() * restitution;
        contact.wall = Some(Wall::Right);
    }

    if contact.any() {
        log::trace!(
            "boundary contact {:?}: position={:?} velocity={:?}",
            contact,
            body.position(),
            body.velocity
        );
    }
    contact
}
