use crate::{
    collision::{self, resolve_boundaries},
    error::PhysicsError,
    integration::integrator,
    objects::body::Body,
    world::{config::WorldConfig, snapshot::BodyState},
};

/// Counters for one or more ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Tick count after the last step covered by this report.
    pub tick: u64,
    /// Floor/wall surfaces bodies were pushed back from.
    pub boundary_contacts: usize,
    /// Body pairs that received an impulse.
    pub collisions: usize,
    /// Overlapping pairs left alone because their centers coincided.
    pub skipped_collisions: usize,
}

impl StepReport {
    fn merge(&mut self, other: StepReport) {
        self.tick = other.tick;
        self.boundary_contacts += other.boundary_contacts;
        self.collisions += other.collisions;
        self.skipped_collisions += other.skipped_collisions;
    }
}

/// Owns the world configuration and every body in it.
///
/// All mutation goes through [`SimulationContext::step`] on the caller's
/// thread; the presentation side reads [`SimulationContext::snapshot`].
#[derive(Debug, Clone)]
pub struct SimulationContext {
    config: WorldConfig,
    bodies: Vec<Body>,
    tick: u64,
}

impl SimulationContext {
    /// Creates an empty world after validating `config`.
    pub fn new(config: WorldConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self {
            config,
            bodies: Vec::new(),
            tick: 0,
        })
    }

    /// Adds a body to the world and returns its index.
    /// Indices stay valid for the life of the context; bodies are never removed.
    ///
    /// `velocity` is a public field, so it is checked again here.
    pub fn add_body(&mut self, body: Body) -> Result<usize, PhysicsError> {
        if !body.velocity.is_finite() {
            return Err(PhysicsError::InvalidVelocity {
                x: body.velocity.x,
                y: body.velocity.y,
            });
        }
        let index = self.bodies.len();
        self.bodies.push(body);
        Ok(index)
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Result<&Body, PhysicsError> {
        self.bodies
            .get(index)
            .ok_or(PhysicsError::UnknownBody { index })
    }

    /// Number of completed steps.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advances the simulation by one fixed tick.
    ///
    /// Each body is integrated and clamped to the arena, then every unique
    /// pair is tested and, if overlapping, resolved once.
    ///
    /// A step that fails leaves the bodies and the tick count exactly as they
    /// were before the call.
    pub fn step(&mut self) -> Result<StepReport, PhysicsError> {
        let previous = self.bodies.clone();
        let result = self.advance();
        if result.is_err() {
            self.bodies = previous;
        }
        result
    }

    fn advance(&mut self) -> Result<StepReport, PhysicsError> {
        let mut report = StepReport::default();

        // 1. Integrate motion and enforce the arena limits
        for body in self.bodies.iter_mut() {
            integrator::integrate(body, self.config.gravity);
            report.boundary_contacts += resolve_boundaries(body, &self.config).count();
        }

        // 2. Pairwise collisions
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                // Get mutable references using split_at_mut to satisfy the borrow checker
                let (head, tail) = self.bodies.split_at_mut(j);
                let body_a = &mut head[i];
                let body_b = &mut tail[0];

                if !collision::collides(body_a, body_b) {
                    continue;
                }
                match collision::resolve_collision(
                    body_a,
                    body_b,
                    self.config.collision_restitution,
                ) {
                    Ok(_) => report.collisions += 1,
                    Err(PhysicsError::DegenerateNormal) => {
                        log::warn!(
                            "tick {}: bodies {} and {} share a center; skipping collision",
                            self.tick + 1,
                            i,
                            j
                        );
                        report.skipped_collisions += 1;
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        // 3. Reject the tick if anything blew up; `step` rolls the bodies back
        if let Some(body) = self.bodies.iter().position(|b| !b.is_finite()) {
            log::error!("tick {}: body {} became non-finite", self.tick + 1, body);
            return Err(PhysicsError::NonFiniteState { body });
        }

        self.tick += 1;
        report.tick = self.tick;
        log::debug!("{:?}", report);
        Ok(report)
    }

    /// Runs `ticks` steps and returns the summed report.
    pub fn run(&mut self, ticks: u64) -> Result<StepReport, PhysicsError> {
        let mut total = StepReport {
            tick: self.tick,
            ..StepReport::default()
        };
        for _ in 0..ticks {
            total.merge(self.step()?);
        }
        Ok(total)
    }

    /// Copies the current state of every body, in index order.
    pub fn snapshot(&self) -> Vec<BodyState> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(index, body)| BodyState::capture(index, body))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Color;
    use crate::math::vec2::Vec2;
    const EPSILON: f64 = 1e-9;

    fn box_at(x: f64, y: f64) -> Body {
        Body::new(Vec2::new(x, y), 50.0, 50.0, Color::RED, 1.0).unwrap()
    }

    #[test]
    fn test_context_new() {
        let ctx = SimulationContext::new(WorldConfig::default()).unwrap();
        assert!(ctx.bodies().is_empty());
        assert_eq!(ctx.tick(), 0);
        assert_eq!(ctx.config(), &WorldConfig::default());
    }

    #[test]
    fn test_context_rejects_invalid_config() {
        let config = WorldConfig {
            right_wall_x: 0.0,
            ..WorldConfig::default()
        };
        assert!(SimulationContext::new(config).is_err());
    }

    #[test]
    fn test_add_body() {
        let mut ctx = SimulationContext::new(WorldConfig::default()).unwrap();
        assert_eq!(ctx.add_body(box_at(100.0, 50.0)), Ok(0));
        assert_eq!(ctx.add_body(box_at(300.0, 50.0)), Ok(1));
        assert_eq!(ctx.bodies().len(), 2);
        assert!(ctx.body(1).is_ok());
        assert_eq!(
            ctx.body(2).unwrap_err(),
            PhysicsError::UnknownBody { index: 2 }
        );
    }

    #[test]
    fn test_add_body_rejects_non_finite_velocity() {
        let mut ctx = SimulationContext::new(WorldConfig::default()).unwrap();
        let mut body = box_at(100.0, 50.0);
        body.velocity.x = f64::NAN;

        assert!(matches!(
            ctx.add_body(body),
            Err(PhysicsError::InvalidVelocity { .. })
        ));
        assert!(ctx.bodies().is_empty());
    }

    #[test]
    fn test_step_gravity() {
        let mut ctx = SimulationContext::new(WorldConfig::default()).unwrap();
        let idx = ctx.add_body(box_at(100.0, 50.0)).unwrap();

        let report = ctx.step().unwrap();
        assert_eq!(report.tick, 1);
        assert_eq!(report.collisions, 0);
        let body = ctx.body(idx).unwrap();
        assert!((body.velocity.y - 0.1).abs() < EPSILON);
        assert!((body.bounds().top() - 50.1).abs() < EPSILON);
    }

    #[test]
    fn test_step_resolves_overlap_once() {
        let config = WorldConfig {
            gravity: Vec2::ZERO,
            ..WorldConfig::default()
        };
        let mut ctx = SimulationContext::new(config).unwrap();
        let a = ctx
            .add_body(box_at(100.0, 100.0).with_velocity(Vec2::new(1.0, 0.0)).unwrap())
            .unwrap();
        let b = ctx
            .add_body(box_at(139.0, 100.0).with_velocity(Vec2::new(-1.0, 0.0)).unwrap())
            .unwrap();

        let report = ctx.step().unwrap();
        assert_eq!(report.collisions, 1);

        // After integration centers are 37 apart: j = -1.6 * (-2 * 37) / 2 = 59.2
        let va = ctx.body(a).unwrap().velocity;
        let vb = ctx.body(b).unwrap().velocity;
        assert!((va.x - (1.0 - 59.2)).abs() < EPSILON);
        assert!((vb.x - (-1.0 + 59.2)).abs() < EPSILON);
    }

    #[test]
    fn test_step_skips_coincident_bodies() {
        let config = WorldConfig {
            gravity: Vec2::ZERO,
            ..WorldConfig::default()
        };
        let mut ctx = SimulationContext::new(config).unwrap();
        ctx.add_body(box_at(200.0, 100.0)).unwrap();
        ctx.add_body(box_at(200.0, 100.0)).unwrap();

        let report = ctx.step().unwrap();
        assert_eq!(report.collisions, 0);
        assert_eq!(report.skipped_collisions, 1);
        assert!(ctx.bodies().iter().all(|b| b.velocity == Vec2::ZERO));
    }

    #[test]
    fn test_step_detects_non_finite_state() {
        let mut ctx = SimulationContext::new(WorldConfig::default()).unwrap();
        ctx.add_body(box_at(100.0, 50.0)).unwrap();
        // Finite at creation, but the next position overflows to -inf
        let runaway = Body::new(Vec2::new(300.0, -1e308), 50.0, 50.0, Color::GREEN, 1.0)
            .unwrap()
            .with_velocity(Vec2::new(0.0, -1e308))
            .unwrap();
        ctx.add_body(runaway).unwrap();

        assert_eq!(
            ctx.step().unwrap_err(),
            PhysicsError::NonFiniteState { body: 1 }
        );
    }

    #[test]
    fn test_failed_step_rolls_back() {
        let mut ctx = SimulationContext::new(WorldConfig::default()).unwrap();
        ctx.add_body(box_at(100.0, 50.0)).unwrap();
        ctx.add_body(box_at(300.0, 50.0)).unwrap();
        ctx.step().unwrap();
        // Send body 1 far up at a speed whose next position overflows
        ctx.bodies[1].set_position(Vec2::new(300.0, -1e308)).unwrap();
        ctx.bodies[1].velocity = Vec2::new(0.0, -1e308);
        let before = ctx.snapshot();

        assert!(ctx.step().is_err());
        assert_eq!(ctx.tick(), 1);
        let after = ctx.snapshot();
        assert_eq!(after, before);
        for state in &after {
            assert!(state.velocity.is_finite());
            assert!(state.bounds.position.is_finite());
        }
        // Body 0 was integrated during the failed tick and must be restored too
        assert!((after[0].velocity.y - 0.1).abs() < EPSILON);
    }

    #[test]
    fn test_run_accumulates_reports() {
        let mut ctx = SimulationContext::new(WorldConfig::default()).unwrap();
        ctx.add_body(box_at(200.0, 298.0)).unwrap();

        let report = ctx.run(10).unwrap();
        assert_eq!(report.tick, 10);
        assert_eq!(ctx.tick(), 10);
        // Starts 2 units above the floor and reaches it on tick 6
        assert!(report.boundary_contacts >= 1);
    }

    #[test]
    fn test_snapshot_matches_bodies() {
        let mut ctx = SimulationContext::new(WorldConfig::default()).unwrap();
        ctx.add_body(box_at(100.0, 50.0)).unwrap();
        ctx.add_body(box_at(300.0, 50.0)).unwrap();
        ctx.step().unwrap();

        let snapshot = ctx.snapshot();
        assert_eq!(snapshot.len(), 2);
        for (state, body) in snapshot.iter().zip(ctx.bodies()) {
            assert_eq!(&state.bounds, body.bounds());
            assert_eq!(state.velocity, body.velocity);
        }
        assert_eq!(snapshot[1].index, 1);
    }
}
