//! Rapier-backed physics world advanced with a fixed time step.
//!
//! The world owns every Rapier structure needed to run the dynamics pipeline:
//! - `RigidBodySet`/`ColliderSet` holding the bodies and their colliders.
//! - `IslandManager`, `BroadPhaseBvh`, `NarrowPhase`, joint sets and the CCD solver.
//!
//! Stepping policy
//! - Every call to [`PhysicsWorld::step`] advances simulated time by exactly `dt`.
//! - There is no accumulator and no sub-stepping. If frames arrive late, simulated
//!   time and wall time drift apart.

use nalgebra as na;
use rapier3d::prelude::*;

use crate::pose::Pose;
use crate::rapier::{BodyDef, collider_from_def, rigid_body_from_def};

pub struct PhysicsWorld {
    gravity: na::Vector3<f32>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    steps: u64,
}

impl PhysicsWorld {
    pub fn new(gravity: na::Vector3<f32>, dt: f32) -> Self {
        Self {
            gravity,
            integration_parameters: IntegrationParameters {
                dt,
                ..IntegrationParameters::default()
            },
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            steps: 0,
        }
    }

    pub fn gravity(&self) -> na::Vector3<f32> {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: na::Vector3<f32>) {
        self.gravity = gravity;
    }

    /// The fixed increment applied by every [`step`](Self::step).
    pub fn dt(&self) -> f32 {
        self.integration_parameters.dt
    }

    /// Insert a body and its collider. The returned handle stays valid for the
    /// life of the world since bodies are never removed.
    pub fn insert(&mut self, def: &BodyDef) -> RigidBodyHandle {
        let handle = self.bodies.insert(rigid_body_from_def(def));
        self.colliders
            .insert_with_parent(collider_from_def(def), handle, &mut self.bodies);
        handle
    }

    /// Advance the simulation by exactly one fixed increment.
    pub fn step(&mut self) {
        // Using default hooks/events (none).
        let hooks = ();
        let events = ();

        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &hooks,
            &events,
        );
        self.steps += 1;
    }

    /// Number of steps taken since construction.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated time, always `steps * dt` regardless of wall-clock time.
    pub fn elapsed_secs(&self) -> f64 {
        self.steps as f64 * f64::from(self.dt())
    }

    /// Current pose of a body. Pure read, no side effects.
    pub fn pose(&self, handle: RigidBodyHandle) -> Option<Pose> {
        self.bodies.get(handle).map(|rb| Pose {
            translation: *rb.translation(),
            rotation: *rb.rotation(),
        })
    }

    pub fn body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TIME_STEP;
    use crate::rapier::ShapeDef;

    fn unit_box(at: na::Vector3<f32>) -> BodyDef {
        BodyDef::dynamic(
            ShapeDef::Cuboid {
                half_extents: na::Vector3::new(1.0, 1.0, 1.0),
            },
            Pose::from_translation(at),
            1.0,
        )
    }

    #[test]
    fn elapsed_time_is_step_count_times_dt() {
        let mut world = PhysicsWorld::new(na::Vector3::new(0.0, -9.81, 0.0), TIME_STEP);
        for _ in 0..90 {
            world.step();
        }

        assert_eq!(world.steps(), 90);
        assert_eq!(world.elapsed_secs(), 90.0 * f64::from(TIME_STEP));
    }

    #[test]
    fn stepping_an_empty_world_is_a_no_op() {
        let mut world = PhysicsWorld::new(na::Vector3::new(0.0, -9.81, 0.0), TIME_STEP);
        world.step();
        world.step();

        assert_eq!(world.body_count(), 0);
        assert_eq!(world.steps(), 2);
    }

    #[test]
    fn gravity_pulls_dynamic_bodies_down() {
        let mut world = PhysicsWorld::new(na::Vector3::new(0.0, -9.81, 0.0), TIME_STEP);
        let handle = world.insert(&unit_box(na::Vector3::new(0.0, 10.0, 0.0)));

        for _ in 0..10 {
            world.step();
        }

        let pose = world.pose(handle).unwrap();
        assert!(pose.translation.y < 10.0);
    }

    #[test]
    fn fixed_bodies_do_not_move() {
        let mut world = PhysicsWorld::new(na::Vector3::new(0.0, -9.81, 0.0), TIME_STEP);
        let handle = world.insert(&BodyDef::fixed(ShapeDef::Plane, Pose::identity()));

        for _ in 0..30 {
            world.step();
        }

        let pose = world.pose(handle).unwrap();
        assert!(pose.translation.norm() < 1.0e-6);
        assert!(pose.rotation.angle() < 1.0e-6);
    }

    #[test]
    fn set_gravity_replaces_the_vector() {
        let mut world = PhysicsWorld::new(na::Vector3::new(0.0, -9.81, 0.0), TIME_STEP);
        world.set_gravity(na::Vector3::zeros());
        assert_eq!(world.gravity(), na::Vector3::zeros());
    }
}
