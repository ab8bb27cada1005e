use nalgebra as na;
use rapier3d::prelude::*;

use crate::pose::Pose;

/// Collider shapes used by the sandbox.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeDef {
    /// Infinite plane (half-space).
    ///
    /// The plane normal is derived from the body pose as `rotation * +Y`, so an
    /// identity pose gives a floor at the body's height.
    Plane,

    /// Oriented cuboid with given half-extents (meters).
    Cuboid { half_extents: na::Vector3<f32> },

    /// Sphere/ball (meters).
    Sphere { radius: f32 },
}

/// Whether a body is moved by the solver or pinned in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    Fixed,
    Dynamic,
}

/// Everything needed to insert one body (and its single collider) into the world.
#[derive(Clone, Debug)]
pub struct BodyDef {
    pub kind: BodyKind,
    pub shape: ShapeDef,
    pub pose: Pose,
    /// Total mass in kilograms. Ignored for fixed bodies.
    pub mass: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub angular_velocity: na::Vector3<f32>,
    /// Overrides the collider friction. The smaller coefficient wins in a contact.
    pub friction: Option<f32>,
}

impl BodyDef {
    pub fn fixed(shape: ShapeDef, pose: Pose) -> Self {
        Self {
            kind: BodyKind::Fixed,
            shape,
            pose,
            mass: 0.0,
            linear_damping: 0.0,
            angular_damping: 0.0,
            angular_velocity: na::Vector3::zeros(),
            friction: None,
        }
    }

    pub fn dynamic(shape: ShapeDef, pose: Pose, mass: f32) -> Self {
        Self {
            kind: BodyKind::Dynamic,
            mass,
            ..Self::fixed(shape, pose)
        }
    }

    pub fn with_linear_damping(mut self, damping: f32) -> Self {
        self.linear_damping = damping;
        self
    }

    pub fn with_angular_damping(mut self, damping: f32) -> Self {
        self.angular_damping = damping;
        self
    }

    pub fn with_angular_velocity(mut self, angvel: na::Vector3<f32>) -> Self {
        self.angular_velocity = angvel;
        self
    }

    pub fn with_friction(mut self, friction: Option<f32>) -> Self {
        self.friction = friction;
        self
    }
}

/// Build the rigid body described by `def`.
pub fn rigid_body_from_def(def: &BodyDef) -> RigidBody {
    let builder = match def.kind {
        BodyKind::Fixed => RigidBodyBuilder::fixed(),
        BodyKind::Dynamic => RigidBodyBuilder::dynamic()
            .linear_damping(def.linear_damping)
            .angular_damping(def.angular_damping)
            .angvel(def.angular_velocity),
    };

    builder
        .translation(def.pose.translation)
        .rotation(def.pose.rotation.scaled_axis())
        .build()
}

/// Build a Rapier collider from a `BodyDef`.
///
/// This uses the pose stored on the rigid-body as the collider parent transform,
/// so the collider is created with identity local transform.
pub fn collider_from_def(def: &BodyDef) -> Collider {
    let builder = match &def.shape {
        // The half-space is expressed in the parent's local frame, so the body's
        // rotation turns +Y into the world-space normal.
        ShapeDef::Plane => ColliderBuilder::halfspace(Vector::y_axis()),

        ShapeDef::Cuboid { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
        }

        ShapeDef::Sphere { radius } => ColliderBuilder::ball(*radius),
    };

    let builder = match def.kind {
        BodyKind::Dynamic => builder.mass(def.mass),
        BodyKind::Fixed => builder,
    };

    match def.friction {
        Some(friction) => builder
            .friction(friction)
            .friction_combine_rule(CoefficientCombineRule::Min)
            .build(),
        None => builder.build(),
    }
}
