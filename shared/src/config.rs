//! Runtime scene configuration.
//!
//! Defaults come from [`crate::constants`]. There is no file or environment layer:
//! hosts build a [`SceneConfig`] in code and hand it to [`crate::Sandbox::new`].

use nalgebra as na;

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub eye: na::Point3<f32>,
    pub target: na::Point3<f32>,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Aspect ratio used until the first valid resize arrives.
    pub aspect: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: na::Point3::from(CAMERA_EYE),
            target: na::Point3::origin(),
            fov_y_deg: CAMERA_FOV_Y_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            aspect: DEFAULT_ASPECT,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroundConfig {
    /// World-space position of the ground plane.
    pub translation: na::Vector3<f32>,
    /// Edge length of the rendered ground square.
    pub size: f32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            translation: na::Vector3::zeros(),
            size: GROUND_SIZE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SphereConfig {
    pub radius: f32,
    pub mass: f32,
    pub start: na::Point3<f32>,
    pub linear_damping: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: SPHERE_RADIUS,
            mass: SPHERE_MASS,
            start: na::Point3::new(0.0, SPHERE_START_HEIGHT, 0.0),
            linear_damping: SPHERE_LINEAR_DAMPING,
        }
    }
}

/// Parameters for boxes spawned by clicks.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnConfig {
    pub half_extents: na::Vector3<f32>,
    pub mass: f32,
    pub angular_velocity: na::Vector3<f32>,
    pub angular_damping: f32,
    /// Friction override; `Some(SLIPPERY_FRICTION)` makes boxes slide on the ground.
    pub friction: Option<f32>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            half_extents: na::Vector3::repeat(BOX_HALF_EXTENT),
            mass: BOX_MASS,
            angular_velocity: na::Vector3::new(0.0, BOX_SPIN_RAD_PER_S, 0.0),
            angular_damping: BOX_ANGULAR_DAMPING,
            friction: None,
        }
    }
}

impl SpawnConfig {
    pub fn slippery(mut self) -> Self {
        self.friction = Some(SLIPPERY_FRICTION);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub gravity: na::Vector3<f32>,
    pub time_step: f32,
    pub camera: CameraConfig,
    pub ground: GroundConfig,
    /// Optional falling sphere created at startup.
    pub sphere: Option<SphereConfig>,
    pub spawn: SpawnConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            gravity: na::Vector3::new(0.0, -GRAVITY_MPS2, 0.0),
            time_step: TIME_STEP,
            camera: CameraConfig::default(),
            ground: GroundConfig::default(),
            sphere: None,
            spawn: SpawnConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Default scene plus the falling demo sphere.
    pub fn demo() -> Self {
        Self {
            sphere: Some(SphereConfig::default()),
            ..Self::default()
        }
    }

    /// Reject values the physics or projection code cannot work with.
    ///
    /// Camera parameters are checked when the [`crate::CameraRig`] is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ConfigError::NonPositiveTimeStep(self.time_step));
        }

        if !(self.ground.size > 0.0) {
            return Err(ConfigError::NonPositiveExtent(self.ground.size));
        }

        if !(self.spawn.mass > 0.0) {
            return Err(ConfigError::NonPositiveMass(self.spawn.mass));
        }
        let min_extent = self.spawn.half_extents.min();
        if !(min_extent > 0.0) {
            return Err(ConfigError::NonPositiveExtent(min_extent));
        }

        if let Some(sphere) = &self.sphere {
            if !(sphere.mass > 0.0) {
                return Err(ConfigError::NonPositiveMass(sphere.mass));
            }
            if !(sphere.radius > 0.0) {
                return Err(ConfigError::NonPositiveExtent(sphere.radius));
            }
        }

        Ok(())
    }
}
