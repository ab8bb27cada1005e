use nalgebra as na;

/// Position and orientation of a body. The physics body owns it; meshes receive copies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub translation: na::Vector3<f32>,
    pub rotation: na::UnitQuaternion<f32>,
}

impl Pose {
    pub fn identity() -> Self {
        Self::from_translation(na::Vector3::zeros())
    }

    pub fn from_translation(translation: na::Vector3<f32>) -> Self {
        Self {
            translation,
            rotation: na::UnitQuaternion::identity(),
        }
    }

    pub fn from_point(point: &na::Point3<f32>) -> Self {
        Self::from_translation(point.coords)
    }

    pub fn isometry(&self) -> na::Isometry3<f32> {
        na::Isometry3::from_parts(na::Translation3::from(self.translation), self.rotation)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<&na::Isometry3<f32>> for Pose {
    fn from(iso: &na::Isometry3<f32>) -> Self {
        Self {
            translation: iso.translation.vector,
            rotation: iso.rotation,
        }
    }
}

/// A visual proxy that mirrors a body's pose.
pub trait MeshProxy {
    fn set_pose(&mut self, pose: &Pose);
}
