//! Pointer picking: pixel coordinates to a world-space point on a reference plane.
//!
//! Conventions
//! - Pixel coordinates have their origin at the top-left of the viewport, +Y down.
//! - NDC span [-1, 1] on both axes with +Y up (OpenGL convention, matching `Perspective3`).
//! - The camera is right-handed and looks down its local -Z.

use nalgebra as na;
use rapier3d::prelude::Ray;

use crate::constants::{PARALLEL_EPS, UNPROJECT_DEPTH};
use crate::error::{ConfigError, ViewportError};

/// Size of the output surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn check(&self) -> Result<(), ViewportError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(ViewportError::ZeroArea {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn aspect(&self) -> Result<f32, ViewportError> {
        self.check()?;
        Ok(self.width / self.height)
    }

    /// Map a pointer position in pixels to normalized device coordinates.
    pub fn ndc(&self, pointer_px: na::Point2<f32>) -> Result<na::Vector2<f32>, ViewportError> {
        self.check()?;
        Ok(na::Vector2::new(
            (pointer_px.x / self.width) * 2.0 - 1.0,
            -(pointer_px.y / self.height) * 2.0 + 1.0,
        ))
    }
}

/// A perspective camera described by where it is and what it looks at.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub eye: na::Point3<f32>,
    pub target: na::Point3<f32>,
    pub up: na::Vector3<f32>,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    aspect: f32,
}

impl CameraRig {
    /// Build a rig, rejecting parameters that would make the projection singular.
    pub fn new(
        eye: na::Point3<f32>,
        target: na::Point3<f32>,
        fov_y: f32,
        near: f32,
        far: f32,
        aspect: f32,
    ) -> Result<Self, ConfigError> {
        let up = na::Vector3::y();

        if !(fov_y > 0.0 && fov_y < std::f32::consts::PI) {
            return Err(ConfigError::InvalidFov(fov_y));
        }
        if !(near > 0.0 && far > near && far.is_finite()) {
            return Err(ConfigError::InvalidClipPlanes { near, far });
        }
        if !(aspect.is_finite() && aspect > 0.0) {
            return Err(ConfigError::InvalidAspect(aspect));
        }
        // Looking straight along `up` leaves the view basis undefined.
        let forward = target - eye;
        if forward.norm_squared() <= f32::EPSILON
            || forward.cross(&up).norm_squared() <= f32::EPSILON
        {
            return Err(ConfigError::DegenerateCamera);
        }

        Ok(Self {
            eye,
            target,
            up,
            fov_y,
            near,
            far,
            aspect,
        })
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Follow a viewport resize. A zero-area viewport leaves the aspect untouched.
    pub fn set_viewport(&mut self, viewport: &Viewport) -> Result<(), ViewportError> {
        self.aspect = viewport.aspect()?;
        Ok(())
    }

    pub fn view(&self) -> na::Isometry3<f32> {
        na::Isometry3::look_at_rh(&self.eye, &self.target, &self.up)
    }

    pub fn projection(&self) -> na::Perspective3<f32> {
        na::Perspective3::new(self.aspect, self.fov_y, self.near, self.far)
    }

    /// Unit vector from the eye toward the target.
    pub fn forward(&self) -> na::Unit<na::Vector3<f32>> {
        na::Unit::new_normalize(self.target - self.eye)
    }

    /// Ray from the eye through the given NDC position.
    pub fn ray_from_ndc(&self, ndc: na::Vector2<f32>) -> Ray {
        let in_view = self
            .projection()
            .unproject_point(&na::Point3::new(ndc.x, ndc.y, UNPROJECT_DEPTH));
        let in_world = self.view().inverse_transform_point(&in_view);

        Ray::new(self.eye, (in_world - self.eye).normalize())
    }

    /// The plane clicks land on: through the look-at target, facing the camera.
    pub fn pick_plane(&self) -> Plane {
        Plane::from_normal_and_point(na::Unit::new_normalize(self.eye - self.target), self.target)
    }
}

/// An infinite two-sided plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: na::Unit<na::Vector3<f32>>,
    pub point: na::Point3<f32>,
}

impl Plane {
    pub fn from_normal_and_point(
        normal: na::Unit<na::Vector3<f32>>,
        point: na::Point3<f32>,
    ) -> Self {
        Self { normal, point }
    }

    /// Signed distance from `p` to the plane, positive on the normal side.
    pub fn distance_to(&self, p: &na::Point3<f32>) -> f32 {
        self.normal.dot(&(p - self.point))
    }

    /// Where `ray` crosses the plane, if it does so at or ahead of its origin.
    ///
    /// A ray parallel to the plane only "hits" when it lies in the plane, in which
    /// case the origin is returned.
    pub fn intersect(&self, ray: &Ray) -> Option<na::Point3<f32>> {
        let denom = self.normal.dot(&ray.dir);
        let origin_dist = self.distance_to(&ray.origin);

        if denom.abs() <= PARALLEL_EPS {
            return (origin_dist.abs() <= PARALLEL_EPS).then_some(ray.origin);
        }

        let t = -origin_dist / denom;
        if t < 0.0 {
            return None;
        }

        Some(ray.point_at(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1.0e-4;

    fn default_rig() -> CameraRig {
        CameraRig::new(
            na::Point3::new(0.0, 20.0, -30.0),
            na::Point3::origin(),
            45f32.to_radians(),
            0.1,
            1000.0,
            16.0 / 9.0,
        )
        .unwrap()
    }

    #[test]
    fn ndc_maps_corners_and_center() {
        let viewport = Viewport::new(800.0, 600.0);

        let center = viewport.ndc(na::Point2::new(400.0, 300.0)).unwrap();
        assert!(center.norm() < EPS);

        let top_left = viewport.ndc(na::Point2::new(0.0, 0.0)).unwrap();
        assert_eq!(top_left, na::Vector2::new(-1.0, 1.0));

        let bottom_right = viewport.ndc(na::Point2::new(800.0, 600.0)).unwrap();
        assert_eq!(bottom_right, na::Vector2::new(1.0, -1.0));
    }

    #[test]
    fn zero_area_viewport_is_rejected() {
        for viewport in [
            Viewport::new(0.0, 600.0),
            Viewport::new(800.0, 0.0),
            Viewport::new(0.0, 0.0),
        ] {
            assert!(matches!(
                viewport.ndc(na::Point2::new(1.0, 1.0)),
                Err(ViewportError::ZeroArea { .. })
            ));
            assert!(viewport.aspect().is_err());
        }
    }

    #[test]
    fn zero_area_resize_keeps_previous_aspect() {
        let mut rig = default_rig();
        let before = rig.aspect();

        assert!(rig.set_viewport(&Viewport::new(1024.0, 0.0)).is_err());
        assert_eq!(rig.aspect(), before);

        rig.set_viewport(&Viewport::new(1000.0, 500.0)).unwrap();
        assert_eq!(rig.aspect(), 2.0);
    }

    #[test]
    fn center_ray_points_along_view_direction() {
        let rig = default_rig();
        let ray = rig.ray_from_ndc(na::Vector2::zeros());

        assert_eq!(ray.origin, rig.eye);
        assert!((ray.dir - rig.forward().into_inner()).norm() < EPS);
    }

    #[test]
    fn center_click_hits_the_scene_origin() {
        let rig = default_rig();
        let ray = rig.ray_from_ndc(na::Vector2::zeros());

        let hit = rig.pick_plane().intersect(&ray).unwrap();
        assert!(hit.coords.norm() < 1.0e-3, "hit = {hit:?}");
    }

    #[test]
    fn off_center_click_lands_on_the_pick_plane() {
        let rig = default_rig();
        let plane = rig.pick_plane();
        let ray = rig.ray_from_ndc(na::Vector2::new(0.5, -0.25));

        let hit = plane.intersect(&ray).unwrap();
        assert!(plane.distance_to(&hit).abs() < 1.0e-3);
        // Right of screen is -X when looking down +Z from behind.
        assert!(hit.x < 0.0);
    }

    #[test]
    fn parallel_ray_does_not_intersect() {
        let plane = Plane::from_normal_and_point(na::Vector3::y_axis(), na::Point3::origin());
        let ray = Ray::new(na::Point3::new(0.0, 1.0, 0.0), na::Vector3::x());

        assert_eq!(plane.intersect(&ray), None);
    }

    #[test]
    fn parallel_ray_inside_the_plane_hits_at_its_origin() {
        let plane = Plane::from_normal_and_point(na::Vector3::y_axis(), na::Point3::origin());
        let origin = na::Point3::new(3.0, 0.0, -2.0);
        let ray = Ray::new(origin, na::Vector3::z());

        assert_eq!(plane.intersect(&ray), Some(origin));
    }

    #[test]
    fn plane_behind_the_ray_is_missed() {
        let plane = Plane::from_normal_and_point(na::Vector3::y_axis(), na::Point3::origin());
        let ray = Ray::new(na::Point3::new(0.0, 5.0, 0.0), na::Vector3::y());

        assert_eq!(plane.intersect(&ray), None);
    }

    #[test]
    fn rig_rejects_degenerate_parameters() {
        let eye = na::Point3::new(0.0, 20.0, -30.0);
        let origin = na::Point3::origin();

        assert_eq!(
            CameraRig::new(origin, origin, 1.0, 0.1, 10.0, 1.0),
            Err(ConfigError::DegenerateCamera)
        );
        assert_eq!(
            CameraRig::new(na::Point3::new(0.0, 10.0, 0.0), origin, 1.0, 0.1, 10.0, 1.0),
            Err(ConfigError::DegenerateCamera)
        );
        assert!(matches!(
            CameraRig::new(eye, origin, 1.0, 1.0, 0.5, 1.0),
            Err(ConfigError::InvalidClipPlanes { .. })
        ));
        assert!(matches!(
            CameraRig::new(eye, origin, 0.0, 0.1, 10.0, 1.0),
            Err(ConfigError::InvalidFov(_))
        ));
        assert!(matches!(
            CameraRig::new(eye, origin, 1.0, 0.1, 10.0, 0.0),
            Err(ConfigError::InvalidAspect(_))
        ));
    }
}
