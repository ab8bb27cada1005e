use crate::config::SceneConfig;
use crate::error::ConfigError;
use crate::events::EventQueue;
use crate::picking::{CameraRig, Viewport};
use crate::pose::Pose;
use crate::rapier::{BodyDef, ShapeDef};
use crate::registry::{ProxyKind, Registry};
use crate::sandbox::{MeshShape, MeshSpawner, Sandbox};
use crate::world::PhysicsWorld;

impl<M> Sandbox<M> {
    /// Build the world, the camera and the startup pairs described by `config`.
    ///
    /// The registry always starts with exactly one ground pair, followed by the demo
    /// sphere when `config.sphere` is set.
    pub fn new<S>(config: SceneConfig, spawner: &mut S) -> Result<Self, ConfigError>
    where
        S: MeshSpawner<M> + ?Sized,
    {
        config.validate()?;

        let camera = CameraRig::new(
            config.camera.eye,
            config.camera.target,
            config.camera.fov_y_deg.to_radians(),
            config.camera.near,
            config.camera.far,
            config.camera.aspect,
        )?;

        let mut sandbox = Self {
            world: PhysicsWorld::new(config.gravity, config.time_step),
            registry: Registry::new(),
            camera,
            // No usable size until the host reports one; clicks are skipped until then.
            viewport: Viewport::new(0.0, 0.0),
            events: EventQueue::new(),
            spawn: config.spawn,
        };

        let ground_pose = Pose::from_translation(config.ground.translation);
        let ground_mesh = spawner.spawn_mesh(
            ProxyKind::Ground,
            &MeshShape::Plane {
                size: config.ground.size,
            },
            &ground_pose,
        );
        sandbox.insert_pair(
            ProxyKind::Ground,
            ground_mesh,
            &BodyDef::fixed(ShapeDef::Plane, ground_pose),
        );

        if let Some(sphere) = &config.sphere {
            let pose = Pose::from_point(&sphere.start);
            let mesh = spawner.spawn_mesh(
                ProxyKind::Sphere,
                &MeshShape::Sphere {
                    radius: sphere.radius,
                },
                &pose,
            );
            let def = BodyDef::dynamic(
                ShapeDef::Sphere {
                    radius: sphere.radius,
                },
                pose,
                sphere.mass,
            )
            .with_linear_damping(sphere.linear_damping);
            sandbox.insert_pair(ProxyKind::Sphere, mesh, &def);
        }

        log::info!(
            "sandbox ready: {} pairs, gravity {:.2} m/s^2, dt {:.5}s",
            sandbox.registry.len(),
            sandbox.world.gravity().norm(),
            sandbox.world.dt()
        );

        Ok(sandbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SphereConfig;
    use crate::error::PickError;
    use nalgebra as na;

    fn spawn_nothing(_: ProxyKind, _: &MeshShape, _: &Pose) {}

    #[test]
    fn default_scene_has_only_the_ground() {
        let sandbox = Sandbox::<()>::new(SceneConfig::default(), &mut spawn_nothing).unwrap();

        assert_eq!(sandbox.registry().len(), 1);
        assert_eq!(sandbox.registry().count_of(ProxyKind::Ground), 1);
        assert_eq!(sandbox.world().body_count(), 1);
        let ground = sandbox.registry().get(0).unwrap();
        assert!(sandbox.world().body(ground.body).unwrap().is_fixed());
    }

    #[test]
    fn viewport_is_unusable_until_the_host_resizes() {
        let sandbox = Sandbox::<()>::new(SceneConfig::default(), &mut spawn_nothing).unwrap();

        assert!(sandbox.viewport().aspect().is_err());
        assert!(matches!(
            sandbox.pick(na::Point2::new(400.0, 300.0)),
            Err(PickError::Viewport(_))
        ));
    }

    #[test]
    fn demo_scene_adds_the_sphere_after_the_ground() {
        let mut shapes = Vec::new();
        let mut record = |kind: ProxyKind, shape: &MeshShape, pose: &Pose| {
            shapes.push((kind, shape.clone(), pose.translation));
        };
        let sandbox = Sandbox::<()>::new(SceneConfig::demo(), &mut record).unwrap();

        let kinds: Vec<_> = sandbox.registry().iter().map(|pair| pair.kind).collect();
        assert_eq!(kinds, [ProxyKind::Ground, ProxyKind::Sphere]);

        let sphere = SphereConfig::default();
        assert_eq!(
            shapes,
            [
                (
                    ProxyKind::Ground,
                    MeshShape::Plane { size: 30.0 },
                    na::Vector3::zeros()
                ),
                (
                    ProxyKind::Sphere,
                    MeshShape::Sphere { radius: 2.0 },
                    sphere.start.coords
                ),
            ]
        );
    }

    #[test]
    fn invalid_config_builds_nothing() {
        let mut calls = 0;
        let config = SceneConfig {
            time_step: -1.0,
            ..SceneConfig::default()
        };

        let mut count = |_: ProxyKind, _: &MeshShape, _: &Pose| calls += 1;
        let result = Sandbox::<()>::new(config, &mut count);
        assert!(matches!(result, Err(ConfigError::NonPositiveTimeStep(_))));
        assert_eq!(calls, 0);
    }
}
