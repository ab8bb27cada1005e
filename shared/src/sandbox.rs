//! The sandbox context: physics world, proxy registry, camera and input queue in one owner.
//!
//! A host drives it once per display frame:
//! 1) push pointer/resize input with [`Sandbox::queue`] whenever it arrives,
//! 2) call [`Sandbox::advance`] (drain input, spawn, one fixed step),
//! 3) copy poses onto meshes with [`Sandbox::sync`] or [`Sandbox::sync_with`],
//! 4) render.

use nalgebra as na;

use crate::config::SpawnConfig;
use crate::error::{PickError, ViewportError};
use crate::events::{EventQueue, InputEvent};
use crate::picking::{CameraRig, Viewport};
use crate::pose::{MeshProxy, Pose};
use crate::rapier::{BodyDef, ShapeDef};
use crate::registry::{ProxyKind, ProxyPair, Registry};
use crate::world::PhysicsWorld;

/// Visual geometry requested from the host for a new pair.
#[derive(Clone, Debug, PartialEq)]
pub enum MeshShape {
    /// Square of the given edge length in the local XZ plane.
    Plane { size: f32 },
    Sphere { radius: f32 },
    Cuboid { half_extents: na::Vector3<f32> },
}

/// Creates the visual half of a pair. Implemented by the rendering host.
pub trait MeshSpawner<M> {
    fn spawn_mesh(&mut self, kind: ProxyKind, shape: &MeshShape, pose: &Pose) -> M;
}

impl<M, F> MeshSpawner<M> for F
where
    F: FnMut(ProxyKind, &MeshShape, &Pose) -> M,
{
    fn spawn_mesh(&mut self, kind: ProxyKind, shape: &MeshShape, pose: &Pose) -> M {
        self(kind, shape, pose)
    }
}

/// What happened during one [`Sandbox::advance`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Clicks that produced a new box.
    pub spawned: usize,
    /// Clicks dropped because no world point could be found.
    pub skipped: usize,
    /// Resize events applied to the camera.
    pub resized: usize,
}

pub struct Sandbox<M> {
    pub(crate) world: PhysicsWorld,
    pub(crate) registry: Registry<M>,
    pub(crate) camera: CameraRig,
    pub(crate) viewport: Viewport,
    pub(crate) events: EventQueue,
    pub(crate) spawn: SpawnConfig,
}

impl<M> Sandbox<M> {
    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }

    pub fn registry(&self) -> &Registry<M> {
        &self.registry
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn spawn_config(&self) -> &SpawnConfig {
        &self.spawn
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Queue input for the next [`advance`](Self::advance).
    pub fn queue(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Apply a new output size. Zero-area sizes are ignored and leave the camera as it was.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), ViewportError> {
        self.camera.set_viewport(&viewport)?;
        self.viewport = viewport;
        Ok(())
    }

    /// Project a pointer position onto the pick plane.
    pub fn pick(&self, pointer_px: na::Point2<f32>) -> Result<na::Point3<f32>, PickError> {
        let ndc = self.viewport.ndc(pointer_px)?;
        let ray = self.camera.ray_from_ndc(ndc);
        self.camera
            .pick_plane()
            .intersect(&ray)
            .ok_or(PickError::NoIntersection)
    }

    /// Create a box mesh and body at `point` and append them as one pair.
    pub fn spawn_box_at<S>(&mut self, point: &na::Point3<f32>, spawner: &mut S) -> usize
    where
        S: MeshSpawner<M> + ?Sized,
    {
        let pose = Pose::from_point(point);
        let spawn = &self.spawn;

        let def = BodyDef::dynamic(
            ShapeDef::Cuboid {
                half_extents: spawn.half_extents,
            },
            pose,
            spawn.mass,
        )
        .with_angular_velocity(spawn.angular_velocity)
        .with_angular_damping(spawn.angular_damping)
        .with_friction(spawn.friction);

        let mesh = spawner.spawn_mesh(
            ProxyKind::Box,
            &MeshShape::Cuboid {
                half_extents: spawn.half_extents,
            },
            &pose,
        );
        let index = self.insert_pair(ProxyKind::Box, mesh, &def);
        log::debug!(
            "spawned box #{index} at ({:.2}, {:.2}, {:.2}); {} pairs",
            point.x,
            point.y,
            point.z,
            self.registry.len()
        );
        index
    }

    /// Pick and, on success, spawn. A miss leaves the registry untouched.
    pub fn click<S>(
        &mut self,
        pointer_px: na::Point2<f32>,
        spawner: &mut S,
    ) -> Result<usize, PickError>
    where
        S: MeshSpawner<M> + ?Sized,
    {
        let point = self.pick(pointer_px)?;
        Ok(self.spawn_box_at(&point, &mut *spawner))
    }

    /// Advance the world by one fixed increment. No catch-up, no sub-steps.
    pub fn step(&mut self) {
        self.world.step();
    }

    /// Drain queued input, then take exactly one step.
    ///
    /// Input queued during frame N is handled at the start of frame N+1, before that
    /// frame's step, so a new box is always simulated by the step that follows its spawn.
    pub fn advance<S>(&mut self, spawner: &mut S) -> FrameReport
    where
        S: MeshSpawner<M> + ?Sized,
    {
        let mut report = FrameReport::default();

        // Take the events first so the handlers below can borrow `self` mutably.
        let pending: Vec<InputEvent> = self.events.drain().collect();
        for event in pending {
            match event {
                InputEvent::Click { x, y } => {
                    match self.click(na::Point2::new(x, y), &mut *spawner) {
                        Ok(_) => report.spawned += 1,
                        Err(err) => {
                            log::debug!("click at ({x}, {y}) skipped: {err}");
                            report.skipped += 1;
                        }
                    }
                }
                InputEvent::Resize { width, height } => {
                    match self.resize(Viewport::new(width, height)) {
                        Ok(()) => report.resized += 1,
                        Err(err) => log::debug!("resize ignored: {err}"),
                    }
                }
            }
        }

        self.step();
        report
    }

    /// Hand every pair's current body pose to `apply`, in registry order.
    ///
    /// A pure read of the physics state: calling it twice without a step in between
    /// yields the same poses.
    pub fn sync_with<F>(&self, mut apply: F)
    where
        F: FnMut(&ProxyPair<M>, &Pose),
    {
        for pair in self.registry.iter() {
            match self.world.pose(pair.body) {
                Some(pose) => apply(pair, &pose),
                None => log::warn!("{:?} pair has no body {:?}", pair.kind, pair.body),
            }
        }
    }

    pub(crate) fn insert_pair(&mut self, kind: ProxyKind, mesh: M, def: &BodyDef) -> usize {
        let body = self.world.insert(def);
        self.registry.push(ProxyPair { kind, mesh, body })
    }
}

impl<M: MeshProxy> Sandbox<M> {
    /// Overwrite every mesh pose with its body's pose.
    pub fn sync(&mut self) {
        let Self {
            world, registry, ..
        } = self;

        for pair in registry.iter_mut() {
            match world.pose(pair.body) {
                Some(pose) => pair.mesh.set_pose(&pose),
                None => log::warn!("{:?} pair has no body {:?}", pair.kind, pair.body),
            }
        }
    }

    /// One complete frame for hosts whose meshes implement [`MeshProxy`].
    pub fn frame<S>(&mut self, spawner: &mut S) -> FrameReport
    where
        S: MeshSpawner<M> + ?Sized,
    {
        let report = self.advance(spawner);
        self.sync();
        report
    }
}
