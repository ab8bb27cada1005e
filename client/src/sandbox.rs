//! Bevy side of the sandbox: the owning resource, mesh creation and the per-frame driver.

use bevy::prelude::*;
use shared::{MeshShape, MeshSpawner, Pose, ProxyKind, Sandbox};

use crate::{input, transform};

/// The single owner of the physics world and the proxy registry.
#[derive(Resource, Deref, DerefMut)]
pub struct SandboxState(pub Sandbox<Entity>);

/// Marks a mesh entity whose `Transform` is driven by a physics body.
#[derive(Component, Clone, Copy, Debug)]
pub struct PhysicsProxy(pub ProxyKind);

pub(super) fn plugin(app: &mut App) {
    // Drain + step + sync, then collect this frame's input for the next one.
    app.add_systems(
        Update,
        (
            advance,
            transform::sync_transforms,
            input::queue_resizes,
            input::queue_clicks,
        )
            .chain()
            .run_if(resource_exists::<SandboxState>),
    );
}

/// Creates mesh entities for new pairs through `Commands`.
pub struct MeshCommands<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub meshes: &'a mut Assets<Mesh>,
    pub materials: &'a mut Assets<StandardMaterial>,
}

impl MeshSpawner<Entity> for MeshCommands<'_, '_, '_> {
    fn spawn_mesh(&mut self, kind: ProxyKind, shape: &MeshShape, pose: &Pose) -> Entity {
        let mesh = match shape {
            MeshShape::Plane { size } => Plane3d::default().mesh().size(*size, *size).build(),
            MeshShape::Sphere { radius } => Sphere::new(*radius).mesh().build(),
            MeshShape::Cuboid { half_extents } => Cuboid::new(
                half_extents.x * 2.0,
                half_extents.y * 2.0,
                half_extents.z * 2.0,
            )
            .into(),
        };

        self.commands
            .spawn((
                Name::new(format!("{kind:?}")),
                PhysicsProxy(kind),
                Mesh3d(self.meshes.add(mesh)),
                MeshMaterial3d(self.materials.add(material_for(kind))),
                transform::pose_to_transform(pose),
            ))
            .id()
    }
}

fn material_for(kind: ProxyKind) -> StandardMaterial {
    match kind {
        ProxyKind::Ground => StandardMaterial {
            base_color: Color::WHITE,
            perceptual_roughness: 1.0,
            metallic: 0.0,
            double_sided: true,
            cull_mode: None,
            ..default()
        },
        ProxyKind::Sphere => StandardMaterial::from(Color::srgb(1.0, 0.0, 0.0)),
        ProxyKind::Box => StandardMaterial::from(Color::srgb(0.0, 1.0, 0.0)),
    }
}

/// One fixed physics step per rendered frame, after spawning any queued clicks.
fn advance(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut sandbox: ResMut<SandboxState>,
) {
    let mut spawner = MeshCommands {
        commands: &mut commands,
        meshes: &mut meshes,
        materials: &mut materials,
    };

    let report = sandbox.advance(&mut spawner);
    if report.spawned > 0 || report.skipped > 0 {
        debug!(
            spawned = report.spawned,
            skipped = report.skipped,
            pairs = sandbox.registry().len(),
            "handled clicks"
        );
    }
}
