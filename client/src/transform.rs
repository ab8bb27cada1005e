use bevy::prelude::*;
use nalgebra as na;
use shared::Pose;

use crate::sandbox::{PhysicsProxy, SandboxState};

pub fn point_to_vec3(p: &na::Point3<f32>) -> Vec3 {
    Vec3::new(p.x, p.y, p.z)
}

pub fn pose_to_transform(pose: &Pose) -> Transform {
    let t = pose.translation;
    let q = pose.rotation.coords;
    Transform {
        translation: Vec3::new(t.x, t.y, t.z),
        rotation: Quat::from_xyzw(q.x, q.y, q.z, q.w),
        scale: Vec3::ONE,
    }
}

/// Copy every body pose onto its mesh entity. Meshes never own pose state.
pub(super) fn sync_transforms(
    sandbox: Res<SandboxState>,
    mut transforms: Query<&mut Transform, With<PhysicsProxy>>,
) {
    sandbox.sync_with(|pair, pose| {
        // Entities spawned this frame are still queued in `Commands`; they were
        // created with the right pose already.
        let Ok(mut transform) = transforms.get_mut(pair.mesh) else {
            return;
        };
        let target = pose_to_transform(pose);
        transform.translation = target.translation;
        transform.rotation = target.rotation;
    });
}
