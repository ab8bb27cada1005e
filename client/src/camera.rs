use crate::{SceneSettings, transform::point_to_vec3};
use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera);
}

/// Render camera placed where the sandbox's picking rig is, so clicks land under the cursor.
fn add_camera(mut commands: Commands, settings: Res<SceneSettings>) {
    let rig = &settings.camera;

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: rig.fov_y_deg.to_radians(),
            near: rig.near,
            far: rig.far,
            ..default()
        }),
        Transform::from_translation(point_to_vec3(&rig.eye))
            .looking_at(point_to_vec3(&rig.target), Vec3::Y),
    ));
}
