use bevy::{prelude::*, window::PrimaryWindow};
use shared::{Sandbox, Viewport};

use crate::SceneSettings;
use crate::sandbox::{MeshCommands, SandboxState};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, setup);
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
    window: Single<&Window, With<PrimaryWindow>>,
    mut exit: MessageWriter<AppExit>,
) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(1.0, 1.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let mut spawner = MeshCommands {
        commands: &mut commands,
        meshes: &mut meshes,
        materials: &mut materials,
    };
    let mut sandbox = match Sandbox::new(settings.0.clone(), &mut spawner) {
        Ok(sandbox) => sandbox,
        Err(err) => {
            error!("Invalid scene configuration: {err}");
            exit.write(AppExit::error());
            return;
        }
    };

    if let Err(err) = sandbox.resize(Viewport::new(window.width(), window.height())) {
        // Clicks are skipped until the first real resize arrives.
        warn!("Initial window size unusable: {err}");
    }

    info!(pairs = sandbox.registry().len(), "World setup");
    commands.insert_resource(SandboxState(sandbox));
}
