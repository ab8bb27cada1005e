// Support configuring Bevy lints within code.
#![cfg_attr(bevy_lint, feature(register_tool), register_tool(bevy))]
// Disable console on Windows for non-dev builds.
#![cfg_attr(not(feature = "dev"), windows_subsystem = "windows")]

#[cfg(feature = "dev_native")]
mod debug_tools;

mod camera;
mod input;
mod sandbox;
mod transform;
mod world;

use bevy::prelude::*;
use shared::SceneConfig;

fn main() -> AppExit {
    App::new().add_plugins(AppPlugin).run()
}

/// Scene parameters shared by the camera and the sandbox startup.
#[derive(Resource, Deref, Clone, Debug)]
pub struct SceneSettings(pub SceneConfig);

pub struct AppPlugin;
impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Window {
                title: "Box Drop".to_string(),
                fit_canvas_to_parent: true,
                ..default()
            }
            .into(),
            ..default()
        }));

        app.insert_resource(SceneSettings(SceneConfig::demo()));

        app.add_plugins((
            camera::plugin,
            world::plugin,
            input::plugin,
            sandbox::plugin,
        ));

        #[cfg(feature = "dev_native")]
        app.add_plugins(debug_tools::plugin);
    }
}
