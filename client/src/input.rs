use bevy::{
    prelude::*,
    window::{PrimaryWindow, WindowResized},
};
use leafwing_input_manager::prelude::*;
use shared::InputEvent;

use crate::sandbox::SandboxState;

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    LeftClick,
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();

    let mut input_map = InputMap::<InputAction>::default();
    input_map.insert(InputAction::LeftClick, MouseButton::Left);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<InputAction>::default());
}

/// Queue a spawn request for every fresh left click inside the window.
pub(super) fn queue_clicks(
    actions: Res<ActionState<InputAction>>,
    window: Single<&Window, With<PrimaryWindow>>,
    mut sandbox: ResMut<SandboxState>,
) {
    if !actions.just_pressed(&InputAction::LeftClick) {
        return;
    }
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    sandbox.queue(InputEvent::Click {
        x: cursor.x,
        y: cursor.y,
    });
}

pub(super) fn queue_resizes(
    mut messages: MessageReader<WindowResized>,
    mut sandbox: ResMut<SandboxState>,
) {
    for message in messages.read() {
        sandbox.queue(InputEvent::Resize {
            width: message.width,
            height: message.height,
        });
    }
}
