use bevy::{input::mouse::MouseMotion, prelude::*, window::CursorGrabMode};

use crate::game_state::SceneKind;
use crate::gameplay::GameEvent;
use crate::player::{CameraController, Player, MOUSE_SENSITIVITY, PITCH_LIMIT};
use crate::session::SessionEvent;

fn set_grab(window: &mut Window, grabbed: bool) {
    if grabbed {
        window.cursor_options.grab_mode = CursorGrabMode::Confined;
        window.cursor_options.visible = false;
    } else {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

/// Only the first-person forest captures the mouse.
pub fn grab_cursor(kind: Res<SceneKind>, mut windows: Query<&mut Window>) {
    if *kind != SceneKind::HalloweenForest {
        return;
    }
    if let Ok(mut window) = windows.get_single_mut() {
        set_grab(&mut window, true);
    }
}

pub fn release_cursor(mut windows: Query<&mut Window>) {
    if let Ok(mut window) = windows.get_single_mut() {
        set_grab(&mut window, false);
    }
}

/// Frees the mouse when the session ends so the summary can be clicked.
pub fn release_cursor_on_end(mut events: EventReader<SessionEvent>, windows: Query<&mut Window>) {
    if events.read().any(|event| matches!(event.0, GameEvent::Ended(_))) {
        release_cursor(windows);
    }
}

pub fn toggle_cursor_grab(
    kind: Res<SceneKind>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut windows: Query<&mut Window>,
) {
    if *kind != SceneKind::HalloweenForest || !keyboard_input.just_pressed(KeyCode::Escape) {
        return;
    }
    if let Ok(mut window) = windows.get_single_mut() {
        let grabbed = window.cursor_options.grab_mode != CursorGrabMode::None;
        set_grab(&mut window, !grabbed);
    }
}

pub fn mouse_look(
    mut mouse_motion: EventReader<MouseMotion>,
    mut query: Query<(&mut Transform, &mut CameraController), With<Player>>,
    windows: Query<&Window>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    // Only process mouse look when cursor is grabbed
    if window.cursor_options.grab_mode == CursorGrabMode::None {
        mouse_motion.clear();
        return;
    }

    let Ok((mut transform, mut controller)) = query.get_single_mut() else {
        mouse_motion.clear();
        return;
    };

    for event in mouse_motion.read() {
        controller.yaw -= event.delta.x * MOUSE_SENSITIVITY;
        controller.pitch -= event.delta.y * MOUSE_SENSITIVITY;

        // Clamp pitch to prevent flipping
        controller.pitch = controller.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    transform.rotation = Quat::from_euler(EulerRot::YXZ, controller.yaw, controller.pitch, 0.0);
}
