use bevy::prelude::*;

use crate::game_state::SceneKind;

/// Marker for the menu camera.
#[derive(Component)]
pub struct MenuCamera;

/// Marker for the main menu root UI node.
#[derive(Component)]
pub struct MainMenuRoot;

/// Button that starts a session in the given scene.
#[derive(Component)]
pub struct SceneButton(pub SceneKind);
