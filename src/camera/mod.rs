pub mod systems;

use bevy::prelude::*;

use crate::game_state::AppState;
use crate::session::GameplaySet;
use systems::{grab_cursor, mouse_look, release_cursor, release_cursor_on_end, toggle_cursor_grab};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), grab_cursor)
            .add_systems(OnExit(AppState::InGame), release_cursor)
            .add_systems(
                Update,
                (
                    (mouse_look, toggle_cursor_grab).in_set(GameplaySet::Input),
                    release_cursor_on_end.in_set(GameplaySet::Present),
                ),
            );
    }
}
