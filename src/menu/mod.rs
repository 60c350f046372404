pub mod components;
pub mod styles;
pub mod systems;

use bevy::prelude::*;

use crate::game_state::AppState;
use systems::*;

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::MainMenu), setup_main_menu)
            .add_systems(OnExit(AppState::MainMenu), cleanup_main_menu)
            .add_systems(
                Update,
                (button_interaction, handle_scene_click).run_if(in_state(AppState::MainMenu)),
            )
            // Cleanup menu camera when entering game
            .add_systems(OnEnter(AppState::InGame), cleanup_menu_camera);
    }
}
