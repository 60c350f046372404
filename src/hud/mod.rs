pub mod components;
pub mod format;
pub mod systems;

use bevy::prelude::*;

use crate::game_state::AppState;
use crate::menu::systems::button_interaction;
use crate::session::GameplaySet;
use systems::*;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), setup_hud)
            .add_systems(
                Update,
                (
                    update_score_text,
                    update_status,
                    display_notifications,
                    update_notifications,
                    show_summary,
                    handle_play_again,
                    button_interaction,
                )
                    .in_set(GameplaySet::Present),
            );
    }
}
