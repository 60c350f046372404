pub mod components;
pub mod interaction;
pub mod scatter;
pub mod setup;

use bevy::prelude::*;

use crate::game_state::{cleanup_scene, AppState};
use crate::session::systems::begin_session;
use crate::session::GameplaySet;
use interaction::{apply_marker_tones, despawn_collected, sync_package_anchor};
use setup::setup_world;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), setup_world.after(begin_session))
            .add_systems(OnExit(AppState::InGame), cleanup_scene)
            .add_systems(
                Update,
                (despawn_collected, sync_package_anchor, apply_marker_tones)
                    .in_set(GameplaySet::Present),
            );
    }
}
