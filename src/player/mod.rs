pub mod components;
pub mod systems;

use bevy::prelude::*;

pub use components::{
    CameraController, Locomotion, MovementFrame, Player, Velocity, MOUSE_SENSITIVITY, PITCH_LIMIT,
    PLAYER_HEIGHT,
};

use crate::session::GameplaySet;
use systems::{apply_velocity, player_movement};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (player_movement, apply_velocity)
                .chain()
                .in_set(GameplaySet::Input),
        );
    }
}
