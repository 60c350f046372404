pub mod systems;

use bevy::prelude::*;

use crate::game_state::AppState;
use crate::gameplay::{GameEvent, GameSession};
use systems::{begin_session, drive_session};

/// The session currently being played. Survives leaving the game so the next
/// start re-initializes it instead of building a new one.
#[derive(Resource)]
pub struct ActiveSession(pub GameSession);

/// Gameplay event forwarded to the presentation systems.
#[derive(Event, Debug, Clone)]
pub struct SessionEvent(pub GameEvent);

/// Per-frame ordering: move the player, advance the rules, then draw.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    Input,
    Tick,
    Present,
}

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SessionEvent>()
            .configure_sets(
                Update,
                (GameplaySet::Input, GameplaySet::Tick, GameplaySet::Present).chain(),
            )
            .add_systems(OnEnter(AppState::InGame), begin_session)
            .add_systems(Update, drive_session.in_set(GameplaySet::Tick));

        for set in [GameplaySet::Input, GameplaySet::Tick, GameplaySet::Present] {
            app.configure_sets(Update, set.run_if(in_state(AppState::InGame)));
        }
    }
}
