use bevy::core::FrameCount;
use bevy::prelude::*;

use super::{ActiveSession, SessionEvent};
use crate::config::GameConfig;
use crate::game_state::SceneKind;
use crate::gameplay::{CollectionGame, DeliveryGame, FrameInput, GameSession, PlayerPose};
use crate::player::Player;
use crate::world::scatter::scatter_positions;

/// Key used to pick up, drop and deliver.
pub const INTERACT_KEY: KeyCode = KeyCode::KeyE;

fn build_session(kind: SceneKind, config: &GameConfig) -> GameSession {
    match kind {
        SceneKind::HalloweenForest => GameSession::Collection(CollectionGame::new(
            config.collection.rules(),
            scatter_positions(&config.collection),
        )),
        SceneKind::PackageDelivery => GameSession::Delivery(DeliveryGame::new(config.delivery.rules())),
    }
}

fn plays(session: &GameSession, kind: SceneKind) -> bool {
    matches!(
        (session, kind),
        (GameSession::Collection(_), SceneKind::HalloweenForest)
            | (GameSession::Delivery(_), SceneKind::PackageDelivery)
    )
}

pub fn pose_of(transform: &Transform) -> PlayerPose {
    PlayerPose {
        translation: transform.translation,
        rotation: transform.rotation,
        scale: transform.scale,
    }
}

/// Starts the session for the selected scene, reusing the previous one when
/// it plays the same scene.
pub fn begin_session(
    mut commands: Commands,
    kind: Res<SceneKind>,
    config: Res<GameConfig>,
    active: Option<ResMut<ActiveSession>>,
) {
    match active {
        Some(mut active) if plays(&active.0, *kind) => active.0.start(),
        _ => {
            let mut session = build_session(*kind, &config);
            session.start();
            commands.insert_resource(ActiveSession(session));
        }
    }
    info!("Entered {:?}", *kind);
}

/// Feeds this frame's player pose and interact key into the rules.
pub fn drive_session(
    time: Res<Time>,
    frames: Res<FrameCount>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    active: Option<ResMut<ActiveSession>>,
    player_query: Query<&Transform, With<Player>>,
    mut event_writer: EventWriter<SessionEvent>,
) {
    let Some(mut active) = active else {
        return;
    };

    let input = FrameInput {
        player: player_query.get_single().ok().map(pose_of),
        interact_down: keyboard_input.pressed(INTERACT_KEY),
    };

    for event in active.0.tick(time.delta(), frames.0, &input) {
        event_writer.send(SessionEvent(event));
    }
}
