//! Engine-agnostic game rules.
//!
//! Nothing in here touches the ECS. The scene feeds a [`FrameInput`] into
//! [`GameSession::tick`] once per rendered frame and reacts to the returned
//! [`GameEvent`]s; tests drive the same entry point with a fixed clock.

pub mod carry;
pub mod collection;
pub mod delivery;
pub mod dispatch;
pub mod proximity;
pub mod session;
pub mod timer;

use std::time::Duration;

use bevy::math::{Quat, Vec3};

pub use carry::{Anchor, DeliveryPolicy};
pub use collection::{CollectibleId, CollectionGame, CollectionRules};
pub use delivery::{DeliveryGame, DeliveryRules};
pub use proximity::MarkerTone;
pub use session::{Outcome, SessionPhase};

/// Player transform as reported by the scene for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerPose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl PlayerPose {
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// Maps a point from the player's local frame into world space.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.translation + self.rotation * (self.scale * local)
    }

    pub fn to_local(&self, world: Vec3) -> Vec3 {
        (self.rotation.inverse() * (world - self.translation)) / self.scale
    }
}

/// What the scene knows this frame. `player` is `None` until it has spawned.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub player: Option<PlayerPose>,
    /// Raw held state of the interact key; edges are detected by the game.
    pub interact_down: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Collected { id: CollectibleId, count: u32, total: u32 },
    PickedUp,
    TooFar,
    Dropped { at: Vec3 },
    Delivered { count: u32 },
    Ended(Outcome),
}

/// One of the two game loops behind a single entry point.
#[derive(Debug, Clone)]
pub enum GameSession {
    Collection(CollectionGame),
    Delivery(DeliveryGame),
}

impl GameSession {
    pub fn start(&mut self) {
        match self {
            GameSession::Collection(game) => game.start(),
            GameSession::Delivery(game) => game.start(),
        }
    }

    pub fn reset(&mut self) {
        match self {
            GameSession::Collection(game) => game.reset(),
            GameSession::Delivery(game) => game.reset(),
        }
    }

    pub fn tick(&mut self, delta: Duration, frame_index: u32, input: &FrameInput) -> Vec<GameEvent> {
        match self {
            GameSession::Collection(game) => game.tick(delta, frame_index, input),
            GameSession::Delivery(game) => game.tick(delta, frame_index, input),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match self {
            GameSession::Collection(game) => game.phase(),
            GameSession::Delivery(game) => game.phase(),
        }
    }

    pub fn remaining_time(&self) -> Duration {
        match self {
            GameSession::Collection(game) => game.remaining_time(),
            GameSession::Delivery(game) => game.remaining_time(),
        }
    }

    /// Collected or delivered so far.
    pub fn score(&self) -> u32 {
        match self {
            GameSession::Collection(game) => game.collected(),
            GameSession::Delivery(game) => game.delivered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_wrapper_delegates() {
        let rules = CollectionRules {
            time_limit: Duration::from_secs(5),
            pickup_radius: 2.0,
            scan_interval: 1,
        };
        let mut session = GameSession::Collection(CollectionGame::new(rules, [Vec3::new(9.0, 0.0, 0.0)]));
        assert_eq!(session.phase(), SessionPhase::NotStarted);

        session.start();
        assert_eq!(session.phase(), SessionPhase::Running);
        let events = session.tick(Duration::from_secs(1), 0, &FrameInput {
            player: Some(PlayerPose::at(Vec3::new(8.5, 0.0, 0.0))),
            interact_down: false,
        });
        assert_eq!(events.len(), 2);
        assert_eq!(session.score(), 1);
        assert_eq!(session.phase(), SessionPhase::Terminal);

        session.reset();
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert_eq!(session.score(), 0);
        assert_eq!(session.remaining_time(), Duration::from_secs(5));
    }
}
