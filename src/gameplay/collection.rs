use std::time::Duration;

use bevy::log::{debug, info};
use bevy::math::Vec3;

use super::dispatch::scan_collectibles;
use super::session::{resolve_collection, SessionPhase, SessionTracker};
use super::timer::CountdownTimer;
use super::{FrameInput, GameEvent};

pub type CollectibleId = u32;

/// An item removed for good as soon as the player walks into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collectible {
    pub id: CollectibleId,
    pub position: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionRules {
    pub time_limit: Duration,
    pub pickup_radius: f32,
    /// Proximity scan runs on frames whose index is a multiple of this.
    pub scan_interval: u32,
}

/// Scatter-and-gather loop: walk into every collectible before time runs out.
#[derive(Debug, Clone)]
pub struct CollectionGame {
    rules: CollectionRules,
    spawned: Vec<Collectible>,
    remaining: Vec<Collectible>,
    timer: CountdownTimer,
    tracker: SessionTracker,
    clock: Duration,
}

impl CollectionGame {
    /// Ids are assigned in iteration order, starting at zero.
    pub fn new(rules: CollectionRules, positions: impl IntoIterator<Item = Vec3>) -> Self {
        let spawned: Vec<Collectible> = positions
            .into_iter()
            .enumerate()
            .map(|(index, position)| Collectible {
                id: index as CollectibleId,
                position,
            })
            .collect();
        let total = spawned.len() as u32;
        Self {
            timer: CountdownTimer::new(rules.time_limit),
            tracker: SessionTracker::new(Some(total)),
            remaining: spawned.clone(),
            spawned,
            rules,
            clock: Duration::ZERO,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.tracker.phase()
    }

    pub fn collected(&self) -> u32 {
        self.tracker.count()
    }

    pub fn total(&self) -> u32 {
        self.spawned.len() as u32
    }

    pub fn remaining_items(&self) -> &[Collectible] {
        &self.remaining
    }

    pub fn remaining_time(&self) -> Duration {
        self.timer.remaining(self.clock)
    }

    /// Resets everything and starts the countdown.
    pub fn start(&mut self) {
        self.reset();
        self.timer.start(self.clock);
        self.tracker.begin();
        info!(total = self.total(), limit = ?self.rules.time_limit, "collection session started");
    }

    pub fn reset(&mut self) {
        self.timer.reset(self.rules.time_limit);
        self.tracker.reset();
        self.remaining = self.spawned.clone();
    }

    pub fn tick(&mut self, delta: Duration, frame_index: u32, input: &FrameInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.tracker.phase() != SessionPhase::Running {
            return events;
        }
        self.clock += delta;

        if let Some(player) = input.player {
            if frame_index % self.rules.scan_interval.max(1) == 0 {
                let total = self.total();
                for id in scan_collectibles(&mut self.remaining, player.translation, self.rules.pickup_radius) {
                    if let Some(count) = self.tracker.record() {
                        debug!(id, count, total, "collectible gathered");
                        events.push(GameEvent::Collected { id, count, total });
                    }
                }
            }
        }

        let expired = self.timer.poll_expiry(self.clock);
        if let Some(outcome) = resolve_collection(self.tracker.count(), self.total(), expired) {
            self.timer.stop(self.clock);
            if self.tracker.finish(outcome.clone()) {
                events.push(GameEvent::Ended(outcome));
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::session::Outcome;
    use crate::gameplay::PlayerPose;

    const FRAME: Duration = Duration::from_millis(100);

    fn rules() -> CollectionRules {
        CollectionRules {
            time_limit: Duration::from_secs(90),
            pickup_radius: 2.0,
            scan_interval: 6,
        }
    }

    fn twelve_in_a_row() -> CollectionGame {
        CollectionGame::new(rules(), (0..12).map(|i| Vec3::new(i as f32 * 10.0, 0.6, 0.0)))
    }

    fn standing_at(position: Vec3) -> FrameInput {
        FrameInput {
            player: Some(PlayerPose::at(position)),
            interact_down: false,
        }
    }

    #[test]
    fn approaching_one_collectible_removes_only_it() {
        let mut game = twelve_in_a_row();
        game.start();

        let events = game.tick(FRAME, 0, &standing_at(Vec3::new(50.5, 1.0, 0.0)));
        assert_eq!(events, vec![GameEvent::Collected { id: 5, count: 1, total: 12 }]);
        assert_eq!(game.collected(), 1);
        assert_eq!(game.remaining_items().len(), 11);
        assert!(game.remaining_items().iter().all(|item| item.id != 5));
    }

    #[test]
    fn scan_only_runs_on_sampled_frames() {
        let mut game = twelve_in_a_row();
        game.start();
        let input = standing_at(Vec3::new(0.0, 0.6, 0.0));

        assert!(game.tick(FRAME, 1, &input).is_empty());
        assert!(game.tick(FRAME, 5, &input).is_empty());
        assert_eq!(game.tick(FRAME, 6, &input).len(), 1);
    }

    #[test]
    fn missing_player_skips_scan_but_timer_runs() {
        let mut game = twelve_in_a_row();
        game.start();
        let events = game.tick(Duration::from_secs(10), 0, &FrameInput::default());
        assert!(events.is_empty());
        assert_eq!(game.remaining_time(), Duration::from_secs(80));
        assert_eq!(game.remaining_items().len(), 12);
    }

    #[test]
    fn gathering_everything_wins() {
        let mut game = CollectionGame::new(rules(), [Vec3::new(0.0, 0.6, 0.0), Vec3::new(1.0, 0.6, 0.0)]);
        game.start();

        let events = game.tick(FRAME, 0, &standing_at(Vec3::new(0.5, 0.6, 0.0)));
        assert_eq!(events.len(), 3);
        assert_eq!(events[2], GameEvent::Ended(Outcome::Victory { collected: 2 }));
        assert_eq!(game.phase(), SessionPhase::Terminal);

        let later = game.tick(Duration::from_secs(200), 6, &standing_at(Vec3::ZERO));
        assert!(later.is_empty());
    }

    #[test]
    fn running_out_of_time_ends_once() {
        let mut game = twelve_in_a_row();
        game.start();
        let input = standing_at(Vec3::new(5.0, 0.6, 0.0));

        assert!(game.tick(Duration::from_secs(89), 1, &input).is_empty());
        let events = game.tick(Duration::from_secs(2), 2, &input);
        assert_eq!(events, vec![GameEvent::Ended(Outcome::TimeExpired { collected: 0, total: 12 })]);
        assert_eq!(game.remaining_time(), Duration::ZERO);

        for frame in 3..10 {
            assert!(game.tick(FRAME, frame, &input).is_empty());
        }
    }

    #[test]
    fn start_restores_collectibles() {
        let mut game = twelve_in_a_row();
        game.start();
        game.tick(FRAME, 0, &standing_at(Vec3::new(0.0, 0.6, 0.0)));
        assert_eq!(game.remaining_items().len(), 11);

        game.start();
        assert_eq!(game.remaining_items().len(), 12);
        assert_eq!(game.collected(), 0);
        assert_eq!(game.remaining_time(), Duration::from_secs(90));
    }
}
