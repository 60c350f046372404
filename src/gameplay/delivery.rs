use std::time::Duration;

use bevy::log::{debug, info};
use bevy::math::Vec3;

use super::carry::{CarryState, Carryable, DeliveryPolicy};
use super::dispatch::{dispatch_interact, InteractLatch, InteractOutcome, InteractRadii};
use super::proximity::{is_near, Indicators};
use super::session::{DeliverySummary, Outcome, SessionPhase, SessionTracker};
use super::timer::CountdownTimer;
use super::{FrameInput, GameEvent, PlayerPose};

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRules {
    pub time_limit: Duration,
    pub pickup_radius: f32,
    pub delivery_radius: f32,
    /// Where the package sits relative to the player while carried.
    pub carry_offset: Vec3,
    pub ground_level: f32,
    pub policy: DeliveryPolicy,
    /// Indicators are refreshed on frames whose index is a multiple of this.
    pub indicator_interval: u32,
}

/// Pick-up-and-deliver loop: ferry one package to the target as many times
/// as possible before the timer runs out.
///
/// The package and the target are registered once the scene has spawned
/// them; until then every frame is a no-op apart from the countdown.
#[derive(Debug, Clone)]
pub struct DeliveryGame {
    rules: DeliveryRules,
    package: Option<Carryable>,
    target: Option<Vec3>,
    timer: CountdownTimer,
    tracker: SessionTracker,
    latch: InteractLatch,
    indicators: Indicators,
    clock: Duration,
}

impl DeliveryGame {
    pub fn new(rules: DeliveryRules) -> Self {
        Self {
            timer: CountdownTimer::new(rules.time_limit),
            tracker: SessionTracker::new(None),
            package: None,
            target: None,
            latch: InteractLatch::default(),
            indicators: Indicators::default(),
            clock: Duration::ZERO,
            rules,
        }
    }

    pub fn register_package(&mut self, origin: Vec3) {
        self.package = Some(
            Carryable::new(origin, self.rules.carry_offset)
                .with_ground_level(self.rules.ground_level)
                .with_policy(self.rules.policy),
        );
    }

    pub fn register_target(&mut self, position: Vec3) {
        self.target = Some(position);
    }

    pub fn package(&self) -> Option<&Carryable> {
        self.package.as_ref()
    }

    pub fn indicators(&self) -> Indicators {
        self.indicators
    }

    pub fn phase(&self) -> SessionPhase {
        self.tracker.phase()
    }

    pub fn delivered(&self) -> u32 {
        self.tracker.count()
    }

    pub fn remaining_time(&self) -> Duration {
        self.timer.remaining(self.clock)
    }

    /// Resets everything and starts the countdown.
    pub fn start(&mut self) {
        self.reset();
        self.timer.start(self.clock);
        self.tracker.begin();
        info!(limit = ?self.rules.time_limit, "delivery session started");
    }

    /// Stops the timer, clears the score and returns the package to its
    /// origin in one step.
    pub fn reset(&mut self) {
        self.timer.reset(self.rules.time_limit);
        self.tracker.reset();
        self.latch.clear();
        self.indicators = Indicators::default();
        if let Some(package) = self.package.as_mut() {
            package.reset();
        }
    }

    pub fn tick(&mut self, delta: Duration, frame_index: u32, input: &FrameInput) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.tracker.phase() != SessionPhase::Running {
            return events;
        }
        self.clock += delta;

        if self.timer.poll_expiry(self.clock) {
            let summary = DeliverySummary::new(
                self.tracker.count(),
                self.timer.limit(),
                self.timer.remaining(self.clock),
            );
            let outcome = Outcome::Delivery(summary);
            if self.tracker.finish(outcome.clone()) {
                events.push(GameEvent::Ended(outcome));
            }
            return events;
        }

        self.latch.observe(input.interact_down);
        let (Some(player), Some(package), Some(target)) =
            (input.player, self.package.as_mut(), self.target)
        else {
            self.latch.clear();
            return events;
        };

        if frame_index % self.rules.indicator_interval.max(1) == 0 {
            self.indicators = evaluate_indicators(package, &player, target, &self.rules);
        }

        if !self.latch.take() {
            return events;
        }
        let radii = InteractRadii {
            pickup: self.rules.pickup_radius,
            delivery: self.rules.delivery_radius,
        };
        match dispatch_interact(package, &player, target, radii) {
            InteractOutcome::PickedUp => {
                debug!("package picked up");
                events.push(GameEvent::PickedUp);
            }
            InteractOutcome::TooFar => {
                debug!("too far from the package");
                events.push(GameEvent::TooFar);
            }
            InteractOutcome::Dropped { at } => {
                debug!(?at, "package dropped");
                events.push(GameEvent::Dropped { at });
            }
            InteractOutcome::Delivered => {
                if let Some(count) = self.tracker.record() {
                    info!(count, "package delivered");
                    events.push(GameEvent::Delivered { count });
                }
            }
            InteractOutcome::Ignored => {}
        }
        events
    }
}

fn evaluate_indicators(
    package: &Carryable,
    player: &PlayerPose,
    target: Vec3,
    rules: &DeliveryRules,
) -> Indicators {
    match package.state() {
        CarryState::InWorld => Indicators::for_loose_package(is_near(
            package.local_position(),
            player.translation,
            rules.pickup_radius,
        )),
        CarryState::Carried => Indicators::for_carried_package(is_near(
            player.translation,
            target,
            rules.delivery_radius,
        )),
        CarryState::Delivered => Indicators::for_retired_package(),
    }
}
