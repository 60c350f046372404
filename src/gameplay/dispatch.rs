use bevy::math::Vec3;

use super::carry::{CarryState, Carryable, Transition};
use super::collection::{Collectible, CollectibleId};
use super::proximity::is_near;
use super::PlayerPose;

/// Turns the held state of the interact key into single presses.
///
/// A press becomes pending on the frame the key goes down and stays pending
/// until taken, so holding the key never repeats the action.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractLatch {
    held: bool,
    pending: bool,
}

impl InteractLatch {
    pub fn observe(&mut self, down: bool) {
        if down && !self.held {
            self.pending = true;
        }
        self.held = down;
    }

    /// Consumes the pending press, if any.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Drops a pending press but remembers whether the key is held.
    pub fn clear(&mut self) {
        self.pending = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractOutcome {
    PickedUp,
    TooFar,
    Dropped { at: Vec3 },
    Delivered,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractRadii {
    pub pickup: f32,
    pub delivery: f32,
}

/// Resolves one interact press against the carryable's current state.
pub fn dispatch_interact(
    package: &mut Carryable,
    player: &PlayerPose,
    target: Vec3,
    radii: InteractRadii,
) -> InteractOutcome {
    match package.state() {
        CarryState::InWorld => match package.pick_up(player, radii.pickup) {
            Transition::Applied => InteractOutcome::PickedUp,
            Transition::TooFar => InteractOutcome::TooFar,
            Transition::Ignored => InteractOutcome::Ignored,
        },
        CarryState::Carried => {
            if is_near(player.translation, target, radii.delivery) {
                match package.deliver(player, target, radii.delivery) {
                    Transition::Applied => InteractOutcome::Delivered,
                    _ => InteractOutcome::Ignored,
                }
            } else {
                match package.drop(player) {
                    Transition::Applied => InteractOutcome::Dropped {
                        at: package.local_position(),
                    },
                    _ => InteractOutcome::Ignored,
                }
            }
        }
        CarryState::Delivered => InteractOutcome::Ignored,
    }
}

/// Removes every collectible within `radius` of the player and returns
/// their ids in spawn order.
pub fn scan_collectibles(
    items: &mut Vec<Collectible>,
    player: Vec3,
    radius: f32,
) -> Vec<CollectibleId> {
    let mut collected = Vec::new();
    items.retain(|item| {
        if is_near(item.position, player, radius) {
            collected.push(item.id);
            false
        } else {
            true
        }
    });
    collected
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADII: InteractRadii = InteractRadii {
        pickup: 4.0,
        delivery: 8.0,
    };
    const SHIP: Vec3 = Vec3::new(100.0, 1.0, 0.0);

    #[test]
    fn latch_fires_once_per_press() {
        let mut latch = InteractLatch::default();
        latch.observe(true);
        assert!(latch.take());

        latch.observe(true);
        latch.observe(true);
        assert!(!latch.take());

        latch.observe(false);
        assert!(!latch.take());
        latch.observe(true);
        assert!(latch.take());
    }

    #[test]
    fn cleared_latch_does_not_refire_while_held() {
        let mut latch = InteractLatch::default();
        latch.observe(true);
        latch.clear();
        latch.observe(true);
        assert!(!latch.take());
    }

    #[test]
    fn interact_cycle() {
        let mut package = Carryable::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 1.5, 1.5));

        let far = PlayerPose::at(Vec3::new(50.0, 0.0, 0.0));
        assert_eq!(dispatch_interact(&mut package, &far, SHIP, RADII), InteractOutcome::TooFar);

        let near = PlayerPose::at(Vec3::new(0.0, 0.0, -8.0));
        assert_eq!(dispatch_interact(&mut package, &near, SHIP, RADII), InteractOutcome::PickedUp);

        let walking = PlayerPose::at(Vec3::new(30.0, 0.0, 0.0));
        assert_eq!(
            dispatch_interact(&mut package, &walking, SHIP, RADII),
            InteractOutcome::Dropped {
                at: Vec3::new(30.0, 0.0, 1.5)
            }
        );

        let at_drop = PlayerPose::at(Vec3::new(31.0, 0.0, 1.0));
        assert_eq!(dispatch_interact(&mut package, &at_drop, SHIP, RADII), InteractOutcome::PickedUp);

        let at_ship = PlayerPose::at(Vec3::new(94.0, 0.0, 0.0));
        assert_eq!(dispatch_interact(&mut package, &at_ship, SHIP, RADII), InteractOutcome::Delivered);
        assert_eq!(package.local_position(), package.origin());
        assert!(!package.is_carried());
    }

    #[test]
    fn scan_removes_everything_in_range_at_once() {
        let mut items: Vec<Collectible> = [
            Vec3::new(0.0, 0.6, 0.0),
            Vec3::new(1.0, 0.6, 0.0),
            Vec3::new(10.0, 0.6, 0.0),
        ]
        .into_iter()
        .enumerate()
        .map(|(id, position)| Collectible {
            id: id as CollectibleId,
            position,
        })
        .collect();

        let collected = scan_collectibles(&mut items, Vec3::new(0.5, 0.6, 0.0), 2.0);
        assert_eq!(collected, vec![0, 1]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 2);
    }
}
