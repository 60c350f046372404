use bevy::log::debug;
use bevy::math::Vec3;

use super::proximity::is_near;
use super::PlayerPose;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarryState {
    #[default]
    InWorld,
    Carried,
    /// Terminal resting state for items that are retired on delivery.
    Delivered,
}

/// Frame the item's position is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    World,
    Player,
}

/// Where the item ends up after a successful delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryPolicy {
    /// Back to its origin, ready to be picked up again.
    #[default]
    Recycle,
    /// Parked at its origin in `Delivered` and no longer interactable.
    Retire,
}

/// How `attach` places the item in its new frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Keep the current world position, re-expressed in the new frame.
    KeepWorld,
    /// Overwrite the position with this value in the new frame.
    Local(Vec3),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    /// Proximity precondition not met; nothing changed.
    TooFar,
    /// Called from the wrong state; nothing changed.
    Ignored,
}

/// The single item a player can pick up, carry, drop and deliver.
#[derive(Debug, Clone)]
pub struct Carryable {
    origin: Vec3,
    /// Position relative to `anchor`.
    local: Vec3,
    anchor: Anchor,
    state: CarryState,
    carry_offset: Vec3,
    ground_level: f32,
    policy: DeliveryPolicy,
}

impl Carryable {
    pub fn new(origin: Vec3, carry_offset: Vec3) -> Self {
        Self {
            origin,
            local: origin,
            anchor: Anchor::World,
            state: CarryState::InWorld,
            carry_offset,
            ground_level: 0.0,
            policy: DeliveryPolicy::default(),
        }
    }

    pub fn with_ground_level(mut self, ground_level: f32) -> Self {
        self.ground_level = ground_level;
        self
    }

    pub fn with_policy(mut self, policy: DeliveryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> CarryState {
        self.state
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn is_carried(&self) -> bool {
        self.state == CarryState::Carried
    }

    /// Position relative to the current anchor.
    pub fn local_position(&self) -> Vec3 {
        self.local
    }

    /// World position. Needs the player pose while attached to the player.
    pub fn world_position(&self, player: Option<&PlayerPose>) -> Option<Vec3> {
        match self.anchor {
            Anchor::World => Some(self.local),
            Anchor::Player => player.map(|pose| pose.to_world(self.local)),
        }
    }

    /// Moves the item into a new frame. This is the only place the anchor
    /// changes.
    pub fn attach(&mut self, anchor: Anchor, placement: Placement, player: &PlayerPose) {
        let local = match placement {
            Placement::Local(local) => local,
            Placement::KeepWorld => {
                let world = match self.anchor {
                    Anchor::World => self.local,
                    Anchor::Player => player.to_world(self.local),
                };
                match anchor {
                    Anchor::World => world,
                    Anchor::Player => player.to_local(world),
                }
            }
        };
        self.anchor = anchor;
        self.local = local;
    }

    pub fn pick_up(&mut self, player: &PlayerPose, radius: f32) -> Transition {
        if self.state != CarryState::InWorld {
            return Transition::Ignored;
        }
        if !is_near(self.local, player.translation, radius) {
            debug!(distance = self.local.distance(player.translation), "package too far to pick up");
            return Transition::TooFar;
        }
        self.attach(Anchor::Player, Placement::Local(self.carry_offset), player);
        self.state = CarryState::Carried;
        Transition::Applied
    }

    /// Releases the item where it currently is, resting on the ground.
    pub fn drop(&mut self, player: &PlayerPose) -> Transition {
        if self.state != CarryState::Carried {
            return Transition::Ignored;
        }
        self.attach(Anchor::World, Placement::KeepWorld, player);
        self.local.y = self.ground_level;
        self.state = CarryState::InWorld;
        Transition::Applied
    }

    pub fn deliver(&mut self, player: &PlayerPose, target: Vec3, radius: f32) -> Transition {
        if self.state != CarryState::Carried {
            return Transition::Ignored;
        }
        if !is_near(player.translation, target, radius) {
            return Transition::TooFar;
        }
        self.attach(Anchor::World, Placement::Local(self.origin), player);
        self.state = match self.policy {
            DeliveryPolicy::Recycle => CarryState::InWorld,
            DeliveryPolicy::Retire => CarryState::Delivered,
        };
        Transition::Applied
    }

    /// Back to origin, loose in the world.
    pub fn reset(&mut self) {
        self.anchor = Anchor::World;
        self.local = self.origin;
        self.state = CarryState::InWorld;
    }
}

#[cfg(test)]
mod tests {
    use bevy::math::Quat;

    use super::*;

    const OFFSET: Vec3 = Vec3::new(0.0, 1.5, 1.5);

    fn package() -> Carryable {
        Carryable::new(Vec3::new(0.0, 0.0, -10.0), OFFSET)
    }

    #[test]
    fn pick_up_requires_proximity() {
        let mut item = package();
        let far = PlayerPose::at(Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(item.pick_up(&far, 4.0), Transition::TooFar);
        assert_eq!(item.state(), CarryState::InWorld);
        assert_eq!(item.anchor(), Anchor::World);

        let near = PlayerPose::at(Vec3::new(1.0, 0.0, -9.0));
        assert_eq!(item.pick_up(&near, 4.0), Transition::Applied);
        assert_eq!(item.state(), CarryState::Carried);
        assert_eq!(item.anchor(), Anchor::Player);
        assert_eq!(item.local_position(), OFFSET);
        assert_eq!(item.world_position(Some(&near)), Some(Vec3::new(1.0, 1.5, -7.5)));
    }

    #[test]
    fn wrong_state_calls_are_no_ops() {
        let mut item = package();
        let player = PlayerPose::at(Vec3::new(0.0, 0.0, -10.0));

        assert_eq!(item.drop(&player), Transition::Ignored);
        assert_eq!(item.deliver(&player, Vec3::ZERO, 100.0), Transition::Ignored);
        assert_eq!(item.state(), CarryState::InWorld);
        assert_eq!(item.local_position(), item.origin());

        item.pick_up(&player, 4.0);
        assert_eq!(item.pick_up(&player, 4.0), Transition::Ignored);
        assert_eq!(item.state(), CarryState::Carried);
    }

    #[test]
    fn drop_keeps_world_position_on_the_ground() {
        let mut item = package();
        let mut player = PlayerPose::at(Vec3::new(0.0, 0.0, -10.0));
        item.pick_up(&player, 4.0);

        player.translation = Vec3::new(40.0, 2.0, 5.0);
        assert_eq!(item.drop(&player), Transition::Applied);
        assert_eq!(item.state(), CarryState::InWorld);
        assert_eq!(item.anchor(), Anchor::World);
        assert_eq!(item.local_position(), Vec3::new(40.0, 0.0, 6.5));
    }

    #[test]
    fn drop_accounts_for_player_rotation_and_scale() {
        let mut item = package();
        let mut player = PlayerPose::at(Vec3::new(0.0, 0.0, -10.0));
        item.pick_up(&player, 4.0);

        player.rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        player.scale = Vec3::splat(2.0);
        item.drop(&player);

        let dropped = item.local_position();
        assert!((dropped - Vec3::new(3.0, 0.0, -10.0)).length() < 1e-4, "{dropped:?}");
    }

    #[test]
    fn deliver_recycles_to_origin() {
        let mut item = package();
        let ship = Vec3::new(100.0, 1.0, 0.0);
        let mut player = PlayerPose::at(Vec3::new(0.0, 0.0, -10.0));
        item.pick_up(&player, 4.0);

        assert_eq!(item.deliver(&player, ship, 8.0), Transition::TooFar);
        assert!(item.is_carried());

        player.translation = Vec3::new(95.0, 0.0, 2.0);
        assert_eq!(item.deliver(&player, ship, 8.0), Transition::Applied);
        assert_eq!(item.state(), CarryState::InWorld);
        assert_eq!(item.anchor(), Anchor::World);
        assert_eq!(item.local_position(), item.origin());
    }

    #[test]
    fn retired_item_cannot_be_picked_up_again() {
        let mut item = package().with_policy(DeliveryPolicy::Retire);
        let player = PlayerPose::at(Vec3::new(0.0, 0.0, -10.0));
        item.pick_up(&player, 4.0);
        assert_eq!(item.deliver(&player, Vec3::new(0.0, 0.0, -12.0), 8.0), Transition::Applied);
        assert_eq!(item.state(), CarryState::Delivered);
        assert_eq!(item.pick_up(&player, 4.0), Transition::Ignored);
    }

    #[test]
    fn attach_keep_world_round_trips_through_player_frame() {
        let mut item = package();
        let player = PlayerPose {
            translation: Vec3::new(3.0, 0.0, -8.0),
            rotation: Quat::from_rotation_y(0.7),
            scale: Vec3::splat(3.0),
        };
        item.attach(Anchor::Player, Placement::KeepWorld, &player);
        let world = item.world_position(Some(&player)).unwrap();
        assert!((world - item.origin()).length() < 1e-4);

        item.attach(Anchor::World, Placement::KeepWorld, &player);
        assert!((item.local_position() - item.origin()).length() < 1e-4);
    }
}
