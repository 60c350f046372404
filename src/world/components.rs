use bevy::prelude::*;

use crate::gameplay::CollectibleId;

/// A pumpkin in the forest, linked to its collectible in the rules.
#[derive(Component)]
pub struct Pumpkin(pub CollectibleId);

/// The carryable package.
#[derive(Component)]
pub struct Package {
    /// World-space scale while resting on the ground.
    pub scale: f32,
}

/// The ship the package is delivered to.
#[derive(Component)]
pub struct DeliveryTarget;

/// Which object a marker or prompt belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerOwner {
    Package,
    Target,
}

/// Ground disc that lights up when the player can interact.
#[derive(Component)]
pub struct ProximityMarker {
    pub owner: MarkerOwner,
    pub idle_color: LinearRgba,
    pub ready_color: LinearRgba,
}
