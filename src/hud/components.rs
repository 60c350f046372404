use bevy::prelude::*;

use crate::world::components::MarkerOwner;

/// Marker for the in-game UI camera.
#[derive(Component)]
pub struct HudCamera;

/// Timer and score line.
#[derive(Component)]
pub struct ScoreText;

/// "Status: ..." hint line.
#[derive(Component)]
pub struct StatusText;

/// "Press E" prompt for one interactable.
#[derive(Component)]
pub struct InteractPrompt(pub MarkerOwner);

/// Marker for the notification container in the top-left.
#[derive(Component)]
pub struct NotificationRoot;

/// Marker for a notification text element with remaining display time.
#[derive(Component)]
pub struct NotificationText(pub f32);

/// End-of-session overlay.
#[derive(Component)]
pub struct SummaryRoot;

#[derive(Component)]
pub struct PlayAgainButton;
