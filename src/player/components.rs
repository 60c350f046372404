use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Velocity component for movement.
#[derive(Component, Default)]
pub struct Velocity(pub Vec3);

/// How WASD maps onto the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementFrame {
    /// Relative to where the player is looking (first person).
    Facing,
    /// Fixed world axes: W is -Z, D is +X.
    WorldAxes,
}

/// Movement parameters for the player entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct Locomotion {
    pub frame: MovementFrame,
    pub speed: f32,
    /// Height the player is pinned to above the ground.
    pub rest_height: f32,
    /// Movement is clamped to `[-bound, bound]` on X and Z when set.
    pub bound: Option<f32>,
}

/// Camera controller for first-person mouse look.
#[derive(Component)]
pub struct CameraController {
    pub pitch: f32,
    pub yaw: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            yaw: std::f32::consts::PI, // Start facing -Z direction
        }
    }
}

// First-person eye height in the forest
pub const PLAYER_HEIGHT: f32 = 1.8;

// Mouse look constants
pub const MOUSE_SENSITIVITY: f32 = 0.003;
pub const PITCH_LIMIT: f32 = 1.5; // ~86 degrees, just under 90
