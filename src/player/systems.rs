use bevy::prelude::*;

use super::components::{Locomotion, MovementFrame, Player, Velocity};

pub fn player_movement(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&Transform, &Locomotion, &mut Velocity), With<Player>>,
) {
    let Ok((transform, locomotion, mut velocity)) = query.get_single_mut() else {
        return;
    };

    // Get movement direction from WASD
    let mut direction = Vec2::ZERO;

    if keyboard_input.pressed(KeyCode::KeyW) {
        direction.y += 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyS) {
        direction.y -= 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyA) {
        direction.x -= 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyD) {
        direction.x += 1.0;
    }

    // Normalize diagonal movement
    let direction = direction.normalize_or_zero();

    let (forward, right) = match locomotion.frame {
        MovementFrame::Facing => {
            // Only yaw matters for walking
            let forward = transform.forward();
            let forward_flat = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
            let right_flat = Vec3::new(-forward.z, 0.0, forward.x).normalize_or_zero();
            (forward_flat, right_flat)
        }
        MovementFrame::WorldAxes => (Vec3::NEG_Z, Vec3::X),
    };

    let move_direction = forward * direction.y + right * direction.x;

    velocity.0.x = move_direction.x * locomotion.speed;
    velocity.0.z = move_direction.z * locomotion.speed;
}

pub fn apply_velocity(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &Locomotion, &mut Velocity), With<Player>>,
) {
    let Ok((mut transform, locomotion, mut velocity)) = query.get_single_mut() else {
        return;
    };

    transform.translation += velocity.0 * time.delta_secs();

    // Stay on the ground
    transform.translation.y = locomotion.rest_height;
    velocity.0.y = 0.0;

    if let Some(bound) = locomotion.bound {
        transform.translation.x = transform.translation.x.clamp(-bound, bound);
        transform.translation.z = transform.translation.z.clamp(-bound, bound);
    }
}
