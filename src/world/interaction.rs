use bevy::prelude::*;

use super::components::{MarkerOwner, Package, ProximityMarker, Pumpkin};
use crate::gameplay::{Anchor, GameEvent, GameSession, MarkerTone};
use crate::player::Player;
use crate::session::{ActiveSession, SessionEvent};

/// Removes pumpkins the rules report as gathered.
pub fn despawn_collected(
    mut commands: Commands,
    mut events: EventReader<SessionEvent>,
    pumpkins: Query<(Entity, &Pumpkin)>,
) {
    for event in events.read() {
        let GameEvent::Collected { id, .. } = event.0 else {
            continue;
        };
        for (entity, pumpkin) in pumpkins.iter() {
            if pumpkin.0 == id {
                commands.entity(entity).despawn_recursive();
            }
        }
    }
}

/// Re-parents the package to match its anchor in the rules after a pick up,
/// drop or delivery.
pub fn sync_package_anchor(
    mut commands: Commands,
    mut events: EventReader<SessionEvent>,
    active: Option<Res<ActiveSession>>,
    packages: Query<(Entity, &Package)>,
    players: Query<(Entity, &Transform), With<Player>>,
) {
    let moved = events.read().any(|event| {
        matches!(
            event.0,
            GameEvent::PickedUp | GameEvent::Dropped { .. } | GameEvent::Delivered { .. }
        )
    });
    if !moved {
        return;
    }
    let Some(active) = active else {
        return;
    };
    let GameSession::Delivery(game) = &active.0 else {
        return;
    };
    let (Some(carryable), Ok((entity, package))) = (game.package(), packages.get_single()) else {
        return;
    };

    let local = carryable.local_position();
    match carryable.anchor() {
        Anchor::Player => {
            let Ok((player, player_transform)) = players.get_single() else {
                return;
            };
            // Keep the package's world size while under the scaled player
            let scale = Vec3::splat(package.scale) / player_transform.scale;
            commands
                .entity(entity)
                .set_parent(player)
                .insert(Transform::from_translation(local).with_scale(scale));
        }
        Anchor::World => {
            commands
                .entity(entity)
                .remove_parent()
                .insert(Transform::from_translation(local).with_scale(Vec3::splat(package.scale)));
        }
    }
}

/// Recolors and hides the ground markers from the rules' indicator state.
pub fn apply_marker_tones(
    active: Option<Res<ActiveSession>>,
    mut markers: Query<(&ProximityMarker, &MeshMaterial3d<StandardMaterial>, &mut Visibility)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(active) = active else {
        return;
    };
    let GameSession::Delivery(game) = &active.0 else {
        return;
    };
    let indicators = game.indicators();

    for (marker, material_handle, mut visibility) in markers.iter_mut() {
        let tone = match marker.owner {
            MarkerOwner::Package => indicators.package_marker,
            MarkerOwner::Target => indicators.target_marker,
        };
        *visibility = if tone == MarkerTone::Hidden {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.emissive = match tone {
                MarkerTone::Ready => marker.ready_color,
                _ => marker.idle_color,
            };
        }
    }
}
