use bevy::prelude::*;

use super::components::{DeliveryTarget, MarkerOwner, Package, ProximityMarker, Pumpkin};
use crate::config::GameConfig;
use crate::game_state::{SceneEntity, SceneKind};
use crate::gameplay::GameSession;
use crate::player::{CameraController, Locomotion, MovementFrame, Player, Velocity, PLAYER_HEIGHT};
use crate::session::ActiveSession;

const MARKER_IDLE: LinearRgba = LinearRgba::rgb(1.0, 0.5, 0.0);
const MARKER_READY: LinearRgba = LinearRgba::rgb(0.0, 1.0, 0.0);
const TARGET_IDLE: LinearRgba = LinearRgba::rgb(0.0, 1.0, 0.0);
const TARGET_READY: LinearRgba = LinearRgba::rgb(0.0, 2.0, 0.0);

pub fn setup_world(
    mut commands: Commands,
    kind: Res<SceneKind>,
    config: Res<GameConfig>,
    mut active: ResMut<ActiveSession>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    match (*kind, &mut active.0) {
        (SceneKind::HalloweenForest, GameSession::Collection(game)) => {
            let positions: Vec<_> = game
                .remaining_items()
                .iter()
                .map(|item| (item.id, item.position))
                .collect();
            setup_forest(&mut commands, &config, &positions, &mut meshes, &mut materials);
        }
        (SceneKind::PackageDelivery, GameSession::Delivery(game)) => {
            let delivery = &config.delivery;
            setup_delivery(&mut commands, &config, &mut meshes, &mut materials);
            game.register_package(delivery.package.translation());
            game.register_target(delivery.ship.translation());
        }
        _ => warn!("session does not match scene {:?}", *kind),
    }
}

fn setup_forest(
    commands: &mut Commands,
    config: &GameConfig,
    pumpkins: &[(u32, Vec3)],
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let collection = &config.collection;
    let ground_size = collection.arena_half_extent * 2.4;

    commands.insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.05)));
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.4, 0.45, 0.7),
        brightness: 80.0,
    });

    let ground_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.08, 0.14, 0.06),
        perceptual_roughness: 1.0,
        ..default()
    });
    let pumpkin_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.45, 0.0),
        emissive: LinearRgba::rgb(0.6, 0.2, 0.0),
        ..default()
    });
    let stem_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.3, 0.2, 0.1),
        ..default()
    });
    let body_mesh = meshes.add(Sphere::new(0.5));
    let stem_mesh = meshes.add(Cylinder::new(0.1, 0.4));

    // Ground
    commands.spawn((
        SceneEntity,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ground_size, ground_size))),
        MeshMaterial3d(ground_material),
        Transform::default(),
    ));

    // Moonlight
    commands.spawn((
        SceneEntity,
        DirectionalLight {
            illuminance: 800.0,
            color: Color::srgb(0.7, 0.75, 1.0),
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(-30.0, 60.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    for &(id, position) in pumpkins {
        commands
            .spawn((
                SceneEntity,
                Pumpkin(id),
                Transform::from_translation(position),
                Visibility::default(),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(body_mesh.clone()),
                    MeshMaterial3d(pumpkin_material.clone()),
                    Transform::from_scale(Vec3::new(1.6, 1.2, 1.6)),
                ));
                parent.spawn((
                    Mesh3d(stem_mesh.clone()),
                    MeshMaterial3d(stem_material.clone()),
                    Transform::from_xyz(0.0, 0.8, 0.0),
                ));
                // Soft glow
                parent.spawn((
                    PointLight {
                        color: Color::srgb(1.0, 0.5, 0.2),
                        intensity: 60_000.0,
                        range: 8.0,
                        ..default()
                    },
                    Transform::from_xyz(0.0, 0.5, 0.0),
                ));
            });
    }

    // Player (Camera)
    let spawn = Vec3::from_array(collection.player_spawn);
    commands.spawn((
        SceneEntity,
        Player,
        CameraController::default(),
        Velocity::default(),
        Locomotion {
            frame: MovementFrame::Facing,
            speed: collection.player_speed,
            rest_height: spawn.y + PLAYER_HEIGHT,
            bound: Some(collection.arena_half_extent),
        },
        Camera3d::default(),
        Transform::from_xyz(spawn.x, spawn.y + PLAYER_HEIGHT, spawn.z)
            .looking_at(Vec3::new(spawn.x, spawn.y + PLAYER_HEIGHT, spawn.z - 1.0), Vec3::Y),
    ));
}

fn setup_delivery(
    commands: &mut Commands,
    config: &GameConfig,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let delivery = &config.delivery;

    commands.insert_resource(ClearColor(Color::BLACK));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });

    // Station
    commands.spawn((
        SceneEntity,
        Mesh3d(meshes.add(Cuboid::new(24.0, 6.0, 24.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.55, 0.58, 0.62),
            metallic: 0.6,
            ..default()
        })),
        delivery.station.transform(),
    ));

    // Ship, with its delivery ring
    let ship_ring = materials.add(StandardMaterial {
        base_color: Color::srgba(0.0, 1.0, 0.0, 0.5),
        emissive: TARGET_IDLE,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    commands
        .spawn((
            SceneEntity,
            DeliveryTarget,
            Mesh3d(meshes.add(Cuboid::new(3.0, 1.5, 6.0))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.3, 0.32, 0.4),
                metallic: 0.8,
                ..default()
            })),
            delivery.ship.transform(),
        ))
        .with_children(|parent| {
            parent.spawn((
                ProximityMarker {
                    owner: MarkerOwner::Target,
                    idle_color: TARGET_IDLE,
                    ready_color: TARGET_READY,
                },
                Mesh3d(meshes.add(Cylinder::new(delivery.delivery_radius / delivery.ship.scale, 0.02))),
                MeshMaterial3d(ship_ring),
                Transform::from_xyz(0.0, -0.2, 0.0),
                Visibility::default(),
            ));
        });

    let ship_light = delivery.ship.translation();
    commands.spawn((
        SceneEntity,
        PointLight {
            intensity: 2_000_000.0,
            range: 60.0,
            ..default()
        },
        Transform::from_translation(ship_light + Vec3::Y * 10.0),
    ));

    // Package, with its pickup ring
    let package_ring = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 0.5, 0.0, 0.6),
        emissive: MARKER_IDLE,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    commands
        .spawn((
            SceneEntity,
            Package {
                scale: delivery.package.scale,
            },
            Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.6))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.75, 0.45, 0.15),
                ..default()
            })),
            delivery.package.transform(),
        ))
        .with_children(|parent| {
            parent.spawn((
                ProximityMarker {
                    owner: MarkerOwner::Package,
                    idle_color: MARKER_IDLE,
                    ready_color: MARKER_READY,
                },
                Mesh3d(meshes.add(Cylinder::new(delivery.pickup_radius / delivery.package.scale, 0.02))),
                MeshMaterial3d(package_ring),
                Transform::from_xyz(0.0, -0.45, 0.0),
                Visibility::default(),
            ));
        });

    // Player body
    commands.spawn((
        SceneEntity,
        Player,
        Velocity::default(),
        Locomotion {
            frame: MovementFrame::WorldAxes,
            speed: delivery.player_speed,
            rest_height: delivery.ground_level,
            bound: None,
        },
        delivery.player.transform(),
        Visibility::default(),
    ))
    .with_children(|parent| {
        // Feet at the entity origin
        parent.spawn((
            Mesh3d(meshes.add(Capsule3d::new(0.3, 1.0))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.85, 0.4, 0.2),
                ..default()
            })),
            Transform::from_xyz(0.0, 0.8, 0.0),
        ));
    });

    // Overview camera above the midpoint between station and ship
    let station = delivery.station.translation();
    let ship = delivery.ship.translation();
    let center = Vec3::new((station.x + ship.x) / 2.0, 5.0, (station.z + ship.z) / 2.0);
    commands.spawn((
        SceneEntity,
        Camera3d::default(),
        Transform::from_translation(center + Vec3::new(0.0, 25.0, 76.0)).looking_at(center, Vec3::Y),
    ));
}
