use bevy::prelude::*;

/// Main application states controlling game flow.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    MainMenu,
    InGame,
}

/// Which scene the next session plays.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneKind {
    #[default]
    HalloweenForest,
    PackageDelivery,
}

/// Marker for everything spawned for a session. Root entities carrying it
/// are despawned with their children when the game is left.
#[derive(Component)]
pub struct SceneEntity;

pub fn cleanup_scene(mut commands: Commands, query: Query<Entity, (With<SceneEntity>, Without<Parent>)>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
