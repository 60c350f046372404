mod camera;
mod config;
mod game_state;
mod gameplay;
mod hud;
mod menu;
mod player;
mod session;
mod world;

use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
};

use camera::CameraPlugin;
use config::{GameConfig, CONFIG_PATH};
use game_state::{AppState, SceneKind};
use hud::HudPlugin;
use menu::MenuPlugin;
use player::PlayerPlugin;
use session::SessionPlugin;
use world::WorldPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Nightfall".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            FrameTimeDiagnosticsPlugin::default(),
            LogDiagnosticsPlugin::default(),
        ))
        .insert_resource(GameConfig::load_or_default(CONFIG_PATH))
        .init_state::<AppState>()
        .init_resource::<SceneKind>()
        .add_plugins((
            MenuPlugin,
            SessionPlugin,
            WorldPlugin,
            PlayerPlugin,
            CameraPlugin,
            HudPlugin,
        ))
        .run();
}
