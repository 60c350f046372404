use bevy::core::FrameCount;
use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;

use super::components::*;
use super::format;
use crate::config::GameConfig;
use crate::game_state::{AppState, SceneEntity, SceneKind};
use crate::gameplay::{GameEvent, GameSession, SessionPhase};
use crate::menu::styles::*;
use crate::session::{ActiveSession, SessionEvent};
use crate::world::components::MarkerOwner;

/// Duration in seconds for notifications to display.
const NOTIFICATION_DURATION: f32 = 3.0;

const HUD_TEXT_COLOR: Color = Color::srgb(1.0, 0.85, 0.64);
const HELP_TEXT_COLOR: Color = Color::srgb(0.7, 0.77, 1.0);

fn hud_text_style(font_size: f32) -> TextFont {
    TextFont {
        font_size,
        ..default()
    }
}

pub fn setup_hud(mut commands: Commands, kind: Res<SceneKind>) {
    // UI camera drawn on top of the scene
    commands.spawn((
        SceneEntity,
        HudCamera,
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
    ));

    let (title, help) = match *kind {
        SceneKind::HalloweenForest => (
            "Halloween Forest - gather the pumpkins before midnight",
            "WASD to move, mouse to look. Walk into the pumpkins to gather them.",
        ),
        SceneKind::PackageDelivery => (
            "Package Delivery - bring the package to the ship",
            "WASD to move. Press E to pick up, drop or deliver the package.",
        ),
    };

    commands
        .spawn((
            SceneEntity,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::all(Val::Px(10.0)),
                position_type: PositionType::Absolute,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(8.0),
                    ..default()
                })
                .with_children(|top| {
                    top.spawn((Text::new(title), hud_text_style(20.0), TextColor(HUD_TEXT_COLOR)));
                    top.spawn((
                        ScoreText,
                        Text::new(""),
                        hud_text_style(18.0),
                        TextColor(HUD_TEXT_COLOR),
                    ));
                    if *kind == SceneKind::PackageDelivery {
                        top.spawn((
                            StatusText,
                            Text::new(""),
                            hud_text_style(18.0),
                            TextColor(HUD_TEXT_COLOR),
                        ));
                        for (owner, label) in [
                            (MarkerOwner::Package, "Press E to pick up"),
                            (MarkerOwner::Target, "Press E to deliver"),
                        ] {
                            top.spawn((
                                InteractPrompt(owner),
                                Text::new(label),
                                hud_text_style(24.0),
                                TextColor(Color::WHITE),
                                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
                                Node {
                                    padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                                    ..default()
                                },
                                Visibility::Hidden,
                            ));
                        }
                    }
                });

            parent.spawn((Text::new(help), hud_text_style(16.0), TextColor(HELP_TEXT_COLOR)));
        });

    commands.spawn((
        SceneEntity,
        NotificationRoot,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            top: Val::Px(20.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(8.0),
            ..default()
        },
    ));
}

/// Rewrites the timer/score line, sub-sampled in the forest.
pub fn update_score_text(
    frames: Res<FrameCount>,
    config: Res<GameConfig>,
    active: Option<Res<ActiveSession>>,
    mut query: Query<&mut Text, With<ScoreText>>,
) {
    let Some(active) = active else {
        return;
    };
    let session = &active.0;
    let line = match session {
        GameSession::Collection(game) => {
            let interval = config.collection.hud_interval.max(1);
            if frames.0 % interval != 0 {
                return;
            }
            format::collection_line(session.score(), game.total(), session.remaining_time())
        }
        GameSession::Delivery(_) => format::delivery_line(session.score(), session.remaining_time()),
    };
    for mut text in query.iter_mut() {
        text.0 = line.clone();
    }
}

/// Shows the status hint and "Press E" prompts from the indicator state.
pub fn update_status(
    active: Option<Res<ActiveSession>>,
    mut status_query: Query<&mut Text, With<StatusText>>,
    mut prompt_query: Query<(&InteractPrompt, &mut Visibility)>,
) {
    let Some(active) = active else {
        return;
    };
    let running = active.0.phase() == SessionPhase::Running;
    let GameSession::Delivery(game) = &active.0 else {
        return;
    };
    let indicators = game.indicators();

    for mut text in status_query.iter_mut() {
        text.0 = format::status_text(indicators.status);
    }
    for (prompt, mut visibility) in prompt_query.iter_mut() {
        let shown = running
            && match prompt.0 {
                MarkerOwner::Package => indicators.package_prompt,
                MarkerOwner::Target => indicators.target_prompt,
            };
        *visibility = if shown {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

/// Spawns notification text for gameplay events.
pub fn display_notifications(
    mut commands: Commands,
    mut events: EventReader<SessionEvent>,
    root_query: Query<Entity, With<NotificationRoot>>,
) {
    let Ok(root) = root_query.get_single() else {
        return;
    };

    for message in events.read().filter_map(|event| format::notification_for(&event.0)) {
        commands.entity(root).with_children(|parent| {
            parent.spawn((
                NotificationText(NOTIFICATION_DURATION),
                Text::new(message),
                hud_text_style(20.0),
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
                Node {
                    padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                    ..default()
                },
            ));
        });
    }
}

/// Updates notification timers and removes expired notifications.
pub fn update_notifications(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut NotificationText)>,
) {
    for (entity, mut notification) in query.iter_mut() {
        notification.0 -= time.delta_secs();
        if notification.0 <= 0.0 {
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// Opens the end-of-session overlay when the rules report an outcome.
pub fn show_summary(
    mut commands: Commands,
    mut events: EventReader<SessionEvent>,
    existing: Query<(), With<SummaryRoot>>,
) {
    let Some(outcome) = events.read().find_map(|event| match &event.0 {
        GameEvent::Ended(outcome) => Some(outcome.clone()),
        _ => None,
    }) else {
        return;
    };
    if !existing.is_empty() {
        return;
    }

    commands
        .spawn((
            SceneEntity,
            SummaryRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
            GlobalZIndex(10),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format::headline(&outcome)),
                title_text_style(),
                TextColor(TITLE_TEXT_COLOR),
            ));

            for (label, value) in format::summary_rows(&outcome) {
                parent.spawn((
                    Text::new(format!("{}: {}", label, value)),
                    button_text_style(),
                    TextColor(BUTTON_TEXT_COLOR),
                ));
            }

            if let Some(message) = format::closing_message(&outcome) {
                parent.spawn((
                    Text::new(message),
                    button_text_style(),
                    TextColor(HUD_TEXT_COLOR),
                ));
            }

            parent
                .spawn((
                    PlayAgainButton,
                    Button,
                    button_style(),
                    BackgroundColor(NORMAL_BUTTON),
                ))
                .with_children(|parent| {
                    parent.spawn((
                        Text::new("Play Again"),
                        button_text_style(),
                        TextColor(BUTTON_TEXT_COLOR),
                    ));
                });
        });
}

/// Resets the session and returns to the start menu.
pub fn handle_play_again(
    interaction_query: Query<&Interaction, (Changed<Interaction>, With<PlayAgainButton>)>,
    active: Option<ResMut<ActiveSession>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !interaction_query.iter().any(|i| *i == Interaction::Pressed) {
        return;
    }
    if let Some(mut active) = active {
        active.0.reset();
    }
    next_state.set(AppState::MainMenu);
}
