use bevy::prelude::*;

use super::components::*;
use super::styles::*;
use crate::game_state::{AppState, SceneKind};

pub fn setup_main_menu(mut commands: Commands) {
    // Spawn menu camera for UI rendering
    commands.spawn((MenuCamera, Camera2d));

    // Root container
    commands
        .spawn((
            MainMenuRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.05, 0.04, 0.06)),
        ))
        .with_children(|parent| {
            // Title
            parent.spawn((
                Text::new("NIGHTFALL"),
                title_text_style(),
                TextColor(TITLE_TEXT_COLOR),
                Node {
                    margin: UiRect::bottom(Val::Px(12.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Pick a scene to start the clock"),
                button_text_style(),
                TextColor(SUBTITLE_TEXT_COLOR),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            for (kind, label) in [
                (SceneKind::HalloweenForest, "Halloween Forest"),
                (SceneKind::PackageDelivery, "Package Delivery"),
            ] {
                parent
                    .spawn((
                        SceneButton(kind),
                        Button,
                        button_style(),
                        BackgroundColor(NORMAL_BUTTON),
                    ))
                    .with_children(|parent| {
                        parent.spawn((
                            Text::new(label),
                            button_text_style(),
                            TextColor(BUTTON_TEXT_COLOR),
                        ));
                    });
            }
        });
}

pub fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

pub fn cleanup_menu_camera(mut commands: Commands, query: Query<Entity, With<MenuCamera>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

pub fn button_interaction(
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
) {
    for (interaction, mut color) in interaction_query.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                *color = PRESSED_BUTTON.into();
            }
            Interaction::Hovered => {
                *color = HOVERED_BUTTON.into();
            }
            Interaction::None => {
                *color = NORMAL_BUTTON.into();
            }
        }
    }
}

pub fn handle_scene_click(
    interaction_query: Query<(&Interaction, &SceneButton), Changed<Interaction>>,
    mut scene_kind: ResMut<SceneKind>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for (interaction, button) in interaction_query.iter() {
        if *interaction == Interaction::Pressed {
            *scene_kind = button.0;
            next_state.set(AppState::InGame);
        }
    }
}
