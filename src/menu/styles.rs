use bevy::prelude::*;

pub const NORMAL_BUTTON: Color = Color::srgb(0.15, 0.12, 0.1);
pub const HOVERED_BUTTON: Color = Color::srgb(0.3, 0.2, 0.12);
pub const PRESSED_BUTTON: Color = Color::srgb(0.85, 0.45, 0.1);

pub const BUTTON_TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
pub const TITLE_TEXT_COLOR: Color = Color::srgb(1.0, 0.6, 0.2);
pub const SUBTITLE_TEXT_COLOR: Color = Color::srgb(0.6, 0.6, 0.6);

pub fn button_style() -> Node {
    Node {
        width: Val::Px(320.0),
        height: Val::Px(65.0),
        margin: UiRect::all(Val::Px(10.0)),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

pub fn button_text_style() -> TextFont {
    TextFont {
        font_size: 28.0,
        ..default()
    }
}

pub fn title_text_style() -> TextFont {
    TextFont {
        font_size: 56.0,
        ..default()
    }
}
