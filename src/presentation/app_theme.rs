use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.09, 0.09, 0.1),
                text: Color::from_rgb(0.94, 0.94, 0.94),
                primary: Color::from_rgb(0.17, 0.42, 0.93),
                success: Color::from_rgb(0.2, 0.8, 0.45),
                danger: Color::from_rgb(0.95, 0.33, 0.33),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(1.0, 1.0, 1.0),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.17, 0.42, 0.93),
                success: Color::from_rgb(0.1, 0.65, 0.3),
                danger: Color::from_rgb(0.85, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn filled(background: Color, text_color: Color, snap: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

fn disabled() -> button::Style {
    button::Style {
        border: Border {
            color: Color::from_rgb(0.4, 0.4, 0.4),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..filled(Color::from_rgb(0.3, 0.3, 0.3), Color::from_rgb(0.5, 0.5, 0.5), false)
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => filled(Color::from_rgb(0.17, 0.42, 0.93), Color::WHITE, false),
        button::Status::Hovered => filled(Color::from_rgb(0.27, 0.52, 0.98), Color::WHITE, false),
        button::Status::Pressed => filled(Color::from_rgb(0.12, 0.33, 0.78), Color::WHITE, true),
        button::Status::Disabled => disabled(),
    }
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => filled(Color::from_rgb(0.25, 0.25, 0.25), Color::from_rgb(0.8, 0.8, 0.8), false),
        button::Status::Hovered => filled(Color::from_rgb(0.35, 0.35, 0.35), Color::from_rgb(0.9, 0.9, 0.9), false),
        button::Status::Pressed => filled(Color::from_rgb(0.2, 0.2, 0.2), Color::from_rgb(0.8, 0.8, 0.8), true),
        button::Status::Disabled => disabled(),
    }
}

/// The GIF trigger stays highlighted while its popup is open.
pub fn trigger_button_style(
    is_active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if is_active {
            primary_button_style(theme, status)
        } else {
            secondary_button_style(theme, status)
        }
    }
}

pub fn thumbnail_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered => Color::from_rgb(0.17, 0.42, 0.93),
        button::Status::Pressed => Color::from_rgb(0.12, 0.33, 0.78),
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: None,
        text_color: Color::WHITE,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}
