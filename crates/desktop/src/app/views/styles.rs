use iced::border::{Border, Radius};
use iced::widget::{button, container};
use iced::{Background, Color, Shadow, Vector};

use crate::app::theme::Palette;

pub(super) fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

pub(super) fn darken(color: Color, factor: f32) -> Color {
    let clamp = |value: f32| value.clamp(0.0, 1.0);
    Color {
        r: clamp(color.r * factor),
        g: clamp(color.g * factor),
        b: clamp(color.b * factor),
        ..color
    }
}

fn filled_button_style(fill: Color, text: Color, status: button::Status) -> button::Style {
    let mut style = button::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            color: fill,
            width: 0.0,
            radius: Radius::from(6.0),
        },
        text_color: text,
        shadow: Shadow {
            offset: Vector::new(0.0, 1.0),
            ..Shadow::default()
        },
        ..button::Style::default()
    };

    match status {
        button::Status::Hovered => {
            let hovered = darken(fill, 0.92);
            style.background = Some(Background::Color(hovered));
            style.border.color = hovered;
        }
        button::Status::Pressed => {
            let pressed = darken(fill, 0.8);
            style.background = Some(Background::Color(pressed));
            style.border.color = pressed;
            style.shadow.offset = Vector::new(0.0, 0.0);
        }
        button::Status::Disabled => {
            let disabled = with_alpha(fill, 0.45);
            style.background = Some(Background::Color(disabled));
            style.border.color = disabled;
            style.text_color = with_alpha(text, 0.7);
            style.shadow.offset = Vector::new(0.0, 0.0);
        }
        button::Status::Active => {}
    }

    style
}

pub(super) fn primary_button_style(palette: Palette, status: button::Status) -> button::Style {
    filled_button_style(palette.primary, palette.primary_text, status)
}

pub(super) fn danger_button_style(palette: Palette, status: button::Status) -> button::Style {
    filled_button_style(palette.danger, palette.primary_text, status)
}

pub(super) fn secondary_button_style(palette: Palette, status: button::Status) -> button::Style {
    let mut style = button::Style {
        background: Some(Background::Color(palette.surface_muted)),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: Radius::from(6.0),
        },
        text_color: palette.text_primary,
        shadow: Shadow::default(),
        ..button::Style::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => {
            style.background = Some(Background::Color(palette.ghost_hover));
            style.border.color = palette.info;
        }
        button::Status::Disabled => {
            style.text_color = with_alpha(palette.text_primary, 0.5);
        }
        button::Status::Active => {}
    }

    style
}

pub(super) fn ghost_button_style(palette: Palette, status: button::Status) -> button::Style {
    let mut style = button::Style {
        background: None,
        border: Border::default(),
        text_color: palette.secondary_text,
        shadow: Shadow::default(),
        ..button::Style::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => {
            style.background = Some(Background::Color(palette.ghost_hover));
            style.text_color = palette.text_primary;
        }
        button::Status::Disabled => {
            style.text_color = with_alpha(palette.secondary_text, 0.6);
        }
        button::Status::Active => {}
    }

    style
}

pub(super) fn link_button_style(palette: Palette, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => darken(palette.link, 0.8),
        button::Status::Disabled => with_alpha(palette.link, 0.5),
        button::Status::Active => palette.link,
    };
    button::Style {
        background: None,
        border: Border::default(),
        text_color,
        shadow: Shadow::default(),
        ..button::Style::default()
    }
}

pub(super) fn card_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.surface)),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: Radius::from(8.0),
        },
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}
