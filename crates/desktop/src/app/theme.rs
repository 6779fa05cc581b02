//! Palette definitions for the installer window.

use iced::Color;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) surface_muted: Color,
    pub(crate) primary: Color,
    pub(crate) primary_hover: Color,
    pub(crate) primary_text: Color,
    pub(crate) secondary_text: Color,
    pub(crate) ghost_hover: Color,
    pub(crate) success: Color,
    pub(crate) danger: Color,
    pub(crate) info: Color,
    pub(crate) link: Color,
    pub(crate) text_primary: Color,
    pub(crate) text_secondary: Color,
    pub(crate) text_muted: Color,
    pub(crate) border: Color,
}

// Action colors are shared by both themes.
const SUCCESS: Color = Color::from_rgb(0.204, 0.780, 0.349);
const DANGER: Color = Color::from_rgb(1.000, 0.231, 0.188);
const INFO: Color = Color::from_rgb(0.000, 0.478, 1.000);
const LINK: Color = Color::from_rgb(0.345, 0.337, 0.839);

impl Palette {
    pub(crate) fn for_theme(theme: &iced::Theme) -> Self {
        match theme {
            iced::Theme::Dark => Self {
                background: Color::from_rgb(0.09, 0.09, 0.10),
                surface: Color::from_rgb(0.13, 0.13, 0.14),
                surface_muted: Color::from_rgb(0.16, 0.16, 0.18),
                primary: SUCCESS,
                primary_hover: Color::from_rgb(0.30, 0.86, 0.42),
                primary_text: Color::WHITE,
                secondary_text: Color::from_rgb(0.78, 0.78, 0.82),
                ghost_hover: Color::from_rgba(1.0, 1.0, 1.0, 0.08),
                success: SUCCESS,
                danger: DANGER,
                info: Color::from_rgb(0.30, 0.60, 1.0),
                link: Color::from_rgb(0.55, 0.54, 0.95),
                text_primary: Color::from_rgb(0.94, 0.94, 0.96),
                text_secondary: Color::from_rgb(0.66, 0.66, 0.70),
                text_muted: Color::from_rgb(0.46, 0.46, 0.50),
                border: Color::from_rgba(1.0, 1.0, 1.0, 0.12),
            },
            _ => Self {
                background: Color::from_rgb(0.96, 0.96, 0.97),
                surface: Color::WHITE,
                surface_muted: Color::from_rgb(0.93, 0.93, 0.95),
                primary: SUCCESS,
                primary_hover: Color::from_rgb(0.18, 0.72, 0.32),
                primary_text: Color::WHITE,
                secondary_text: Color::from_rgb(0.30, 0.30, 0.34),
                ghost_hover: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
                success: SUCCESS,
                danger: DANGER,
                info: INFO,
                link: LINK,
                text_primary: Color::from_rgb(0.11, 0.11, 0.12),
                text_secondary: Color::from_rgb(0.40, 0.40, 0.44),
                text_muted: Color::from_rgb(0.58, 0.58, 0.62),
                border: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
            },
        }
    }
}
