//! Helper utilities for detecting environment defaults and labelling picked files.

use std::path::Path;

use chrono::{DateTime, Local};
use dark_light::Mode as ThemePreference;
use iced::Theme;

pub(crate) fn detect_theme() -> Theme {
    match dark_light::detect() {
        ThemePreference::Dark => Theme::Dark,
        ThemePreference::Light => Theme::Light,
        ThemePreference::Default => Theme::Light,
    }
}

/// Final path component, falling back to the full path when there is none.
pub(crate) fn file_name_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub(crate) fn format_checked_at(at: DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn file_name_label_prefers_the_last_component() {
        assert_eq!(
            file_name_label(&PathBuf::from("/home/dev/Downloads/Cursor-0.45.0.AppImage")),
            "Cursor-0.45.0.AppImage"
        );
        assert_eq!(file_name_label(Path::new("/")), "/");
    }

    #[test]
    fn checked_at_uses_wall_clock_time() {
        let at = Local
            .with_ymd_and_hms(2024, 5, 1, 9, 7, 3)
            .single()
            .expect("unambiguous local time");
        assert_eq!(format_checked_at(at), "09:07:03");
    }
}
