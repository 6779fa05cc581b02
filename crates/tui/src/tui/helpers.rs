use std::cmp::min;
use std::path::{Path, PathBuf};

use ratatui::layout::Rect;
use ratatui::style::Color;

pub const BG_BASE: Color = Color::Rgb(14, 17, 23);
pub const BG_PANEL: Color = Color::Rgb(22, 26, 34);
pub const FG_ACCENT: Color = Color::Rgb(120, 161, 255);
pub const FG_INSTALLED: Color = Color::Rgb(52, 199, 89);
pub const FG_MISSING: Color = Color::Rgb(255, 59, 48);

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = min(width, area.width);
    let h = min(height, area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// Turn typed input into a path, expanding a leading `~` against `home`.
pub fn expand_path(input: &str, home: &Path) -> Option<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed == "~" {
        return Some(home.to_path_buf());
    }
    if let Some(rest) = trimmed.strip_prefix("~/") {
        return Some(home.join(rest));
    }
    Some(PathBuf::from(trimmed))
}

pub fn file_label(path: &str) -> String {
    Path::new(path.trim())
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.trim().to_string())
}

pub fn toggle_label(enabled: bool) -> &'static str {
    if enabled {
        "[x]"
    } else {
        "[ ]"
    }
}
