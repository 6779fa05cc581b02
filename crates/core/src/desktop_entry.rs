//! Rendering and reading of the launcher `.desktop` file.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::product::Product;

static KEY_VALUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<key>[A-Za-z][A-Za-z0-9-]*)\s*=\s*(?P<value>.*)$").expect("valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntry {
    pub name: String,
    pub comment: String,
    pub exec: String,
    pub icon: String,
    pub categories: String,
    pub terminal: bool,
    pub startup_wm_class: String,
    pub mime_types: String,
    pub keywords: String,
}

impl DesktopEntry {
    /// Entry launching `installed_path`, using `icon` or the product's themed icon name.
    pub fn for_install(product: &Product, installed_path: &Path, icon: Option<&Path>) -> Self {
        let icon = icon
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| product.fallback_icon.to_string());
        Self {
            name: product.display_name.to_string(),
            comment: product.comment.to_string(),
            exec: format!("{} {}", installed_path.display(), product.launch_flag),
            icon,
            categories: product.categories.to_string(),
            terminal: false,
            startup_wm_class: product.startup_wm_class.to_string(),
            mime_types: product.mime_types.to_string(),
            keywords: product.keywords.to_string(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "[Desktop Entry]\n\
             Name={}\n\
             Comment={}\n\
             Exec={}\n\
             Icon={}\n\
             Type=Application\n\
             Categories={}\n\
             Terminal={}\n\
             StartupWMClass={}\n\
             MimeType={}\n\
             Keywords={}\n",
            self.name,
            self.comment,
            self.exec,
            self.icon,
            self.categories,
            self.terminal,
            self.startup_wm_class,
            self.mime_types,
            self.keywords,
        )
    }

    /// Parse the `[Desktop Entry]` group of an existing file. Unknown keys are ignored;
    /// returns `None` when the group or its `Exec` key is missing.
    pub fn parse(contents: &str) -> Option<Self> {
        let mut in_group = false;
        let mut seen_group = false;
        let mut entry = Self {
            name: String::new(),
            comment: String::new(),
            exec: String::new(),
            icon: String::new(),
            categories: String::new(),
            terminal: false,
            startup_wm_class: String::new(),
            mime_types: String::new(),
            keywords: String::new(),
        };

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with('[') {
                in_group = line == "[Desktop Entry]";
                seen_group |= in_group;
                continue;
            }
            if !in_group {
                continue;
            }
            let Some(caps) = KEY_VALUE_RE.captures(line) else {
                continue;
            };
            let value = caps["value"].to_string();
            match &caps["key"] {
                "Name" => entry.name = value,
                "Comment" => entry.comment = value,
                "Exec" => entry.exec = value,
                "Icon" => entry.icon = value,
                "Categories" => entry.categories = value,
                "Terminal" => entry.terminal = value.eq_ignore_ascii_case("true"),
                "StartupWMClass" => entry.startup_wm_class = value,
                "MimeType" => entry.mime_types = value,
                "Keywords" => entry.keywords = value,
                _ => {}
            }
        }

        if !seen_group || entry.exec.is_empty() {
            return None;
        }
        Some(entry)
    }

    /// The program the `Exec` line launches, without its trailing flag.
    ///
    /// The path is written unquoted, so it may itself contain spaces.
    pub fn exec_target(&self) -> Option<PathBuf> {
        let exec = self.exec.trim();
        if exec.is_empty() {
            return None;
        }
        let program = match exec.rsplit_once(' ') {
            Some((program, flag)) if flag.starts_with('-') => program.trim_end(),
            _ => exec,
        };
        Some(PathBuf::from(program))
    }
}
