//! View-model types that keep the installer window in sync with the user's choices.

use std::path::PathBuf;

use cursor_installer_core::InstallRequest;

use crate::app::helpers::file_name_label;

/// Paths chosen through the file pickers. Install is only possible once an AppImage is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Selection {
    pub(crate) appimage: Option<PathBuf>,
    pub(crate) icon: Option<PathBuf>,
}

impl Selection {
    pub(crate) fn set(&mut self, target: PickTarget, path: PathBuf) {
        match target {
            PickTarget::AppImage => self.appimage = Some(path),
            PickTarget::Icon => self.icon = Some(path),
        }
    }

    pub(crate) fn request(&self) -> Option<InstallRequest> {
        self.appimage
            .as_ref()
            .map(|appimage| InstallRequest::new(appimage.clone(), self.icon.clone()))
    }

    pub(crate) fn appimage_label(&self) -> String {
        self.appimage
            .as_deref()
            .map(file_name_label)
            .unwrap_or_else(|| "No file selected".to_string())
    }

    pub(crate) fn icon_label(&self) -> String {
        self.icon
            .as_deref()
            .map(file_name_label)
            .unwrap_or_else(|| "No icon selected".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum PickTarget {
    AppImage,
    Icon,
}

impl PickTarget {
    pub(crate) fn dialog_title(self) -> &'static str {
        match self {
            PickTarget::AppImage => "Select Cursor AppImage",
            PickTarget::Icon => "Select Icon File",
        }
    }

    pub(crate) fn filter(self) -> (&'static str, &'static [&'static str]) {
        match self {
            PickTarget::AppImage => ("AppImage files", &["AppImage"]),
            PickTarget::Icon => ("Image files", &["png", "jpg", "jpeg", "ico", "svg"]),
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            PickTarget::AppImage => "appimage",
            PickTarget::Icon => "icon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    Install,
    Uninstall,
}

impl Operation {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Operation::Install => "install",
            Operation::Uninstall => "uninstall",
        }
    }

    pub(crate) fn in_progress(self) -> &'static str {
        match self {
            Operation::Install => "Installing…",
            Operation::Uninstall => "Uninstalling…",
        }
    }

    pub(crate) fn success_notice(self) -> &'static str {
        match self {
            Operation::Install => "Installation successful!",
            Operation::Uninstall => "Uninstallation successful!",
        }
    }

    pub(crate) fn success_dialog(self, product: &str) -> String {
        match self {
            Operation::Install => format!("{product} has been installed successfully!"),
            Operation::Uninstall => format!("{product} has been uninstalled successfully!"),
        }
    }

    pub(crate) fn failure_notice(self, error: &str) -> String {
        match self {
            Operation::Install => format!("Installation failed:\n{error}"),
            Operation::Uninstall => format!("Uninstallation failed:\n{error}"),
        }
    }
}

/// What the window is doing. Every state but `Idle` disables the action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Activity {
    Idle,
    Picking,
    Confirming,
    Running(Operation),
    Closing,
}

impl Activity {
    pub(crate) fn is_busy(self) -> bool {
        !matches!(self, Activity::Idle)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Notice {
    pub(crate) message: String,
    pub(crate) kind: NoticeKind,
}

impl Notice {
    pub(crate) fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    Success,
    Error,
}
