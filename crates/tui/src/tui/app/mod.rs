use std::time::Instant;

use ratatui::style::{Color, Style};

use super::buffer::TextBuffer;
use super::constants::*;
use super::helpers::expand_path;
use crate::model::{InstallRequest, UninstallOptions};
use crate::status::InstallStatus;
use crate::LifecycleService;

mod input;
mod render;
#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    AppImage,
    Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    Edit(Field),
    ConfirmUninstall,
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    kind: StatusKind,
    created_at: Instant,
}

impl StatusMessage {
    fn new<T: Into<String>>(text: T, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    fn style(&self) -> Style {
        match self.kind {
            StatusKind::Info => Style::default().fg(Color::Cyan),
            StatusKind::Success => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Info,
    Success,
    Error,
}

/// Paths chosen by the user before an install.
#[derive(Debug, Clone, Default)]
struct Selection {
    appimage: TextBuffer,
    icon: TextBuffer,
}

pub(crate) struct App {
    service: LifecycleService,
    install_status: InstallStatus,
    selection: Selection,
    edit_backup: Option<String>,
    options: UninstallOptions,
    input_mode: InputMode,
    status: Option<StatusMessage>,
    log: Vec<String>,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(service: LifecycleService) -> Self {
        let install_status = service.status();
        Self {
            service,
            install_status,
            selection: Selection::default(),
            edit_backup: None,
            options: UninstallOptions::default(),
            input_mode: InputMode::Normal,
            status: None,
            log: Vec::new(),
            should_quit: false,
        }
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn on_tick(&mut self) {
        if let Some(status) = &self.status {
            if status.created_at.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    fn set_status<T: Into<String>>(&mut self, text: T, kind: StatusKind) {
        self.status = Some(StatusMessage::new(text, kind));
    }

    fn refresh_status(&mut self) {
        self.install_status = self.service.status();
    }

    fn buffer_mut(&mut self, field: Field) -> &mut TextBuffer {
        match field {
            Field::AppImage => &mut self.selection.appimage,
            Field::Icon => &mut self.selection.icon,
        }
    }

    fn install_request(&self) -> Option<InstallRequest> {
        let home = self.service.layout().home_dir();
        let appimage = expand_path(self.selection.appimage.as_str(), home)?;
        let icon = expand_path(self.selection.icon.as_str(), home);
        Some(InstallRequest::new(appimage, icon))
    }

    fn run_install(&mut self) {
        let Some(request) = self.install_request() else {
            self.set_status(STATUS_SELECT_FIRST, StatusKind::Error);
            return;
        };

        match self.service.install(request) {
            Ok(report) => {
                self.log = report.lines();
                self.set_status(STATUS_INSTALLED, StatusKind::Success);
            }
            Err(err) => {
                self.log = vec![format!("Installation failed: {err}")];
                self.set_status(format!("Installation failed: {err}"), StatusKind::Error);
            }
        }
        self.refresh_status();
    }

    fn run_uninstall(&mut self) {
        let report = self.service.uninstall(self.options);
        self.log = report.lines();
        if report.has_failures() {
            self.set_status(STATUS_UNINSTALL_WARNINGS, StatusKind::Error);
        } else {
            self.set_status(STATUS_UNINSTALLED, StatusKind::Success);
        }
        self.refresh_status();
    }
}
