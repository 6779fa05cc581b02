//! Core update loop translating user interactions into state changes.

use chrono::Local;
use cursor_installer_core::{InstallReport, InstallStatus, StepOutcome, UninstallReport};
use iced::Theme;

use crate::app::commands::{
    confirm_uninstall, error_dialog_command, install_command, pick_file, refresh_status_command,
    success_then_close_command, uninstall_command,
};
use crate::app::message::{Effect, Message};
use crate::app::state::{Activity, Notice, Operation, PickTarget};
use crate::app::theme::Palette;
use crate::telemetry::Event as TelemetryEvent;

use super::desktop::InstallerDesktop;

pub(crate) const SELECT_APPIMAGE_FIRST: &str = "Please select an AppImage file first";

impl InstallerDesktop {
    pub(super) fn react(&mut self, message: Message) -> Effect {
        match message {
            Message::PickRequested(target) => self.request_pick(target),
            Message::PathPicked(target, path) => {
                self.finish_pick(target, path);
                Effect::none()
            }
            Message::IconCleared => {
                if !self.activity.is_busy() {
                    self.selection.icon = None;
                }
                Effect::none()
            }
            Message::InstallPressed => self.start_install(),
            Message::InstallFinished(result) => self.finish_install(result),
            Message::UninstallPressed => self.request_uninstall(),
            Message::UninstallConfirmed(confirmed) => self.start_uninstall(confirmed),
            Message::UninstallFinished(result) => self.finish_uninstall(result),
            Message::PreserveCacheToggled => {
                if !self.activity.is_busy() {
                    self.options.preserve_cache = !self.options.preserve_cache;
                }
                Effect::none()
            }
            Message::PreserveConfigToggled => {
                if !self.activity.is_busy() {
                    self.options.preserve_config = !self.options.preserve_config;
                }
                Effect::none()
            }
            Message::StatusRefreshed(status) => {
                self.apply_status(status);
                Effect::none()
            }
            Message::OpenDownloadPage => self.open_download_page(),
            Message::DialogDismissed => Effect::none(),
            Message::ToggleTheme => self.toggle_theme(),
            Message::CloseRequested => iced::exit(),
        }
    }

    fn request_pick(&mut self, target: PickTarget) -> Effect {
        if self.activity.is_busy() {
            return Effect::none();
        }
        self.activity = Activity::Picking;
        Effect::perform(pick_file(target), move |path| {
            Message::PathPicked(target, path)
        })
    }

    fn finish_pick(&mut self, target: PickTarget, path: Option<std::path::PathBuf>) {
        if self.activity == Activity::Picking {
            self.activity = Activity::Idle;
        }
        if let Some(path) = path {
            tracing::debug!(pick = target.label(), path = %path.display(), "file selected");
            self.telemetry
                .record(TelemetryEvent::FilePicked(target.label()));
            self.selection.set(target, path);
        }
    }

    fn start_install(&mut self) -> Effect {
        if !self.can_install() {
            return Effect::none();
        }
        let Some(request) = self.selection.request() else {
            self.notice = Some(Notice::error(SELECT_APPIMAGE_FIRST));
            return error_dialog_command(SELECT_APPIMAGE_FIRST.to_string());
        };
        let Some(service) = self.service.clone() else {
            return Effect::none();
        };

        self.activity = Activity::Running(Operation::Install);
        self.notice = None;
        self.telemetry
            .record(TelemetryEvent::OperationStarted(Operation::Install.label()));
        Effect::perform(install_command(service, request), Message::InstallFinished)
    }

    fn finish_install(&mut self, result: Result<InstallReport, String>) -> Effect {
        match result {
            Ok(report) => {
                for line in report.lines() {
                    tracing::info!("{line}");
                }
                self.succeed(Operation::Install, Vec::new())
            }
            Err(err) => self.fail(Operation::Install, err),
        }
    }

    fn request_uninstall(&mut self) -> Effect {
        if !self.can_uninstall() {
            return Effect::none();
        }
        self.activity = Activity::Confirming;
        let product = self.product_name();
        Effect::perform(confirm_uninstall(product), Message::UninstallConfirmed)
    }

    fn start_uninstall(&mut self, confirmed: bool) -> Effect {
        if self.activity != Activity::Confirming {
            return Effect::none();
        }
        if !confirmed {
            self.activity = Activity::Idle;
            return Effect::none();
        }
        let Some(service) = self.service.clone() else {
            self.activity = Activity::Idle;
            return Effect::none();
        };

        self.activity = Activity::Running(Operation::Uninstall);
        self.notice = None;
        self.telemetry
            .record(TelemetryEvent::OperationStarted(Operation::Uninstall.label()));
        Effect::perform(
            uninstall_command(service, self.options),
            Message::UninstallFinished,
        )
    }

    fn finish_uninstall(&mut self, result: Result<UninstallReport, String>) -> Effect {
        match result {
            Ok(report) => {
                for line in report.lines() {
                    tracing::info!("{line}");
                }
                let warnings = report
                    .steps
                    .iter()
                    .filter(|step| matches!(step.outcome, StepOutcome::Failed(_)))
                    .map(|step| step.to_string())
                    .collect();
                self.succeed(Operation::Uninstall, warnings)
            }
            Err(err) => self.fail(Operation::Uninstall, err),
        }
    }

    /// Report success, refresh the status indicator and schedule the window to close.
    fn succeed(&mut self, operation: Operation, warnings: Vec<String>) -> Effect {
        self.activity = Activity::Closing;
        self.telemetry
            .record(TelemetryEvent::OperationSucceeded(operation.label()));

        let mut dialog = operation.success_dialog(self.product_name());
        let mut notice = operation.success_notice().to_string();
        for warning in &warnings {
            dialog.push('\n');
            dialog.push_str(warning);
            notice.push('\n');
            notice.push_str(warning);
        }
        self.notice = Some(Notice::success(notice));

        let close = success_then_close_command(dialog, self.close_delay);
        match self.service.clone() {
            Some(service) => Effect::batch(vec![refresh_status_command(service), close]),
            None => close,
        }
    }

    fn fail(&mut self, operation: Operation, error: String) -> Effect {
        tracing::error!(operation = ?operation, error = %error, "operation failed");
        self.activity = Activity::Idle;
        self.telemetry.record(TelemetryEvent::OperationFailed {
            operation: operation.label(),
            error: error.clone(),
        });

        let message = operation.failure_notice(&error);
        self.notice = Some(Notice::error(message.clone()));
        let dialog = error_dialog_command(message);
        match self.service.clone() {
            Some(service) => Effect::batch(vec![refresh_status_command(service), dialog]),
            None => dialog,
        }
    }

    fn apply_status(&mut self, status: InstallStatus) {
        self.telemetry.record(TelemetryEvent::StatusChecked {
            installed: status.is_installed(),
        });
        self.install_status = status;
        self.last_checked = Some(Local::now());
    }

    fn open_download_page(&mut self) -> Effect {
        let url = self
            .service
            .as_ref()
            .map(|service| service.product().download_url)
            .unwrap_or(cursor_installer_core::Product::default().download_url);
        if let Err(err) = open::that(url) {
            tracing::warn!(error = %err, url, "failed to open browser");
            self.notice = Some(Notice::error(format!("Could not open {url}: {err}")));
        }
        Effect::none()
    }

    fn toggle_theme(&mut self) -> Effect {
        self.theme = match self.theme {
            Theme::Dark => Theme::Light,
            _ => Theme::Dark,
        };
        self.palette = Palette::for_theme(&self.theme);
        Effect::none()
    }
}
