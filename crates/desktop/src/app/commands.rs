//! Async adapters that map desktop intents into lifecycle service calls and native dialogs.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use cursor_installer_core::{
    InstallReport, InstallRequest, InstallStatus, LifecycleService, UninstallOptions,
    UninstallReport,
};
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

use crate::app::message::{Effect, Message};
use crate::app::state::PickTarget;

pub(crate) fn refresh_status_command(service: LifecycleService) -> Effect {
    Effect::perform(
        async move {
            tokio::task::spawn_blocking(move || service.status())
                .await
                .unwrap_or(InstallStatus::NotInstalled)
        },
        Message::StatusRefreshed,
    )
}

pub(crate) fn install_command(
    service: LifecycleService,
    request: InstallRequest,
) -> impl Future<Output = Result<InstallReport, String>> {
    async move {
        tokio::task::spawn_blocking(move || service.install(request))
            .await
            .map_err(|err| err.to_string())
            .and_then(|result| result.map_err(|err| err.to_string()))
    }
}

pub(crate) fn uninstall_command(
    service: LifecycleService,
    options: UninstallOptions,
) -> impl Future<Output = Result<UninstallReport, String>> {
    async move {
        tokio::task::spawn_blocking(move || service.uninstall(options))
            .await
            .map_err(|err| err.to_string())
    }
}

pub(crate) fn pick_file(target: PickTarget) -> impl Future<Output = Option<PathBuf>> {
    async move {
        let (filter_name, extensions) = target.filter();
        AsyncFileDialog::new()
            .set_title(target.dialog_title())
            .add_filter(filter_name, extensions)
            .add_filter("All files", &["*"])
            .pick_file()
            .await
            .map(|handle| handle.path().to_path_buf())
    }
}

pub(crate) fn confirm_uninstall(product: &'static str) -> impl Future<Output = bool> {
    async move {
        let answer = AsyncMessageDialog::new()
            .set_title("Confirm Uninstall")
            .set_level(MessageLevel::Warning)
            .set_description(format!("Are you sure you want to uninstall {product}?"))
            .set_buttons(MessageButtons::YesNo)
            .show()
            .await;
        matches!(answer, MessageDialogResult::Yes)
    }
}

pub(crate) fn show_dialog(
    level: MessageLevel,
    title: &'static str,
    description: String,
) -> impl Future<Output = ()> {
    async move {
        let _ = AsyncMessageDialog::new()
            .set_title(title)
            .set_level(level)
            .set_description(description)
            .set_buttons(MessageButtons::Ok)
            .show()
            .await;
    }
}

pub(crate) fn error_dialog_command(description: String) -> Effect {
    Effect::perform(show_dialog(MessageLevel::Error, "Error", description), |_| {
        Message::DialogDismissed
    })
}

/// Show the confirmation, then close the window once `delay` has passed.
pub(crate) fn success_then_close_command(description: String, delay: Duration) -> Effect {
    Effect::perform(
        async move {
            show_dialog(MessageLevel::Info, "Success", description).await;
            tokio::time::sleep(delay).await;
        },
        |_| Message::CloseRequested,
    )
}
