//! Message definitions passed around the desktop update loop.

use std::path::PathBuf;
use std::result::Result;

use cursor_installer_core::{InstallReport, InstallStatus, UninstallReport};
use iced::Task;

use crate::app::state::PickTarget;

#[derive(Debug, Clone)]
pub(crate) enum Message {
    PickRequested(PickTarget),
    PathPicked(PickTarget, Option<PathBuf>),
    IconCleared,
    InstallPressed,
    InstallFinished(Result<InstallReport, String>),
    UninstallPressed,
    UninstallConfirmed(bool),
    UninstallFinished(Result<UninstallReport, String>),
    PreserveCacheToggled,
    PreserveConfigToggled,
    StatusRefreshed(InstallStatus),
    OpenDownloadPage,
    DialogDismissed,
    ToggleTheme,
    CloseRequested,
}

pub(crate) type Effect = Task<Message>;
