use std::time::Duration;

pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) const TICK_RATE: Duration = Duration::from_millis(200);
pub(crate) const STATUS_TTL: Duration = Duration::from_secs(8);

pub(crate) const KEY_HELP: &str =
    "a: AppImage path • o: icon path • i: install • u: uninstall • c: keep cache • g: keep config • r: refresh • q: quit";

pub(crate) const STATUS_EDIT_APPIMAGE: &str =
    "Type the AppImage path (~ allowed) • Enter to accept • Esc to cancel";
pub(crate) const STATUS_EDIT_ICON: &str =
    "Type an icon path, leave empty for the default icon • Enter to accept • Esc to cancel";
pub(crate) const STATUS_CONFIRM_UNINSTALL: &str = "Confirm uninstall: y/Enter confirms, n/Esc cancels";
pub(crate) const STATUS_REFRESHED: &str = "Refreshed installation status";
pub(crate) const STATUS_SELECT_FIRST: &str = "Please select an AppImage file first";
pub(crate) const STATUS_INSTALLED: &str = "Installation successful!";
pub(crate) const STATUS_UNINSTALLED: &str = "Uninstallation successful!";
pub(crate) const STATUS_UNINSTALL_WARNINGS: &str = "Uninstallation finished with warnings";
