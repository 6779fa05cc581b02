pub use cursor_installer_tui::cli;
pub use cursor_installer_tui::commands;
pub use cursor_installer_tui::config;
pub use cursor_installer_tui::logging;
pub use cursor_installer_tui::tui;
pub use cursor_installer_tui::LifecycleService;

pub use cursor_installer_core as core;
pub use cursor_installer_core::model;
pub use cursor_installer_core::status;

pub use cursor_installer_desktop as desktop;
pub use cursor_installer_desktop::DesktopOptions;
