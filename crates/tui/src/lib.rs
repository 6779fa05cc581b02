pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod tui;

pub use cursor_installer_core as core;
pub use cursor_installer_core::model;
pub use cursor_installer_core::status;

pub use cursor_installer_core::LifecycleService;
