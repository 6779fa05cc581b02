pub mod config;
pub mod desktop_entry;
pub mod error;
pub mod installer;
pub mod model;
pub mod product;
pub mod services;
pub mod status;
pub mod uninstaller;

pub use config::InstallLayout;
pub use error::InstallError;
pub use installer::Installer;
pub use model::*;
pub use product::Product;
pub use services::LifecycleService;
pub use status::InstallStatus;
pub use uninstaller::Uninstaller;
