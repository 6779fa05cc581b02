use anyhow::Result;

use crate::config::InstallLayout;
use crate::error::InstallError;
use crate::installer::Installer;
use crate::model::{InstallReport, InstallRequest, UninstallOptions, UninstallReport};
use crate::product::Product;
use crate::status::InstallStatus;
use crate::uninstaller::Uninstaller;

/// In-process entry point shared by the CLI, terminal UI and desktop shell.
#[derive(Debug, Clone)]
pub struct LifecycleService {
    layout: InstallLayout,
    product: Product,
}

impl LifecycleService {
    pub fn new(layout: InstallLayout, product: Product) -> Self {
        Self { layout, product }
    }

    pub fn discover(home_override: Option<std::path::PathBuf>) -> Result<Self> {
        let product = Product::default();
        let layout = InstallLayout::discover(home_override, &product)?;
        Ok(Self::new(layout, product))
    }

    pub fn layout(&self) -> &InstallLayout {
        &self.layout
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn status(&self) -> InstallStatus {
        InstallStatus::detect(&self.layout, &self.product)
    }

    pub fn install(&self, request: InstallRequest) -> Result<InstallReport, InstallError> {
        Installer::new(self.layout.clone(), self.product, request)?.install()
    }

    pub fn uninstall(&self, options: UninstallOptions) -> UninstallReport {
        Uninstaller::new(self.layout.clone(), self.product, options).uninstall()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::product::CURSOR;
    use tempfile::TempDir;

    #[test]
    fn status_tracks_install_and_uninstall() {
        let home = TempDir::new().expect("home");
        let downloads = TempDir::new().expect("downloads");
        let service = LifecycleService::new(InstallLayout::for_home(home.path(), &CURSOR), CURSOR);
        let source = downloads.path().join("Cursor-0.45.0-x86_64.AppImage");
        fs::write(&source, b"app").expect("source");

        assert!(!service.status().is_installed());

        service
            .install(InstallRequest::new(&source, None))
            .expect("install");
        assert!(service.status().is_installed());

        let report = service.uninstall(UninstallOptions::default());
        assert!(!report.has_failures());
        assert!(!service.status().is_installed());
        assert!(!service.layout().desktop_file().exists());
    }
}
