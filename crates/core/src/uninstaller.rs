//! Best-effort uninstaller: every step runs even when an earlier one failed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::InstallLayout;
use crate::model::{StepOutcome, StepReport, UninstallOptions, UninstallReport, UninstallStep};
use crate::product::Product;
use crate::status::installed_artifacts;

#[derive(Debug, Clone)]
pub struct Uninstaller {
    layout: InstallLayout,
    product: Product,
    options: UninstallOptions,
}

impl Uninstaller {
    pub fn new(layout: InstallLayout, product: Product, options: UninstallOptions) -> Self {
        Self {
            layout,
            product,
            options,
        }
    }

    pub fn uninstall(&self) -> UninstallReport {
        tracing::info!(
            preserve_cache = self.options.preserve_cache,
            preserve_config = self.options.preserve_config,
            "starting {} uninstallation",
            self.product.name
        );

        let steps = UninstallStep::ALL
            .iter()
            .map(|step| self.run_step(*step))
            .collect();
        UninstallReport { steps }
    }

    pub fn run_step(&self, step: UninstallStep) -> StepReport {
        let report = match step {
            UninstallStep::AppImages => self.remove_appimages(),
            UninstallStep::DesktopEntry => self.remove_desktop_entry(),
            UninstallStep::Config => self.remove_config(),
            UninstallStep::Cache => self.remove_cache(),
        };
        if let StepOutcome::Failed(err) = &report.outcome {
            tracing::warn!(step = step.label(), error = %err, "uninstall step failed");
        }
        report
    }

    pub fn remove_appimages(&self) -> StepReport {
        let dir = self.layout.bin_dir();
        let outcome = match self.delete_matching_artifacts(dir) {
            Ok(removed) if removed.is_empty() => StepOutcome::NotFound,
            Ok(removed) => StepOutcome::Removed(removed),
            Err(err) => StepOutcome::Failed(err.to_string()),
        };
        StepReport::new(UninstallStep::AppImages, dir, outcome)
    }

    pub fn remove_desktop_entry(&self) -> StepReport {
        let path = self.layout.desktop_file();
        let outcome = if path.exists() {
            match fs::remove_file(path) {
                Ok(()) => StepOutcome::Removed(vec![path.to_path_buf()]),
                Err(err) => StepOutcome::Failed(err.to_string()),
            }
        } else {
            StepOutcome::NotFound
        };
        StepReport::new(UninstallStep::DesktopEntry, path, outcome)
    }

    pub fn remove_config(&self) -> StepReport {
        let dir = self.layout.config_dir();
        let outcome = if self.options.preserve_config {
            StepOutcome::Preserved
        } else {
            remove_tree(dir)
        };
        StepReport::new(UninstallStep::Config, dir, outcome)
    }

    pub fn remove_cache(&self) -> StepReport {
        let dir = self.layout.cache_dir();
        let outcome = if self.options.preserve_cache {
            StepOutcome::Preserved
        } else {
            remove_tree(dir)
        };
        StepReport::new(UninstallStep::Cache, dir, outcome)
    }

    /// Remove exactly the entries status detection reports, so an entry that
    /// cannot be removed surfaces as a failure instead of being skipped.
    fn delete_matching_artifacts(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut removed = Vec::new();
        for path in installed_artifacts(dir, &self.product)? {
            fs::remove_file(&path)?;
            tracing::info!(path = %path.display(), "removed AppImage");
            removed.push(path);
        }
        Ok(removed)
    }
}

fn remove_tree(dir: &Path) -> StepOutcome {
    if !dir.exists() {
        return StepOutcome::NotFound;
    }
    match fs::remove_dir_all(dir) {
        Ok(()) => {
            tracing::info!(path = %dir.display(), "removed directory");
            StepOutcome::Removed(vec![dir.to_path_buf()])
        }
        Err(err) => StepOutcome::Failed(err.to_string()),
    }
}
