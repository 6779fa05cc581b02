use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::InstallLayout;
use crate::desktop_entry::DesktopEntry;
use crate::product::Product;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InstallStatus {
    Installed {
        artifacts: Vec<PathBuf>,
        desktop_entry: Option<PathBuf>,
        launcher_target: Option<PathBuf>,
    },
    NotInstalled,
}

impl InstallStatus {
    /// Scan the binary directory for the product's AppImages.
    ///
    /// Only file names are checked; a listing error counts as not installed.
    pub fn detect(layout: &InstallLayout, product: &Product) -> Self {
        let artifacts = match installed_artifacts(layout.bin_dir(), product) {
            Ok(artifacts) => artifacts,
            Err(err) => {
                tracing::warn!(error = %err, dir = %layout.bin_dir().display(), "error checking installation");
                Vec::new()
            }
        };
        tracing::debug!(count = artifacts.len(), "scanned for installed AppImages");

        if artifacts.is_empty() {
            return InstallStatus::NotInstalled;
        }

        let desktop_file = layout.desktop_file();
        let (desktop_entry, launcher_target) = match fs::read_to_string(desktop_file) {
            Ok(contents) => (
                Some(desktop_file.to_path_buf()),
                DesktopEntry::parse(&contents).and_then(|entry| entry.exec_target()),
            ),
            Err(_) => (None, None),
        };

        InstallStatus::Installed {
            artifacts,
            desktop_entry,
            launcher_target,
        }
    }

    pub fn is_installed(&self) -> bool {
        matches!(self, InstallStatus::Installed { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            InstallStatus::Installed { .. } => "Installed",
            InstallStatus::NotInstalled => "Not installed",
        }
    }

    pub fn artifacts(&self) -> &[PathBuf] {
        match self {
            InstallStatus::Installed { artifacts, .. } => artifacts,
            InstallStatus::NotInstalled => &[],
        }
    }
}

pub fn installed_artifacts(bin_dir: &Path, product: &Product) -> io::Result<Vec<PathBuf>> {
    if !bin_dir.exists() {
        return Ok(Vec::new());
    }

    let mut artifacts = Vec::new();
    for entry in fs::read_dir(bin_dir)? {
        let entry = entry?;
        if product.matches_artifact(&entry.file_name().to_string_lossy()) {
            artifacts.push(entry.path());
        }
    }
    artifacts.sort();
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::CURSOR;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_bin_dir_means_not_installed() {
        let home = TempDir::new().expect("home");
        let layout = InstallLayout::for_home(home.path(), &CURSOR);
        assert_eq!(
            InstallStatus::detect(&layout, &CURSOR),
            InstallStatus::NotInstalled
        );
    }

    #[test]
    fn matching_file_name_means_installed() {
        let home = TempDir::new().expect("home");
        let layout = InstallLayout::for_home(home.path(), &CURSOR);
        fs::create_dir_all(layout.bin_dir()).expect("bin");
        fs::write(layout.bin_dir().join("notes.txt"), b"").expect("noise");
        assert!(!InstallStatus::detect(&layout, &CURSOR).is_installed());

        let artifact = layout.bin_dir().join("Cursor-1.2.AppImage");
        fs::write(&artifact, b"").expect("artifact");
        let status = InstallStatus::detect(&layout, &CURSOR);
        assert_eq!(status.label(), "Installed");
        assert_eq!(status.artifacts(), &[artifact][..]);
    }

    #[test]
    fn reports_launcher_target_from_desktop_entry() {
        let home = TempDir::new().expect("home");
        let layout = InstallLayout::for_home(home.path(), &CURSOR);
        fs::create_dir_all(layout.bin_dir()).expect("bin");
        fs::create_dir_all(layout.applications_dir()).expect("apps");
        let artifact = layout.bin_dir().join("Cursor.AppImage");
        fs::write(&artifact, b"").expect("artifact");
        let entry = DesktopEntry::for_install(&CURSOR, &artifact, None);
        fs::write(layout.desktop_file(), entry.render()).expect("entry");

        match InstallStatus::detect(&layout, &CURSOR) {
            InstallStatus::Installed {
                desktop_entry,
                launcher_target,
                ..
            } => {
                assert_eq!(desktop_entry.as_deref(), Some(layout.desktop_file()));
                assert_eq!(launcher_target, Some(artifact));
            }
            InstallStatus::NotInstalled => panic!("expected installed"),
        }
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_string(&InstallStatus::NotInstalled).expect("json");
        assert_eq!(json, r#"{"status":"not_installed"}"#);
    }
}
