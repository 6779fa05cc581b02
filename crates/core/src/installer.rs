//! Fail-fast installer: the first failing step aborts the install and nothing is rolled back.

use std::env;
use std::fs::{self, File};
use std::os::unix::fs::PermissionsExt;
use std::path::{Component, Path, PathBuf};

use crate::config::InstallLayout;
use crate::desktop_entry::DesktopEntry;
use crate::error::InstallError;
use crate::model::{InstallReport, InstallRequest};
use crate::product::Product;

const EXECUTABLE_MODE: u32 = 0o755;

#[derive(Debug, Clone)]
pub struct Installer {
    layout: InstallLayout,
    product: Product,
    appimage: PathBuf,
    icon: Option<PathBuf>,
    app_name: String,
}

impl Installer {
    /// Validate the request before touching the filesystem.
    pub fn new(
        layout: InstallLayout,
        product: Product,
        request: InstallRequest,
    ) -> Result<Self, InstallError> {
        let appimage = absolutize(&request.appimage)?;
        if !appimage.exists() {
            return Err(InstallError::AppImageNotFound(request.appimage));
        }

        let icon = match request.icon {
            Some(icon) => {
                let resolved = absolutize(&icon)?;
                if !resolved.exists() {
                    return Err(InstallError::IconNotFound(icon));
                }
                Some(resolved)
            }
            None => None,
        };

        let app_name = appimage
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| InstallError::MissingFileName(appimage.clone()))?;

        Ok(Self {
            layout,
            product,
            appimage,
            icon,
            app_name,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn destination(&self) -> PathBuf {
        self.layout.bin_dir().join(&self.app_name)
    }

    pub fn install(&self) -> Result<InstallReport, InstallError> {
        tracing::info!(appimage = %self.appimage.display(), "starting {} installation", self.product.name);

        self.create_directories()?;
        self.make_executable()?;
        let installed_path = self.copy_appimage()?;
        let desktop_entry = self.write_desktop_entry(&installed_path)?;

        Ok(InstallReport {
            app_name: self.app_name.clone(),
            installed_path,
            desktop_entry,
            icon: self.icon.clone(),
        })
    }

    pub fn create_directories(&self) -> Result<(), InstallError> {
        for dir in [self.layout.bin_dir(), self.layout.applications_dir()] {
            fs::create_dir_all(dir).map_err(|source| InstallError::CreateDirectory {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    pub fn make_executable(&self) -> Result<(), InstallError> {
        set_executable(&self.appimage).map_err(|source| InstallError::MakeExecutable {
            path: self.appimage.clone(),
            source,
        })?;
        tracing::info!(file = %self.app_name, "made AppImage executable");
        Ok(())
    }

    /// Copy into the binary directory, keeping permission bits and modification time.
    pub fn copy_appimage(&self) -> Result<PathBuf, InstallError> {
        let destination = self.destination();
        let wrap = |source| InstallError::CopyAppImage {
            destination: destination.clone(),
            source,
        };

        if is_same_file(&self.appimage, &destination) {
            tracing::info!(path = %destination.display(), "AppImage already in place, skipping copy");
            return Ok(destination);
        }

        fs::copy(&self.appimage, &destination).map_err(wrap)?;
        let modified = fs::metadata(&self.appimage)
            .and_then(|meta| meta.modified())
            .map_err(wrap)?;
        File::options()
            .write(true)
            .open(&destination)
            .and_then(|file| file.set_modified(modified))
            .map_err(wrap)?;

        tracing::info!(path = %destination.display(), "installed AppImage");
        Ok(destination)
    }

    pub fn write_desktop_entry(&self, installed_path: &Path) -> Result<PathBuf, InstallError> {
        let path = self.layout.desktop_file().to_path_buf();
        let entry = DesktopEntry::for_install(&self.product, installed_path, self.icon.as_deref());
        let wrap = |source| InstallError::WriteDesktopEntry {
            path: path.clone(),
            source,
        };

        fs::write(&path, entry.render()).map_err(wrap)?;
        set_executable(&path).map_err(wrap)?;

        tracing::info!(path = %path.display(), "created desktop entry");
        Ok(path)
    }
}

fn set_executable(path: &Path) -> std::io::Result<()> {
    fs::set_permissions(path, fs::Permissions::from_mode(EXECUTABLE_MODE))
}

fn absolutize(path: &Path) -> Result<PathBuf, InstallError> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    env::current_dir()
        .map(|cwd| normalize(&cwd.join(path)))
        .map_err(|source| InstallError::ResolvePath {
            path: path.to_path_buf(),
            source,
        })
}

/// Drop `.` and resolve `..` lexically, without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
