use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while installing. Every variant aborts the install.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("AppImage file not found at {}", .0.display())]
    AppImageNotFound(PathBuf),

    #[error("Icon file not found at {}", .0.display())]
    IconNotFound(PathBuf),

    #[error("AppImage path {} has no file name", .0.display())]
    MissingFileName(PathBuf),

    #[error("Error creating directory {}: {source}", path.display())]
    CreateDirectory { path: PathBuf, source: io::Error },

    #[error("Error making file executable {}: {source}", path.display())]
    MakeExecutable { path: PathBuf, source: io::Error },

    #[error("Error installing AppImage to {}: {source}", destination.display())]
    CopyAppImage {
        destination: PathBuf,
        source: io::Error,
    },

    #[error("Error creating desktop entry {}: {source}", path.display())]
    WriteDesktopEntry { path: PathBuf, source: io::Error },

    #[error("Error resolving path {}: {source}", path.display())]
    ResolvePath { path: PathBuf, source: io::Error },
}
