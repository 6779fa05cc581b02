use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::BaseDirs;
use once_cell::sync::Lazy;

use crate::product::Product;

pub static ENV_HOME_DIR: &str = "CURSOR_INSTALLER_HOME";

static BASE_DIRS: Lazy<Option<BaseDirs>> = Lazy::new(BaseDirs::new);

/// Filesystem locations touched by install, uninstall and status checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    home_dir: PathBuf,
    bin_dir: PathBuf,
    applications_dir: PathBuf,
    config_dir: PathBuf,
    cache_dir: PathBuf,
    desktop_file: PathBuf,
}

impl InstallLayout {
    /// Construct [`InstallLayout`] by resolving the home directory using the provided override,
    /// environment variables, and platform defaults.
    pub fn discover(home_override: Option<PathBuf>, product: &Product) -> Result<Self> {
        let home = resolve_home_dir(home_override)?;
        Ok(Self::for_home(home, product))
    }

    /// Construct [`InstallLayout`] rooted at an already resolved home directory.
    pub fn for_home(home: impl Into<PathBuf>, product: &Product) -> Self {
        let home_dir = home.into();
        let bin_dir = home_dir.join(".local").join("bin");
        let applications_dir = home_dir.join(".local").join("share").join("applications");
        let desktop_file = applications_dir.join(product.desktop_file_name);
        Self {
            bin_dir,
            applications_dir,
            config_dir: home_dir.join(".config").join(product.name),
            cache_dir: home_dir.join(".cache").join(product.name),
            desktop_file,
            home_dir,
        }
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    pub fn applications_dir(&self) -> &Path {
        &self.applications_dir
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn desktop_file(&self) -> &Path {
        &self.desktop_file
    }
}

fn resolve_home_dir(home_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = home_override {
        return Ok(dir);
    }

    if let Ok(env_dir) = env::var(ENV_HOME_DIR) {
        if !env_dir.trim().is_empty() {
            return Ok(PathBuf::from(env_dir));
        }
    }

    if let Some(base) = &*BASE_DIRS {
        return Ok(base.home_dir().to_path_buf());
    }

    Err(anyhow!("could not determine the home directory"))
}
