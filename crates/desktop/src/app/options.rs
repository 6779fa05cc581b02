//! Configuration surfaces for tailoring the installer window.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DesktopOptions {
    pub home: Option<PathBuf>,
    pub close_delay: Duration,
}

impl Default for DesktopOptions {
    fn default() -> Self {
        Self {
            home: None,
            close_delay: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct DesktopFlags {
    pub(crate) home: Option<PathBuf>,
    pub(crate) close_delay: Duration,
}

impl From<DesktopOptions> for DesktopFlags {
    fn from(options: DesktopOptions) -> Self {
        Self {
            home: options.home,
            close_delay: options.close_delay,
        }
    }
}
