use std::fmt;
use std::path::{Path, PathBuf};

use clap::Args;

/// Paths selected for an install: the AppImage and an optional icon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallRequest {
    pub appimage: PathBuf,
    pub icon: Option<PathBuf>,
}

impl InstallRequest {
    pub fn new(appimage: impl Into<PathBuf>, icon: Option<PathBuf>) -> Self {
        Self {
            appimage: appimage.into(),
            icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub app_name: String,
    pub installed_path: PathBuf,
    pub desktop_entry: PathBuf,
    pub icon: Option<PathBuf>,
}

impl InstallReport {
    /// Progress lines in the order the install steps ran.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Made {} executable", self.app_name),
            format!(
                "Installed {} to {}",
                self.app_name,
                self.installed_path.display()
            ),
            format!("Created desktop entry at {}", self.desktop_entry.display()),
        ]
    }
}

/// Directories the uninstaller should leave untouched.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UninstallOptions {
    /// Keep the application cache directory (~/.cache/Cursor)
    #[arg(long = "preserve-cache")]
    pub preserve_cache: bool,

    /// Keep the application configuration directory (~/.config/Cursor)
    #[arg(long = "preserve-config")]
    pub preserve_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UninstallStep {
    AppImages,
    DesktopEntry,
    Config,
    Cache,
}

impl UninstallStep {
    pub const ALL: [UninstallStep; 4] = [
        UninstallStep::AppImages,
        UninstallStep::DesktopEntry,
        UninstallStep::Config,
        UninstallStep::Cache,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UninstallStep::AppImages => "AppImage",
            UninstallStep::DesktopEntry => "desktop entry",
            UninstallStep::Config => "configuration directory",
            UninstallStep::Cache => "cache directory",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Removed(Vec<PathBuf>),
    NotFound,
    Preserved,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: UninstallStep,
    pub location: PathBuf,
    pub outcome: StepOutcome,
}

impl StepReport {
    pub fn new(step: UninstallStep, location: &Path, outcome: StepOutcome) -> Self {
        Self {
            step,
            location: location.to_path_buf(),
            outcome,
        }
    }
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.step.label();
        let location = self.location.display();
        match (&self.outcome, self.step) {
            (StepOutcome::Removed(paths), UninstallStep::AppImages) => write!(
                f,
                "✓ Removed {} {}{} from {}",
                paths.len(),
                label,
                if paths.len() == 1 { "" } else { "s" },
                location
            ),
            (StepOutcome::Removed(_), UninstallStep::DesktopEntry) => {
                write!(f, "✓ Removed {label} {location}")
            }
            (StepOutcome::Removed(_), _) => write!(f, "✓ Removed {label}: {location}"),
            (StepOutcome::NotFound, UninstallStep::AppImages) => {
                write!(f, "ℹ No {label} found in {location}")
            }
            (StepOutcome::NotFound, _) => write!(f, "ℹ No {label} found"),
            (StepOutcome::Preserved, _) => write!(f, "ℹ Preserved {label}: {location}"),
            (StepOutcome::Failed(err), _) => write!(f, "⚠ Error removing {label}: {err}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UninstallReport {
    pub steps: Vec<StepReport>,
}

impl UninstallReport {
    pub fn step(&self, step: UninstallStep) -> Option<&StepReport> {
        self.steps.iter().find(|report| report.step == step)
    }

    pub fn outcome(&self, step: UninstallStep) -> Option<&StepOutcome> {
        self.step(step).map(|report| &report.outcome)
    }

    pub fn has_failures(&self) -> bool {
        self.steps
            .iter()
            .any(|report| matches!(report.outcome, StepOutcome::Failed(_)))
    }

    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(|report| report.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn install_report_lines_follow_step_order() {
        let report = InstallReport {
            app_name: "Cursor-1.0.AppImage".into(),
            installed_path: PathBuf::from("/home/dev/.local/bin/Cursor-1.0.AppImage"),
            desktop_entry: PathBuf::from(
                "/home/dev/.local/share/applications/cursor-editor.desktop",
            ),
            icon: None,
        };
        assert_eq!(
            report.lines(),
            vec![
                "Made Cursor-1.0.AppImage executable".to_string(),
                "Installed Cursor-1.0.AppImage to /home/dev/.local/bin/Cursor-1.0.AppImage"
                    .to_string(),
                "Created desktop entry at /home/dev/.local/share/applications/cursor-editor.desktop"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn step_lines_describe_each_outcome() {
        let bin = Path::new("/home/dev/.local/bin");
        let removed = StepReport::new(
            UninstallStep::AppImages,
            bin,
            StepOutcome::Removed(vec![bin.join("a"), bin.join("b")]),
        );
        assert_eq!(
            removed.to_string(),
            "✓ Removed 2 AppImages from /home/dev/.local/bin"
        );

        let missing = StepReport::new(UninstallStep::DesktopEntry, bin, StepOutcome::NotFound);
        assert_eq!(missing.to_string(), "ℹ No desktop entry found");

        let kept = StepReport::new(
            UninstallStep::Cache,
            Path::new("/home/dev/.cache/Cursor"),
            StepOutcome::Preserved,
        );
        assert_eq!(
            kept.to_string(),
            "ℹ Preserved cache directory: /home/dev/.cache/Cursor"
        );

        let failed = StepReport::new(
            UninstallStep::Config,
            Path::new("/home/dev/.config/Cursor"),
            StepOutcome::Failed("permission denied".into()),
        );
        assert_eq!(
            failed.to_string(),
            "⚠ Error removing configuration directory: permission denied"
        );
    }

    #[test]
    fn report_detects_failures() {
        let mut report = UninstallReport::default();
        report.steps.push(StepReport::new(
            UninstallStep::Cache,
            Path::new("/tmp"),
            StepOutcome::NotFound,
        ));
        assert!(!report.has_failures());
        report.steps.push(StepReport::new(
            UninstallStep::Config,
            Path::new("/tmp"),
            StepOutcome::Failed("boom".into()),
        ));
        assert!(report.has_failures());
    }
}
