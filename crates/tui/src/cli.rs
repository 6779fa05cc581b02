use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::{InstallRequest, UninstallOptions};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "cursor-installer",
    version,
    about = "Install, uninstall and manage the Cursor AppImage for the current user.",
    after_help = "Examples:\n  cursor-installer             Open the installer window (same as `cursor-installer desktop`)\n  cursor-installer install ~/Downloads/Cursor-0.45.0-x86_64.AppImage --icon ~/Pictures/cursor.png\n  cursor-installer uninstall --preserve-config\n  cursor-installer status --json"
)]
pub struct Cli {
    /// Override the home directory the install layout is derived from
    #[arg(long, value_name = "PATH", global = true)]
    pub home: Option<PathBuf>,

    /// Override the tracing filter (e.g. "info", "debug", or full directives)
    #[arg(long = "log", value_name = "DIRECTIVE", global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Open the graphical installer window (default command)
    Desktop,
    /// Launch the keyboard-driven terminal installer
    Tui,
    /// Install an AppImage into ~/.local/bin and create its desktop entry
    Install(InstallArgs),
    /// Remove the AppImage, desktop entry, configuration and cache
    Uninstall(UninstallArgs),
    /// Report whether the application is installed
    Status(StatusArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InstallArgs {
    /// Path to the Cursor AppImage file
    #[arg(value_name = "APPIMAGE")]
    pub appimage: PathBuf,

    /// Path to an icon file for the desktop entry (optional)
    #[arg(long, value_name = "PATH")]
    pub icon: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct UninstallArgs {
    #[command(flatten)]
    pub options: UninstallOptions,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    /// Print the status as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&InstallArgs> for InstallRequest {
    fn from(args: &InstallArgs) -> Self {
        InstallRequest {
            appimage: args.appimage.clone(),
            icon: args.icon.clone(),
        }
    }
}

impl From<InstallArgs> for InstallRequest {
    fn from(args: InstallArgs) -> Self {
        InstallRequest {
            appimage: args.appimage,
            icon: args.icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn install_takes_positional_appimage_and_optional_icon() {
        let cli = Cli::parse_from([
            "cursor-installer",
            "install",
            "Cursor.AppImage",
            "--icon",
            "cursor.png",
        ]);
        match cli.command {
            Some(CliCommand::Install(args)) => {
                let request = InstallRequest::from(args);
                assert_eq!(request.appimage, PathBuf::from("Cursor.AppImage"));
                assert_eq!(request.icon, Some(PathBuf::from("cursor.png")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn uninstall_flags_default_to_removing_everything() {
        let cli = Cli::parse_from(["cursor-installer", "uninstall"]);
        match cli.command {
            Some(CliCommand::Uninstall(args)) => {
                assert_eq!(args.options, UninstallOptions::default())
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::parse_from([
            "cursor-installer",
            "uninstall",
            "--preserve-cache",
            "--preserve-config",
        ]);
        match cli.command {
            Some(CliCommand::Uninstall(args)) => {
                assert!(args.options.preserve_cache);
                assert!(args.options.preserve_config);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_home_applies_after_subcommand() {
        let cli = Cli::parse_from(["cursor-installer", "status", "--home", "/tmp/h"]);
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/h")));
    }

    #[test]
    fn install_requires_appimage() {
        assert!(Cli::try_parse_from(["cursor-installer", "install"]).is_err());
    }
}
