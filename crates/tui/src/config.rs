pub use cursor_installer_core::config::*;

use anyhow::Context;

use crate::cli::Cli;
use crate::LifecycleService;

pub fn from_cli(cli: &Cli) -> anyhow::Result<LifecycleService> {
    LifecycleService::discover(cli.home.clone()).context("failed to resolve install locations")
}
