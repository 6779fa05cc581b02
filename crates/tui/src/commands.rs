use std::io::Write;

use anyhow::{anyhow, Result};

use crate::cli::{CliCommand, InstallArgs, StatusArgs, UninstallArgs};
use crate::model::InstallRequest;
use crate::status::InstallStatus;
use crate::LifecycleService;

pub fn execute<W: Write>(service: &LifecycleService, command: CliCommand, mut writer: W) -> Result<()> {
    match command {
        CliCommand::Install(args) => handle_install(service, &args, &mut writer),
        CliCommand::Uninstall(args) => handle_uninstall(service, &args, &mut writer),
        CliCommand::Status(args) => handle_status(service, &args, &mut writer),
        CliCommand::Tui | CliCommand::Desktop => {
            Err(anyhow!("launch interactive surfaces directly"))
        }
    }
}

/// Any install failure is returned as an error so the process exits non-zero.
fn handle_install<W: Write>(
    service: &LifecycleService,
    args: &InstallArgs,
    mut writer: W,
) -> Result<()> {
    let name = service.product().name;
    writeln!(writer, "Starting {name} installation...")?;

    let report = service.install(InstallRequest::from(args))?;
    for line in report.lines() {
        writeln!(writer, "{line}")?;
    }

    writeln!(writer)?;
    writeln!(writer, "Installation completed successfully!")?;
    writeln!(writer, "You can now launch {name} from your applications menu")?;
    Ok(())
}

/// Step failures are reported inline; the command itself still succeeds.
fn handle_uninstall<W: Write>(
    service: &LifecycleService,
    args: &UninstallArgs,
    mut writer: W,
) -> Result<()> {
    let name = service.product().name;
    writeln!(writer, "Starting {name} uninstallation...")?;
    writeln!(writer)?;

    let report = service.uninstall(args.options);
    for line in report.lines() {
        writeln!(writer, "{line}")?;
    }

    writeln!(writer)?;
    if report.has_failures() {
        writeln!(writer, "Uninstallation finished with warnings.")?;
    } else {
        writeln!(writer, "Uninstallation completed successfully!")?;
        writeln!(writer, "{name} has been removed from your system.")?;
    }
    Ok(())
}

fn handle_status<W: Write>(service: &LifecycleService, args: &StatusArgs, mut writer: W) -> Result<()> {
    let status = service.status();
    if args.json {
        serde_json::to_writer_pretty(&mut writer, &status)?;
        writeln!(writer)?;
        return Ok(());
    }

    writeln!(writer, "Status: {}", status.label())?;
    if let InstallStatus::Installed {
        artifacts,
        desktop_entry,
        launcher_target,
    } = &status
    {
        for artifact in artifacts {
            writeln!(writer, "  AppImage: {}", artifact.display())?;
        }
        match desktop_entry {
            Some(path) => writeln!(writer, "  Desktop entry: {}", path.display())?,
            None => writeln!(writer, "  Desktop entry: missing")?,
        }
        if let Some(target) = launcher_target {
            writeln!(writer, "  Launcher runs: {}", target.display())?;
        }
    }
    Ok(())
}
