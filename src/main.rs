use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cursor_installer::cli::Cli::parse();
    if cursor_installer::logging::logs_to_stderr(cli.command.as_ref()) {
        cursor_installer::logging::init_tracing(cli.log_filter.clone())?;
    }

    match cli.command.clone() {
        Some(cursor_installer::cli::CliCommand::Desktop) | None => {
            let options = cursor_installer::DesktopOptions {
                home: cli.home.clone(),
                ..Default::default()
            };
            cursor_installer::desktop::run(options)?;
        }
        Some(cursor_installer::cli::CliCommand::Tui) => {
            let service = cursor_installer::config::from_cli(&cli)?;
            cursor_installer::tui::run(service)?;
        }
        Some(command) => {
            let service = cursor_installer::config::from_cli(&cli)?;
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            cursor_installer::commands::execute(&service, command, &mut handle)?;
        }
    }

    Ok(())
}
