use anyhow::Result;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::cli::CliCommand;

const DEFAULT_FILTER: &str = "warn";

/// The terminal UI owns the screen, so stderr logging stays off while it runs.
pub fn logs_to_stderr(command: Option<&CliCommand>) -> bool {
    !matches!(command, Some(CliCommand::Tui))
}

/// Install the global subscriber. Output goes to stderr so stdout only carries progress lines.
pub fn init_tracing(filter: Option<String>) -> Result<()> {
    let filter = filter.unwrap_or_else(|| DEFAULT_FILTER.to_string());
    let directive: Directive = filter.parse()?;
    let env_filter = EnvFilter::builder()
        .with_default_directive(directive)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_directive() {
        assert!(init_tracing(Some("cursor_installer=loud".into())).is_err());
    }

    #[test]
    fn terminal_ui_keeps_stderr_quiet() {
        assert!(!logs_to_stderr(Some(&CliCommand::Tui)));
        assert!(logs_to_stderr(Some(&CliCommand::Desktop)));
        assert!(logs_to_stderr(None));
    }

    #[test]
    fn accepts_level_names() {
        assert!(init_tracing(Some("debug".into())).is_ok());
    }
}
