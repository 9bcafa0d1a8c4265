//! Command-line interface for webview-shell.

use clap::Parser;
use std::path::PathBuf;
use webview_shell_config::LogLevel;

/// webview-shell - A desktop shell that hosts a local web page in native windows
#[derive(Parser, Debug)]
#[command(name = "webview-shell")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Development mode: open the web inspector in every new window
    #[arg(long)]
    pub dev: bool,

    /// Page to load instead of the bundled app/index.html
    #[arg(long, value_name = "PATH")]
    pub document: Option<PathBuf>,

    /// Debug log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Exit after the specified number of seconds
    #[arg(long, value_name = "SECONDS", value_parser = parse_seconds)]
    pub exit_after: Option<f64>,
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuntimeOptions {
    /// Force development mode
    pub dev: bool,
    /// Document override
    pub document: Option<PathBuf>,
    /// Log level override (highest precedence)
    pub log_level: Option<LogLevel>,
    /// Exit after this many seconds
    pub exit_after: Option<f64>,
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        Self {
            dev: cli.dev,
            document: cli.document,
            log_level: cli.log_level,
            exit_after: cli.exit_after,
        }
    }
}

/// Parse process arguments into runtime options. `--help`/`--version` and
/// usage errors exit the process inside clap.
pub fn process_cli() -> RuntimeOptions {
    Cli::parse().into()
}

fn parse_seconds(value: &str) -> Result<f64, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number of seconds"))?;
    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds)
    } else {
        Err(format!("exit-after must be a positive number, got {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "webview-shell",
            "--dev",
            "--document",
            "page.html",
            "--log-level",
            "debug",
            "--exit-after",
            "2.5",
        ])
        .expect("valid arguments");
        let options = RuntimeOptions::from(cli);
        assert!(options.dev);
        assert_eq!(options.document, Some(PathBuf::from("page.html")));
        assert_eq!(options.log_level, Some(LogLevel::Debug));
        assert_eq!(options.exit_after, Some(2.5));
    }

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["webview-shell"]).expect("no arguments");
        assert_eq!(RuntimeOptions::from(cli), RuntimeOptions::default());
    }

    #[test]
    fn test_exit_after_must_be_positive() {
        assert!(Cli::try_parse_from(["webview-shell", "--exit-after", "0"]).is_err());
        assert!(Cli::try_parse_from(["webview-shell", "--exit-after", "-1"]).is_err());
        assert!(Cli::try_parse_from(["webview-shell", "--log-level", "loud"]).is_err());
    }
}
