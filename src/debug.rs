//! Debug logging for webview-shell
//!
//! All `log` records are bridged into a debug log file:
//! `/tmp/webview_shell_debug.log` on Unix/macOS, `%TEMP%\webview_shell_debug.log`
//! on Windows. When `RUST_LOG` is set they are mirrored to stderr as well.
//!
//! Level precedence: `--log-level` > `RUST_LOG` > config `log_level` > off.
//! The config level arrives after the logger is installed and only applies
//! when neither of the first two was given.

use chrono::Local;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use webview_shell_config::LogLevel;

const LOG_FILE_NAME: &str = "webview_shell_debug.log";

/// Where the active log level came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSource {
    Cli,
    Env,
    Default,
}

struct BridgeLogger {
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl BridgeLogger {
    fn new(mirror_stderr: bool) -> Self {
        Self {
            file: Mutex::new(None),
            mirror_stderr,
        }
    }

    fn write_line(&self, line: &str) {
        let mut file = self.file.lock();
        if file.is_none() {
            *file = open_log_file();
        }
        if let Some(f) = file.as_mut() {
            let _ = f.write_all(line.as_bytes());
            let _ = f.flush();
        }
    }
}

impl log::Log for BridgeLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
        self.write_line(&line);
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(f) = self.file.lock().as_mut() {
            let _ = f.flush();
        }
    }
}

static LOGGER: OnceLock<BridgeLogger> = OnceLock::new();
static LEVEL_SOURCE: OnceLock<LevelSource> = OnceLock::new();

/// Path of the debug log file
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp").join(LOG_FILE_NAME)
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join(LOG_FILE_NAME)
    }
}

fn open_log_file() -> Option<File> {
    let path = log_path();
    match OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&path)
    {
        Ok(mut f) => {
            let _ = writeln!(
                f,
                "{}\nwebview-shell debug session started at {}\n{}",
                "=".repeat(80),
                Local::now().to_rfc3339(),
                "=".repeat(80)
            );
            Some(f)
        }
        // Silently fail; logging must never take the shell down
        Err(_) => None,
    }
}

/// Pick the startup log level from the CLI flag and `RUST_LOG`.
///
/// An unparseable `RUST_LOG` (e.g. a module filter) still turns logging on at
/// `Info`.
pub fn resolve_initial_level(
    cli_level: Option<LogLevel>,
    rust_log: Option<&str>,
) -> (LogLevel, LevelSource) {
    if let Some(level) = cli_level {
        return (level, LevelSource::Cli);
    }
    if let Some(value) = rust_log {
        return (value.parse().unwrap_or(LogLevel::Info), LevelSource::Env);
    }
    (LogLevel::Off, LevelSource::Default)
}

/// Install the `log` bridge. Safe to call more than once; later calls are ignored.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let (level, source) = resolve_initial_level(cli_level, rust_log.as_deref());

    let logger = LOGGER.get_or_init(|| BridgeLogger::new(rust_log.is_some()));
    if log::set_logger(logger).is_err() {
        return;
    }
    log::set_max_level(level.to_level_filter());
    let _ = LEVEL_SOURCE.set(source);
}

/// Apply the config file's level unless the CLI or `RUST_LOG` already chose one.
pub fn apply_config_level(level: LogLevel) {
    if LEVEL_SOURCE.get() == Some(&LevelSource::Default) {
        log::set_max_level(level.to_level_filter());
        log::info!("Log level from config: {}", level);
    }
}

// Category-tagged logging; the category becomes the record target
#[macro_export]
macro_rules! debug_error {
    ($category:expr, $($arg:tt)*) => {
        log::error!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_info {
    ($category:expr, $($arg:tt)*) => {
        log::info!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_log {
    ($category:expr, $($arg:tt)*) => {
        log::debug!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_trace {
    ($category:expr, $($arg:tt)*) => {
        log::trace!(target: $category, $($arg)*)
    };
}
