//! Typed errors for the shell.
//!
//! The binary and `App::run` work in `anyhow::Result`; everything below the
//! application boundary returns `ShellError` so callers can tell host failures
//! apart.

use webview_shell_config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// The host refused to open a native window.
    #[error("failed to create window: {0}")]
    WindowCreation(#[from] winit::error::OsError),

    /// The embedded web view could not be built or driven.
    #[error("web view error: {0}")]
    WebView(#[from] wry::Error),

    /// A native menu item could not be created or attached.
    #[error("menu error: {0}")]
    Menu(#[from] muda::Error),

    /// The event loop could not be created or exited abnormally.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
