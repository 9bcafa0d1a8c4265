//! Shell configuration management.
//!
//! Re-exports all configuration types from the `webview-shell-config` crate.
//! All configuration types, defaults, and utilities are defined there.

pub use webview_shell_config::*;
