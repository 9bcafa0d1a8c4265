//! Configuration system for the webview-shell desktop shell.
//!
//! This crate provides configuration loading and default values for the
//! shell. It includes:
//!
//! - The [`Config`] struct with serde defaults and YAML persistence
//! - The development-mode environment overlay
//! - Resolution of the local document loaded into every window
//! - Typed [`ConfigError`] variants

pub mod config;
pub mod error;
mod types;

pub use config::{
    APP_NAME, DEFAULT_DOCUMENT, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, DEV_ENV_VALUE,
    ENV_VAR, Config, is_development,
};
pub use error::ConfigError;
pub use types::LogLevel;
