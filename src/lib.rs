// Library exports for testing and potential library use
//
// Everything runs on the winit main thread. Window bookkeeping is owned by
// `app::WindowManager` and mutated only from event-loop callbacks, so no
// state in this crate is shared across threads; the one lock
// (`parking_lot::Mutex` in `debug`) guards the log file against `log` callers
// on other threads.

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod platform;

pub use error::ShellError;
