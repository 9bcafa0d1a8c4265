//! Application module for webview-shell
//!
//! This module contains the main application logic, including:
//! - `App`: Entry point that initializes and runs the event loop
//! - `WindowManager`: Owns the window registry and dispatches menu events
//! - `WindowRegistry`: Bookkeeping for open windows
//! - `ShellWindow`: One native window with its embedded web view

use crate::cli::RuntimeOptions;
use crate::config::Config;
use crate::menu::{MenuManager, MenuTemplate, ShortcutRegistry};
use crate::platform::{self, Platform};
use anyhow::{Context, Result};
use std::path::PathBuf;
use winit::event_loop::{ControlFlow, EventLoop};

pub mod content;
pub mod handler;
pub mod lifecycle;
pub mod registry;
pub mod shell_window;
pub mod window_manager;

pub use content::ContentRoot;
pub use lifecycle::{QuitGuard, QuitReason};
pub use registry::{CloseOutcome, WindowKey, WindowPhase, WindowRegistry};
pub use window_manager::WindowManager;

/// Main application entry point
pub struct App {
    config: Config,
    content: ContentRoot,
    runtime_options: RuntimeOptions,
}

impl App {
    /// Create a new application
    pub fn new(runtime_options: RuntimeOptions) -> Result<Self> {
        let mut config = Config::load().context("failed to load configuration")?;

        if let Some(ref document) = runtime_options.document {
            config.document = Some(document.clone());
            log::info!("CLI override: loading document {:?}", document);
        }

        crate::debug::apply_config_level(config.log_level);

        let install_dir = install_dir();
        let fallback_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let document = config.resolve_document(install_dir.as_deref(), Some(fallback_dir.as_path()));
        let content = ContentRoot::from_document(&document);

        Ok(Self {
            config,
            content,
            runtime_options,
        })
    }

    /// Run the application
    pub fn run(self) -> Result<()> {
        platform::init_host()?;

        // The menu exists before the event loop so Windows can hook its
        // accelerator table into the message loop
        let template = MenuTemplate::build(Platform::current(), &self.config.app_name);
        let menu = MenuManager::new(&template)
            .map_err(|e| anyhow::anyhow!("failed to build application menu: {}", e))?;
        let shortcuts = (!platform::menu_bar_handles_shortcuts())
            .then(|| ShortcutRegistry::from_template(&template));

        let event_loop = build_event_loop(&menu)?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut window_manager = WindowManager::new(
            self.config,
            self.content,
            self.runtime_options,
            menu,
            shortcuts,
        );

        event_loop.run_app(&mut window_manager)?;

        Ok(())
    }
}

fn build_event_loop(menu: &MenuManager) -> Result<EventLoop<()>> {
    let mut builder = EventLoop::builder();

    #[cfg(target_os = "windows")]
    {
        use winit::platform::windows::EventLoopBuilderExtWindows;
        builder.with_msg_hook(menu.accelerator_hook());
    }
    #[cfg(not(target_os = "windows"))]
    let _ = menu;

    Ok(builder.build()?)
}

/// Directory containing the running executable
fn install_dir() -> Option<PathBuf> {
    match std::env::current_exe() {
        Ok(exe) => exe.parent().map(PathBuf::from),
        Err(e) => {
            log::warn!("Could not determine executable location: {}", e);
            None
        }
    }
}
