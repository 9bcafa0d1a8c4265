// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Result;
use webview_shell::app::App;
use webview_shell::cli;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let runtime_options = cli::process_cli();

    // Route all log::info!() etc. to the debug log file.
    // CLI --log-level flag takes highest precedence, then RUST_LOG, then config (applied later).
    webview_shell::debug::init_log_bridge(runtime_options.log_level);

    log::info!("Starting webview-shell {}", webview_shell::VERSION);

    let result = App::new(runtime_options).and_then(App::run);

    match result {
        Ok(()) => {
            log::info!("Event loop exited");
            Ok(())
        }
        Err(ref e) => {
            eprintln!("webview-shell: error: {e:#}");
            // On Linux, provide a hint when the error looks like a missing display server
            #[cfg(target_os = "linux")]
            {
                let msg = format!("{e:?}").to_lowercase();
                if msg.contains("display")
                    || msg.contains("wayland")
                    || msg.contains("x server")
                    || msg.contains("gtk")
                {
                    eprintln!(
                        "webview-shell: hint: no usable display found. Web views need an X11 \
                         session (DISPLAY) with GTK and WebKitGTK available"
                    );
                }
            }
            // Return the original error so main exits with code 1 (anyhow default)
            result
        }
    }
}
