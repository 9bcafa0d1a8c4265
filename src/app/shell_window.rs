//! One native window with its embedded web view.

use super::content::{CONTENT_SCHEME, ContentRoot};
use crate::error::ShellError;
use winit::window::Window;
use wry::{WebView, WebViewBuilder};

/// Actions forwarded to the page as a `shell-action` DOM event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    ToggleFullscreen,
}

impl PageAction {
    pub fn name(self) -> &'static str {
        match self {
            PageAction::ToggleFullscreen => "toggleFullscreen",
        }
    }

    /// Script that delivers this action to the page.
    pub fn script(self) -> String {
        format!(
            "window.dispatchEvent(new CustomEvent('shell-action', {{ detail: '{}' }}));",
            self.name()
        )
    }
}

pub struct ShellWindow {
    // Declared before `window` so the web view is torn down first
    webview: WebView,
    window: Window,
}

impl ShellWindow {
    /// Embed a web view showing `content` into `window`.
    pub fn open(window: Window, content: &ContentRoot, dev_tools: bool) -> Result<Self, ShellError> {
        let served = content.clone();
        let start_url = content.start_url();
        log::info!("loading: {}", start_url);

        let webview = WebViewBuilder::new()
            .with_custom_protocol(CONTENT_SCHEME.to_string(), move |_id, request| {
                served.serve(request.uri().path())
            })
            .with_devtools(true)
            .with_url(&start_url)
            .build(&window)?;

        if dev_tools {
            webview.open_devtools();
        }

        Ok(Self { webview, window })
    }

    pub fn reload(&self) -> Result<(), ShellError> {
        self.webview.reload()?;
        Ok(())
    }

    pub fn send_action(&self, action: PageAction) -> Result<(), ShellError> {
        log::debug!("Sending {} to {:?}", action.name(), self.window.id());
        self.webview.evaluate_script(&action.script())?;
        Ok(())
    }

    pub fn toggle_devtools(&self) {
        if self.webview.is_devtools_open() {
            self.webview.close_devtools();
        } else {
            self.webview.open_devtools();
        }
    }
}
