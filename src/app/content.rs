//! Serves the local page and its sibling assets to the embedded web views.
//!
//! Pages are loaded through the `shell` custom protocol rather than `file://`
//! URLs, so everything under the document's directory shares one origin and
//! can load its own scripts and styles without cross-origin restrictions.

use std::borrow::Cow;
use std::fs;
use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};
use wry::http::{Response, StatusCode, header::CONTENT_TYPE};

/// Custom protocol name registered on every web view.
pub const CONTENT_SCHEME: &str = "shell";

/// Origin the custom protocol is reachable at. WebView2 maps custom schemes
/// to `http://<scheme>.localhost`.
#[cfg(target_os = "windows")]
pub const CONTENT_ORIGIN: &str = "http://shell.localhost";
#[cfg(not(target_os = "windows"))]
pub const CONTENT_ORIGIN: &str = "shell://localhost";

/// The directory served to web views and the page opened first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRoot {
    pub root: PathBuf,
    pub entry: String,
}

impl ContentRoot {
    /// Split a document path into its serving directory and entry file.
    pub fn from_document(document: &Path) -> Self {
        let root = document
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let entry = document
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "index.html".to_string());
        Self { root, entry }
    }

    /// URL loaded into new windows.
    pub fn start_url(&self) -> String {
        format!("{}/{}", CONTENT_ORIGIN, self.entry)
    }

    /// Answer one custom-protocol request.
    pub fn serve(&self, request_path: &str) -> Response<Cow<'static, [u8]>> {
        let Some(file) = resolve_asset(&self.root, request_path, &self.entry) else {
            crate::debug_error!("CONTENT", "Rejected content request outside root: {}", request_path);
            return text_response(StatusCode::FORBIDDEN, "Forbidden");
        };

        match fs::read(&file) {
            Ok(bytes) => {
                crate::debug_trace!("CONTENT", "Serving {:?} ({} bytes)", file, bytes.len());
                Response::builder()
                    .status(StatusCode::OK)
                    .header(CONTENT_TYPE, content_type(&file))
                    .body(Cow::Owned(bytes))
                    .unwrap_or_else(|e| {
                        log::error!("Failed to build response for {:?}: {}", file, e);
                        Response::new(Cow::Borrowed(&[][..]))
                    })
            }
            Err(e) => {
                log::warn!("Content not found {:?}: {}", file, e);
                text_response(StatusCode::NOT_FOUND, &format!("Not found: {request_path}"))
            }
        }
    }
}

/// Map a request path onto a file below `root`.
///
/// Each segment is percent-decoded before it is checked. An empty path maps
/// to `entry`. Paths that climb out of `root`, carry an absolute prefix, or
/// hide a separator inside an encoded segment are rejected.
pub fn resolve_asset(root: &Path, request_path: &str, entry: &str) -> Option<PathBuf> {
    let trimmed = request_path.trim_start_matches('/');
    if trimmed.is_empty() {
        return Some(root.join(entry));
    }

    let mut resolved = root.to_path_buf();
    for segment in trimmed.split('/') {
        let decoded = percent_decode_str(segment).decode_utf8().ok()?;
        if decoded.contains(['/', '\\']) {
            return None;
        }
        for component in Path::new(decoded.as_ref()).components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
    }
    Some(resolved)
}

/// MIME type by file extension.
pub fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("js") | Some("mjs") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("wasm") => "application/wasm",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

fn text_response(status: StatusCode, body: &str) -> Response<Cow<'static, [u8]>> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Cow::Owned(body.as_bytes().to_vec()))
        .unwrap_or_else(|_| Response::new(Cow::Borrowed(&[][..])))
}
