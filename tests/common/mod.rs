//! Shared integration test helpers for webview-shell.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{registry_with, write_file};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers are used per file.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use webview_shell::app::{WindowKey, WindowRegistry};

/// Registry with one window per id, opened in the given order
/// (so the last id ends up first in the window list).
pub fn registry_with(ids: &[u64]) -> WindowRegistry<u64> {
    let mut registry = WindowRegistry::new();
    for &id in ids {
        assert!(registry.register(WindowKey(id), id));
    }
    registry
}

/// Write `contents` to `dir/relative`, creating parent directories.
pub fn write_file(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, contents).expect("write test file");
    path
}

/// All orderings of `items` (small inputs only).
pub fn permutations(items: &[u64]) -> Vec<Vec<u64>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut result = Vec::new();
    for (i, &first) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, first);
            result.push(tail);
        }
    }
    result
}
