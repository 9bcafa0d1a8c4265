//! Application event handler
//!
//! This module implements the winit `ApplicationHandler` trait for `WindowManager`:
//! `resumed` is the application-ready signal, window events carry focus, close
//! and keyboard-shortcut signals, and `about_to_wait` drains menu events and runs the
//! all-windows-closed check once per event batch.

mod app_handler_impl;
