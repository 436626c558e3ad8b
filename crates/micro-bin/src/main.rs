//! Micro Bin: recycle bin state in the Windows notification area.

#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

#[cfg(target_os = "windows")]
mod app;
#[cfg(target_os = "windows")]
mod error;
mod logging;
#[cfg(target_os = "windows")]
mod tray_command;
#[cfg(target_os = "windows")]
mod tray_manager;

#[cfg(target_os = "windows")]
pub(crate) use {
    error::{AppError, Result as AppResult},
    tray_command::TrayCommand,
    tray_manager::TrayManager,
};

/// Application entry point.
#[cfg(target_os = "windows")]
fn main() {
    let log_guard = logging::init();

    app::run(log_guard);
}

/// Application entry point.
#[cfg(not(target_os = "windows"))]
fn main() {
    let log_guard = logging::init();

    tracing::error!("Micro Bin needs the Windows notification area and shell recycle bin");
    drop(log_guard);
    std::process::exit(1);
}
