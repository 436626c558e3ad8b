//! Micro Bin Core Library
//!
//! Recycle bin state tracking for the Micro Bin tray utility: settings
//! persistence, the OS probe, icon selection, the background poller and the
//! toolkit-independent tray controller.
//!
//! # Example
//!
//! ```no_run
//! use micro_bin_core::{BinProbe, RecycleBin, SettingsStore};
//!
//! let store = SettingsStore::locate()?;
//! let settings = store.load();
//!
//! let probe = RecycleBin::new();
//! println!("theme = {:?}, full = {}", settings.theme, probe.has_items());
//! # Ok::<(), micro_bin_core::CoreError>(())
//! ```

mod controller;
mod error;
mod icon;
mod poller;
mod probe;
mod settings;

pub use {
    controller::{Flow, MenuAction, TrayController, TrayView},
    error::{CoreError, Result as CoreResult},
    icon::{DEFAULT_ASSET_DIR, IconSelector},
    poller::{Poller, PollerPhase, PollerRuntime, StateListener},
    probe::{BinProbe, BinState, ProbeReading, RecycleBin},
    settings::{PollInterval, Settings, SettingsStore, Theme},
};

#[cfg(test)]
mod tests;
