//! Icon asset lookup.

use crate::{BinState, Theme};

use std::path::{Path, PathBuf};

/// Directory searched for icon files when none is given.
pub const DEFAULT_ASSET_DIR: &str = "assets";

/// Maps a theme and bin state to one of four bundled icon files.
///
/// Lookup is pure: the selector never touches the filesystem. Callers decide
/// what to do when the returned file does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSelector {
    asset_dir: PathBuf,
}

impl IconSelector {
    /// Selector resolving file names under `asset_dir`.
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
        }
    }

    /// Directory icon files are resolved against.
    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    /// Path of the icon for `theme` and `state`.
    pub fn path_for(&self, theme: Theme, state: BinState) -> PathBuf {
        self.asset_dir.join(Self::file_name(theme, state))
    }

    /// Bundled file name, e.g. `bin_full_dark.ico`.
    pub fn file_name(theme: Theme, state: BinState) -> &'static str {
        match (theme, state) {
            (Theme::Light, BinState::Empty) => "bin_empty_light.ico",
            (Theme::Light, BinState::Full) => "bin_full_light.ico",
            (Theme::Dark, BinState::Empty) => "bin_empty_dark.ico",
            (Theme::Dark, BinState::Full) => "bin_full_dark.ico",
        }
    }
}

impl Default for IconSelector {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_DIR)
    }
}
