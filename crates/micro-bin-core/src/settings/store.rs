//! Settings persistence.
//!
//! Reads and writes the JSON settings document in the per-user configuration
//! directory. Loading never fails: a missing or damaged document yields the
//! defaults so the tray can always start.

use crate::{
    CoreError, CoreResult,
    settings::{APP_DIR_NAME, SETTINGS_FILE_NAME, Settings},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use error_location::ErrorLocation;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info, instrument, warn};

/// Loads and saves [`Settings`] at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store backed by an explicit file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `<user config dir>/MicroBin/config.json`.
    ///
    /// On Windows this is `%APPDATA%\MicroBin\config.json`.
    #[track_caller]
    pub fn locate() -> CoreResult<Self> {
        Ok(Self::new(Self::app_dir()?.join(SETTINGS_FILE_NAME)))
    }

    /// Per-user directory holding the settings document and the log files.
    #[track_caller]
    pub fn app_dir() -> CoreResult<PathBuf> {
        let base = BaseDirs::new().ok_or_else(|| CoreError::NoConfigDir {
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(base.config_dir().join(APP_DIR_NAME))
    }

    /// Path of the settings document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults.
    ///
    /// Keys absent from the document are filled from [`Settings::default`].
    /// An unreadable or unparsable document is logged and replaced by the
    /// defaults as a whole.
    #[instrument(skip(self), fields(path = ?self.path))]
    pub fn load(&self) -> Settings {
        if !self.path.exists() {
            debug!("No settings file, using defaults");
            return Settings::default();
        }

        match self.try_load() {
            Ok(settings) => {
                info!(
                    theme = settings.theme.as_str(),
                    check_interval = settings.poll_interval.as_secs(),
                    "Settings loaded"
                );
                settings
            }
            Err(e) => {
                warn!(error = %e, "Settings file unusable, using defaults");
                Settings::default()
            }
        }
    }

    /// Save settings, creating the parent directory if needed.
    ///
    /// Writes to a temporary file first, then renames over the document.
    #[track_caller]
    #[instrument(skip(self, settings), fields(path = ?self.path))]
    pub fn save(&self, settings: &Settings) -> CoreResult<()> {
        let missing_dir = self
            .path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty() && !dir.exists());

        if let Some(dir) = missing_dir {
            fs::create_dir_all(dir).map_err(|source| CoreError::SettingsIo {
                path: dir.to_path_buf(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;
            debug!(dir = ?dir, "Created settings directory");
        }

        let contents = Self::encode(settings)?;
        let temp_path = self.path.with_extension("json.tmp");

        let io_err = |path: &Path, source: std::io::Error| CoreError::SettingsIo {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        };

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| io_err(&temp_path, e))?;
        temp_file
            .write_all(&contents)
            .map_err(|e| io_err(&temp_path, e))?;
        temp_file.sync_all().map_err(|e| io_err(&temp_path, e))?;
        drop(temp_file);

        fs::rename(&temp_path, &self.path).map_err(|e| io_err(&self.path, e))?;

        info!(
            theme = settings.theme.as_str(),
            check_interval = settings.poll_interval.as_secs(),
            "Settings saved"
        );

        Ok(())
    }

    #[track_caller]
    fn try_load(&self) -> CoreResult<Settings> {
        let contents = fs::read_to_string(&self.path).map_err(|source| CoreError::SettingsIo {
            path: self.path.clone(),
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        serde_json::from_str(&contents).map_err(|e| CoreError::SettingsFormat {
            reason: format!("Failed to parse settings: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Pretty-printed JSON with a four-space indent.
    #[track_caller]
    fn encode(settings: &Settings) -> CoreResult<Vec<u8>> {
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));

        settings
            .serialize(&mut serializer)
            .map_err(|e| CoreError::SettingsFormat {
                reason: format!("Failed to serialize settings: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(buf)
    }
}
