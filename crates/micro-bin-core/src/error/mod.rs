use std::{panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by the settings store, the recycle bin probe and the tray view.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings document could not be read or written.
    #[error("Settings IO error at {path:?}: {source} {location}")]
    SettingsIo {
        /// File or directory involved in the failed operation.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Settings document could not be encoded or decoded.
    #[error("Settings format error: {reason} {location}")]
    SettingsFormat {
        /// Description of the format problem.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No per-user configuration directory could be resolved.
    #[error("No user configuration directory available {location}")]
    NoConfigDir {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The OS recycle bin call failed.
    #[error("Recycle bin {operation} failed: {reason} {location}")]
    RecycleBin {
        /// Which recycle bin operation failed.
        operation: &'static str,
        /// Description of the failure (HRESULT or OS message).
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Recycle bin access is not available on this platform.
    #[error("Recycle bin is not supported on this platform {location}")]
    Unsupported {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The tray view rejected an update.
    #[error("Tray error: {reason} {location}")]
    Tray {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Build a [`CoreError::RecycleBin`] tagged with the caller's location.
    #[track_caller]
    pub fn recycle_bin(operation: &'static str, reason: impl Into<String>) -> Self {
        CoreError::RecycleBin {
            operation,
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Build a [`CoreError::Tray`] tagged with the caller's location.
    #[track_caller]
    pub fn tray(reason: impl Into<String>) -> Self {
        CoreError::Tray {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
