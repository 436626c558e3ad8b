use crate::{BinProbe, BinState, CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Recycle bin stand-in for targets without a shell recycle bin API.
///
/// Every call fails with [`CoreError::Unsupported`], so [`BinProbe::read`]
/// always reports [`crate::ProbeReading::FailedAsEmpty`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RecycleBin;

impl RecycleBin {
    /// Create the probe.
    pub fn new() -> Self {
        Self
    }

    #[track_caller]
    fn unsupported<T>() -> CoreResult<T> {
        Err(CoreError::Unsupported {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl BinProbe for RecycleBin {
    fn query(&self) -> CoreResult<BinState> {
        Self::unsupported()
    }

    fn clear(&self) -> CoreResult<()> {
        Self::unsupported()
    }

    fn open_folder(&self) -> CoreResult<()> {
        Self::unsupported()
    }
}
