//! Recycle bin access.
//!
//! [`BinProbe`] is the seam between the tray logic and the OS. The provided
//! [`BinProbe::read`] turns every query failure into
//! [`ProbeReading::FailedAsEmpty`]: a stale "full" icon is worse than a
//! momentarily wrong "empty" one, and the poller must never die on an OS error.

mod bin_state;
#[cfg(not(target_os = "windows"))]
mod unsupported;
#[cfg(target_os = "windows")]
mod windows;

pub use bin_state::{BinState, ProbeReading};

#[cfg(not(target_os = "windows"))]
pub use unsupported::RecycleBin;
#[cfg(target_os = "windows")]
pub use windows::RecycleBin;

use crate::CoreResult;

use tracing::warn;

/// Access to the OS recycle bin.
pub trait BinProbe: Send + Sync {
    /// Query whether the bin holds items. May fail.
    fn query(&self) -> CoreResult<BinState>;

    /// Empty the bin without confirmation or progress UI.
    ///
    /// Must succeed without doing anything when the bin is already empty.
    fn clear(&self) -> CoreResult<()>;

    /// Open the native recycle bin window. Does not wait for it.
    fn open_folder(&self) -> CoreResult<()>;

    /// Query with the fail-safe policy applied.
    fn read(&self) -> ProbeReading {
        match self.query() {
            Ok(state) => ProbeReading::Confirmed(state),
            Err(e) => {
                warn!(error = %e, "Recycle bin query failed, treating as empty");
                ProbeReading::FailedAsEmpty
            }
        }
    }

    /// `true` only when the bin is confirmed to hold items.
    fn has_items(&self) -> bool {
        self.read().state() == BinState::Full
    }
}
