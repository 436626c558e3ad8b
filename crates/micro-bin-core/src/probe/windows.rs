use crate::{BinProbe, BinState, CoreError, CoreResult};

use std::{mem::size_of, ptr};

use tracing::{debug, info, instrument};
use windows_sys::Win32::UI::Shell::{
    SHERB_NOCONFIRMATION, SHERB_NOPROGRESSUI, SHEmptyRecycleBinW, SHQUERYRBINFO,
    SHQueryRecycleBinW,
};

const RECYCLE_BIN_FOLDER: &str = "shell:RecycleBinFolder";

/// Recycle bin of every local drive, via the Windows shell API.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecycleBin;

impl RecycleBin {
    /// Create the probe.
    pub fn new() -> Self {
        Self
    }
}

impl BinProbe for RecycleBin {
    #[track_caller]
    fn query(&self) -> CoreResult<BinState> {
        let mut info = SHQUERYRBINFO {
            cbSize: size_of::<SHQUERYRBINFO>() as u32,
            i64Size: 0,
            i64NumItems: 0,
        };

        // SAFETY: a null root path queries all drives; `info` is a valid,
        // correctly sized out-parameter for the duration of the call.
        let hr = unsafe { SHQueryRecycleBinW(ptr::null(), &mut info) };
        if hr < 0 {
            return Err(CoreError::recycle_bin(
                "query",
                format!("HRESULT 0x{:08X}", hr as u32),
            ));
        }

        let items = info.i64NumItems;
        Ok(BinState::from_count(items))
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn clear(&self) -> CoreResult<()> {
        if self.query()? == BinState::Empty {
            debug!("Recycle bin already empty");
            return Ok(());
        }

        // SAFETY: null window and null root path are documented as "no owner"
        // and "all drives".
        let hr = unsafe {
            SHEmptyRecycleBinW(
                ptr::null_mut(),
                ptr::null(),
                SHERB_NOCONFIRMATION | SHERB_NOPROGRESSUI,
            )
        };
        if hr < 0 {
            return Err(CoreError::recycle_bin(
                "empty",
                format!("HRESULT 0x{:08X}", hr as u32),
            ));
        }

        info!("Recycle bin emptied");
        Ok(())
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn open_folder(&self) -> CoreResult<()> {
        open::that_detached(RECYCLE_BIN_FOLDER)
            .map_err(|e| CoreError::recycle_bin("open", e.to_string()))?;

        debug!("Recycle bin window requested");
        Ok(())
    }
}
