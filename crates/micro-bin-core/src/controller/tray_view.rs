use crate::{CoreResult, Settings};

use std::path::Path;

/// The visible half of the tray: icon image and menu checkmarks.
///
/// Implemented over the native tray toolkit by the binary, and by recording
/// fakes in tests.
pub trait TrayView {
    /// Replace the displayed icon with the image file at `path`.
    fn set_icon(&mut self, path: &Path) -> CoreResult<()>;

    /// Make the theme and interval radio groups reflect `settings`.
    fn sync_menu(&mut self, settings: &Settings);
}
