use micro_bin_core::BinState;
use tray_icon::menu::MenuId;

/// Events delivered to the main UI thread's event loop.
///
/// The main thread owns the controller (because `TrayIcon` is `!Send`),
/// so poller notifications and menu clicks both flow through this enum.
#[derive(Debug, Clone)]
pub enum TrayCommand {
    /// The poller saw the recycle bin change state.
    BinChanged(BinState),
    /// A tray menu entry was clicked.
    MenuClicked(MenuId),
}
