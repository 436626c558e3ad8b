use crate::{PollInterval, Theme};

/// Actions reachable from the tray context menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuAction {
    /// Open the native recycle bin window.
    Open,
    /// Empty the recycle bin if it holds items.
    Empty,
    /// Switch icon theme.
    SetTheme(Theme),
    /// Switch poll interval.
    SetInterval(PollInterval),
    /// Stop polling and quit.
    Exit,
}

/// What the event loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Tear down the tray and end the process.
    Exit,
}
