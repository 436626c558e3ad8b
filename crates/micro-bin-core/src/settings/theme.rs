use serde::{Deserialize, Serialize};

/// Icon theme selected from the tray menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Icons drawn for a light taskbar.
    #[default]
    Light,
    /// Icons drawn for a dark taskbar.
    Dark,
}

impl Theme {
    /// Every theme, in menu order.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Name used in the settings document and in asset file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}
