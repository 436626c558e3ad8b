use crate::settings::{PollInterval, Theme};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User preferences persisted between runs.
///
/// Keys missing from the document take their default. Keys this version
/// does not know are kept in `extra` and written back on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Icon theme.
    #[serde(default)]
    pub theme: Theme,

    /// Delay between recycle bin checks.
    #[serde(rename = "check_interval", default)]
    pub poll_interval: PollInterval,

    /// Unrecognised keys, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
