use crate::settings::DEFAULT_INTERVAL_SECS;

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Delay between two recycle bin checks, in seconds.
///
/// Whole values are written as JSON integers (`2`) and fractional ones as
/// floats (`0.5`), so a document written by hand keeps its shape after a save.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollInterval(f64);

impl PollInterval {
    /// Intervals offered in the tray menu.
    pub const PRESETS: [PollInterval; 4] = [
        PollInterval(0.5),
        PollInterval(1.0),
        PollInterval(2.0),
        PollInterval(5.0),
    ];

    /// Wrap a number of seconds. No range check is applied.
    pub const fn from_secs(secs: f64) -> Self {
        Self(secs)
    }

    /// Raw number of seconds as stored.
    pub fn as_secs(self) -> f64 {
        self.0
    }

    /// Sleep duration for the poller.
    ///
    /// Values a timer cannot represent (zero, negative, NaN, overflow) fall
    /// back to the default interval.
    pub fn as_duration(self) -> Duration {
        match Duration::try_from_secs_f64(self.0) {
            Ok(d) if !d.is_zero() => d,
            _ => Duration::from_secs_f64(DEFAULT_INTERVAL_SECS),
        }
    }

    /// Whether two intervals name the same menu entry.
    pub fn same_as(self, other: PollInterval) -> bool {
        (self.0 - other.0).abs() < 1e-9
    }

    /// Menu label, e.g. `"0.5 seconds"` or `"1 second"`.
    pub fn label(self) -> String {
        if self.same_as(PollInterval(1.0)) {
            "1 second".to_string()
        } else {
            format!("{} seconds", self.0)
        }
    }

    fn is_whole(self) -> bool {
        self.0.is_finite() && self.0.fract() == 0.0 && self.0.abs() < 9.0e15
    }
}

impl Default for PollInterval {
    fn default() -> Self {
        Self(DEFAULT_INTERVAL_SECS)
    }
}

impl Serialize for PollInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for PollInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(PollInterval)
    }
}
