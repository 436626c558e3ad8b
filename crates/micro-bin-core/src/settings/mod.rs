mod poll_interval;
#[allow(clippy::module_inception)]
mod settings;
mod store;
mod theme;

pub use {
    poll_interval::PollInterval, settings::Settings, store::SettingsStore, theme::Theme,
};

pub(crate) const APP_DIR_NAME: &str = "MicroBin";
pub(crate) const SETTINGS_FILE_NAME: &str = "config.json";
pub(crate) const DEFAULT_INTERVAL_SECS: f64 = 1.0;
