use crate::{PollInterval, Settings, SettingsStore, Theme};

use std::{fs, time::Duration};

use serde_json::{Value, json};

fn store_in(dir: &tempfile::TempDir) -> SettingsStore {
    SettingsStore::new(dir.path().join("config.json"))
}

/// WHAT: Absent settings file yields defaults
/// WHY: First launch must work without any setup
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_settings_file_when_loading_then_defaults_returned() {
    // Given: An empty directory
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    // When: Loading settings
    let settings = store.load();

    // Then: Defaults are light theme and a one second interval
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.theme, Theme::Light);
    assert_eq!(settings.poll_interval, PollInterval::from_secs(1.0));
}

/// WHAT: Missing theme key is filled from defaults
/// WHY: Partially written documents must not lose the keys they do have
#[test]
#[allow(clippy::unwrap_used)]
fn given_document_without_theme_when_loading_then_theme_defaulted_interval_kept() {
    // Given: A document with only the interval
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), r#"{ "check_interval": 5 }"#).unwrap();

    // When: Loading settings
    let settings = store.load();

    // Then: Theme is the default, interval is the stored value
    assert_eq!(settings.theme, Theme::Light);
    assert_eq!(settings.poll_interval, PollInterval::from_secs(5.0));
}

/// WHAT: Missing interval key is filled from defaults
/// WHY: Partially written documents must not lose the keys they do have
#[test]
#[allow(clippy::unwrap_used)]
fn given_document_without_interval_when_loading_then_interval_defaulted_theme_kept() {
    // Given: A document with only the theme
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), r#"{ "theme": "dark" }"#).unwrap();

    // When: Loading settings
    let settings = store.load();

    // Then: Theme is the stored value, interval is the default
    assert_eq!(settings.theme, Theme::Dark);
    assert_eq!(settings.poll_interval, PollInterval::default());
}

/// WHAT: Empty object yields defaults
/// WHY: Both keys missing is the degenerate partial document
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_object_when_loading_then_defaults_returned() {
    // Given: A document with no keys
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::write(store.path(), "{}").unwrap();

    // When: Loading settings
    let settings = store.load();

    // Then: Exactly the defaults
    assert_eq!(settings, Settings::default());
}

/// WHAT: Corrupt document yields exactly the defaults
/// WHY: A damaged file must never keep the tray from starting
#[test]
#[allow(clippy::unwrap_used)]
fn given_corrupt_document_when_loading_then_defaults_returned() {
    // Given: Truncated JSON and a non-JSON file
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    for contents in [r#"{ "theme": "da"#, "not json at all", "", "[1, 2, 3]"] {
        fs::write(store.path(), contents).unwrap();

        // When: Loading settings
        let settings = store.load();

        // Then: Exactly the defaults
        assert_eq!(settings, Settings::default(), "contents: {contents:?}");
    }
}

/// WHAT: Values of the wrong type make the whole document fall back
/// WHY: A mistyped value is unparsable, not partially usable
#[test]
#[allow(clippy::unwrap_used)]
fn given_wrongly_typed_values_when_loading_then_defaults_returned() {
    // Given: A string interval and an unknown theme
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::write(
        store.path(),
        r#"{ "theme": "dark", "check_interval": "fast" }"#,
    )
    .unwrap();
    let first = store.load();
    fs::write(store.path(), r#"{ "theme": "blue", "check_interval": 2 }"#).unwrap();
    let second = store.load();

    // Then: Both fall back to the defaults
    assert_eq!(first, Settings::default());
    assert_eq!(second, Settings::default());
}

/// WHAT: Save then load returns the saved settings
/// WHY: Every menu choice must survive a restart
#[test]
#[allow(clippy::unwrap_used)]
fn given_every_theme_and_preset_when_saved_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    for theme in Theme::ALL {
        for interval in PollInterval::PRESETS {
            // Given: Settings built from menu values
            let settings = Settings {
                theme,
                poll_interval: interval,
                ..Settings::default()
            };

            // When: Saving and reloading
            store.save(&settings).unwrap();
            let loaded = store.load();

            // Then: The loaded settings equal the saved ones
            assert_eq!(loaded, settings);
        }
    }
}

/// WHAT: Save creates a missing settings directory
/// WHY: The per-user directory does not exist on first launch
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_directory_when_saving_then_directory_created() {
    // Given: A store two levels below an empty temp dir
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path().join("MicroBin").join("config.json"));

    // When: Saving defaults
    let result = store.save(&Settings::default());

    // Then: The document exists and no temp file is left behind
    assert!(result.is_ok());
    assert!(store.path().is_file());
    assert!(!store.path().with_extension("json.tmp").exists());
}

/// WHAT: Whole intervals are written as integers, fractional as floats
/// WHY: The document should read `2`, not `2.0`, like a hand-written one
#[test]
#[allow(clippy::unwrap_used)]
fn given_whole_and_fractional_intervals_when_saving_then_number_shape_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    // Given/When: A whole interval is saved
    store
        .save(&Settings {
            theme: Theme::Dark,
            poll_interval: PollInterval::from_secs(2.0),
            ..Settings::default()
        })
        .unwrap();
    let whole = fs::read_to_string(store.path()).unwrap();

    // Given/When: A fractional interval is saved
    store
        .save(&Settings {
            poll_interval: PollInterval::from_secs(0.5),
            ..Settings::default()
        })
        .unwrap();
    let fractional = fs::read_to_string(store.path()).unwrap();

    // Then: Exact documents, four-space indented
    assert_eq!(
        whole,
        "{\n    \"theme\": \"dark\",\n    \"check_interval\": 2\n}"
    );
    assert_eq!(
        fractional,
        "{\n    \"theme\": \"light\",\n    \"check_interval\": 0.5\n}"
    );
}

/// WHAT: Unknown keys survive a load/save cycle
/// WHY: A newer or hand-edited document should not be silently trimmed
#[test]
#[allow(clippy::unwrap_used)]
fn given_unknown_keys_when_saving_loaded_settings_then_keys_preserved() {
    // Given: A document with an extra key
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::write(
        store.path(),
        r#"{ "theme": "light", "check_interval": 1, "autostart": true }"#,
    )
    .unwrap();

    // When: Loading, changing the theme and saving
    let mut settings = store.load();
    settings.theme = Theme::Dark;
    store.save(&settings).unwrap();

    // Then: The extra key is still there
    let written: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(
        written,
        json!({ "theme": "dark", "check_interval": 1, "autostart": true })
    );
}

/// WHAT: Default store lives in a MicroBin directory
/// WHY: Matches the per-user location earlier releases wrote to
#[test]
fn given_user_environment_when_locating_store_then_path_is_microbin_config() {
    // Given/When: Locating the default store
    let Ok(store) = SettingsStore::locate() else {
        // No home directory in this environment.
        return;
    };

    // Then: <config dir>/MicroBin/config.json
    assert!(store.path().ends_with("MicroBin/config.json"));
}

/// WHAT: Unusable intervals sleep the default duration
/// WHY: A hand-edited zero or negative interval must not spin or panic the timer
#[test]
fn given_unusable_interval_when_converting_to_duration_then_default_used() {
    for secs in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert_eq!(
            PollInterval::from_secs(secs).as_duration(),
            Duration::from_secs(1),
            "secs: {secs}"
        );
    }
    assert_eq!(
        PollInterval::from_secs(0.5).as_duration(),
        Duration::from_millis(500)
    );
}

/// WHAT: Preset labels read naturally
/// WHY: Labels are shown verbatim in the tray menu
#[test]
fn given_presets_when_labelling_then_singular_only_for_one_second() {
    let labels: Vec<String> = PollInterval::PRESETS.iter().map(|p| p.label()).collect();

    assert_eq!(
        labels,
        ["0.5 seconds", "1 second", "2 seconds", "5 seconds"]
    );
}
