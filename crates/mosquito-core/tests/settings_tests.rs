// Settings validation and persistence through the in-memory backend.

use mosquito_core::*;

fn s(min: u32, max: u32, wave: WaveType) -> AudioSettings {
    AudioSettings {
        min_frequency: min,
        max_frequency: max,
        wave_type: wave,
    }
}

#[test]
fn defaults_match_reference_record() {
    assert_eq!(AudioSettings::default(), s(200, 1000, WaveType::Sine));
    assert!(AudioSettings::default().validate().is_ok());
}

#[test]
fn validation_rules() {
    assert!(s(50, 2000, WaveType::Sine).validate().is_ok());
    assert!(s(1999, 2000, WaveType::Square).validate().is_ok());
    assert!(matches!(
        s(1000, 1000, WaveType::Sine).validate(),
        Err(SettingsError::InvertedRange { .. })
    ));
    assert!(matches!(
        s(49, 1000, WaveType::Sine).validate(),
        Err(SettingsError::OutOfRange { .. })
    ));
    assert!(matches!(
        s(200, 2001, WaveType::Sine).validate(),
        Err(SettingsError::OutOfRange { .. })
    ));
}

#[test]
fn error_messages_are_user_facing() {
    let e = s(500, 400, WaveType::Sine).validate().unwrap_err();
    assert_eq!(e.title(), "Invalid Settings");
    assert_eq!(
        e.to_string(),
        "Minimum frequency must be less than maximum frequency"
    );
    let e = s(10, 400, WaveType::Sine).validate().unwrap_err();
    assert_eq!(e.title(), "Invalid Range");
    assert_eq!(e.to_string(), "Frequencies must be between 50Hz and 2000Hz");
}

#[test]
fn missing_record_loads_defaults() {
    let store = SettingsStore::new(MemoryBackend::new());
    assert_eq!(store.load(), None);
    assert_eq!(store.load_or_default(), AudioSettings::default());
}

#[test]
fn stored_record_uses_camel_case_json() {
    let mut store = SettingsStore::new(MemoryBackend::new());
    store.save(&s(300, 1500, WaveType::Sawtooth)).unwrap();

    let raw = store.backend().read(SETTINGS_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["minFrequency"], 300);
    assert_eq!(value["maxFrequency"], 1500);
    assert_eq!(value["waveType"], "sawtooth");
    assert_eq!(store.load(), Some(s(300, 1500, WaveType::Sawtooth)));
}

#[test]
fn record_written_by_browser_is_readable() {
    let raw = r#"{"minFrequency":120,"maxFrequency":880,"waveType":"triangle"}"#;
    let store = SettingsStore::new(MemoryBackend::with_entry(SETTINGS_KEY, raw));
    assert_eq!(store.load(), Some(s(120, 880, WaveType::Triangle)));
}

#[test]
fn malformed_record_falls_back_to_defaults() {
    for raw in [
        "not json",
        r#"{"minFrequency":200}"#,
        r#"{"minFrequency":200,"maxFrequency":1000,"waveType":"noise"}"#,
        r#"{"minFrequency":-5,"maxFrequency":1000,"waveType":"sine"}"#,
    ] {
        let store = SettingsStore::new(MemoryBackend::with_entry(SETTINGS_KEY, raw));
        assert_eq!(store.load_or_default(), AudioSettings::default(), "{raw}");
    }
}

#[test]
fn out_of_range_record_falls_back_to_defaults() {
    let raw = r#"{"minFrequency":900,"maxFrequency":100,"waveType":"sine"}"#;
    let store = SettingsStore::new(MemoryBackend::with_entry(SETTINGS_KEY, raw));
    assert_eq!(store.load(), None);
}

#[test]
fn invalid_settings_are_not_saved() {
    let mut store = SettingsStore::new(MemoryBackend::new());
    let err = store.save(&s(10, 100, WaveType::Sine)).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Invalid(SettingsError::OutOfRange { .. })
    ));
    assert_eq!(store.backend().read(SETTINGS_KEY), None);
}

#[test]
fn reset_returns_defaults_without_writing() {
    let mut store = SettingsStore::new(MemoryBackend::new());
    store.save(&s(300, 1500, WaveType::Square)).unwrap();

    assert_eq!(store.reset(), AudioSettings::default());
    assert_eq!(store.load(), Some(s(300, 1500, WaveType::Square)));
}
