//! Integration tests for ConvertConfig
//!
//! Tests presets, validation, and serde support.

use crosswalk_engine::{ConvertConfig, Driver};
use crosswalk_foundation::ErrorKind;

#[test]
fn presets() {
    assert_eq!(ConvertConfig::unbounded(), ConvertConfig::default());
    let bounded = ConvertConfig::bounded();
    assert_eq!(bounded.max_depth, Some(ConvertConfig::DEFAULT_MAX_DEPTH));
    assert_eq!(bounded.max_values, Some(ConvertConfig::DEFAULT_MAX_VALUES));
    assert!(!bounded.strict);
}

#[test]
fn driver_keeps_config() {
    let config = ConvertConfig::bounded().with_strict(true);
    let driver = Driver::new(config.clone());
    assert_eq!(driver.config(), &config);
}

#[test]
fn validation_rejects_zero_values() {
    let err = Driver::try_new(ConvertConfig::default().with_max_values(Some(0))).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidConfig(_)));
}

// =============================================================================
// Serde
// =============================================================================

#[test]
fn deserialize_with_defaults() {
    let config: ConvertConfig = serde_json::from_str(r#"{"max_depth": 16}"#).unwrap();
    assert_eq!(config.max_depth, Some(16));
    assert_eq!(config.max_values, None);
    assert!(!config.strict);
}

#[test]
fn deserialize_full() {
    let config: ConvertConfig =
        serde_json::from_str(r#"{"max_depth": null, "max_values": 100, "strict": true}"#).unwrap();
    assert_eq!(
        config,
        ConvertConfig::default()
            .with_max_values(Some(100))
            .with_strict(true)
    );
}

#[test]
fn serialize_round_trip() {
    let config = ConvertConfig::bounded();
    let text = serde_json::to_string(&config).unwrap();
    let back: ConvertConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, config);
}
