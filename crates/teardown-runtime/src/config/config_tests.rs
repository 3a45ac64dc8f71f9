#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn RunnerConfig___default___has_expected_values() {
    let config = RunnerConfig::default();

    assert_eq!(config.name, "runner");
    assert!(config.handle_os_signals);
}

#[test]
fn RunnerConfig___from_json_empty___returns_default() {
    let config = RunnerConfig::from_json(b"").unwrap();

    assert_eq!(config, RunnerConfig::default());
}

#[test]
fn RunnerConfig___from_json_partial___fills_defaults() {
    let config = RunnerConfig::from_json(br#"{"name": "api"}"#).unwrap();

    assert_eq!(config.name, "api");
    assert!(config.handle_os_signals);
}

#[test_case(b"not json" ; "garbage")]
#[test_case(br#"{"handle_os_signals": "yes"}"# ; "wrong type")]
fn RunnerConfig___from_json_invalid___returns_error(input: &[u8]) {
    let result = RunnerConfig::from_json(input);

    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn RunnerConfig___builders___override_fields() {
    let config = RunnerConfig::new().with_name("workers").with_os_signals(false);

    assert_eq!(config.name, "workers");
    assert!(!config.handle_os_signals);
}

#[test]
fn RunnerConfig___serde_roundtrip___preserves_fields() {
    let config = RunnerConfig::new().with_name("jobs").with_os_signals(false);

    let json = serde_json::to_vec(&config).unwrap();
    let parsed = RunnerConfig::from_json(&json).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn ServerTaskConfig___default___has_short_grace() {
    let config = ServerTaskConfig::default();

    assert_eq!(config.name, "server");
    assert_eq!(config.start_grace(), Duration::from_millis(20));
}

#[test]
fn ServerTaskConfig___from_json___reads_grace() {
    let config = ServerTaskConfig::from_json(br#"{"start_grace_ms": 250}"#).unwrap();

    assert_eq!(config.start_grace(), Duration::from_millis(250));
    assert_eq!(config.name, "server");
}

#[test]
fn ServerTaskConfig___with_start_grace___stores_millis() {
    let config = ServerTaskConfig::new()
        .with_name("http")
        .with_start_grace(Duration::from_secs(2));

    assert_eq!(config.start_grace_ms, 2000);
    assert_eq!(config.name, "http");
}
