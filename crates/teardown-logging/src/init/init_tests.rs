#![allow(non_snake_case)]

use super::*;

// The global subscriber can be set once per process, so the whole
// sequence lives in one test.
#[test]
fn init_logging___installs_once_then_reloads() {
    let installed = init_logging(LogLevel::Warn);

    assert!(installed);
    assert!(ReloadHandle::global().is_initialized());
    assert_eq!(ReloadHandle::global().current_level(), Some(LevelFilter::WARN));

    let installed_again = init_logging(LogLevel::Debug);

    assert!(!installed_again);
    assert_eq!(ReloadHandle::global().current_level(), Some(LevelFilter::DEBUG));

    ReloadHandle::global().reload_level(LogLevel::Off).unwrap();
    assert_eq!(ReloadHandle::global().current_level(), Some(LevelFilter::OFF));

    assert!(!init_logging_from_env());
    tracing::info!("suppressed by the off filter");
}
