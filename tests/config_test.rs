// tests/config_test.rs

use phys_timetable::{
    ClientConfig, DEFAULT_BASE_URL, DelayConfig, PageAddress, TimetableClient, TimetableError,
};
use std::env;

#[test]
fn test_defaults() {
    let config = ClientConfig::default();

    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert!(config.user_agent.contains("Mobile"));
    assert!(config.delay.enabled);
    assert!(config.delay.min_delay_ms <= config.delay.max_delay_ms);
    assert!(config.validate().is_ok());
}

#[test]
fn test_page_address_path() {
    assert_eq!(PageAddress::new(4, 1, 3).path(), "/table/4/1/3.htm");
    assert_eq!(PageAddress::new(1, 2, 102).path(), "/table/1/2/102.htm");
}

#[test]
fn test_inverted_delay_is_rejected() {
    let config = ClientConfig {
        delay: DelayConfig {
            min_delay_ms: 2000,
            max_delay_ms: 1000,
            enabled: true,
        },
        ..Default::default()
    };

    assert!(matches!(config.validate(), Err(TimetableError::Config(_))));
    assert!(matches!(
        TimetableClient::with_config(config),
        Err(TimetableError::Config(_))
    ));
}

#[test]
fn test_bad_user_agent_is_rejected() {
    let config = ClientConfig {
        user_agent: "bad\nagent".to_string(),
        ..Default::default()
    };

    assert!(matches!(
        TimetableClient::with_config(config),
        Err(TimetableError::Config(_))
    ));
}

// Environment variables are process-wide, so every env scenario lives in
// this one test.
#[test]
fn test_from_env_overrides() {
    unsafe {
        env::set_var("TIMETABLE_BASE_URL", "http://localhost:8080/");
        env::set_var("TIMETABLE_DELAY_MIN_MS", "10");
        env::set_var("TIMETABLE_DELAY_MAX_MS", "20");
        env::set_var("TIMETABLE_DELAY_ENABLED", "false");
    }

    let config = ClientConfig::from_env().expect("valid environment");
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.delay.min_delay_ms, 10);
    assert_eq!(config.delay.max_delay_ms, 20);
    assert!(!config.delay.enabled);

    unsafe {
        env::set_var("TIMETABLE_DELAY_MIN_MS", "soon");
    }
    assert!(matches!(
        ClientConfig::from_env(),
        Err(TimetableError::Config(_))
    ));

    unsafe {
        env::set_var("TIMETABLE_DELAY_MIN_MS", "30");
    }
    assert!(matches!(
        ClientConfig::from_env(),
        Err(TimetableError::Config(_))
    ));

    unsafe {
        for name in [
            "TIMETABLE_BASE_URL",
            "TIMETABLE_DELAY_MIN_MS",
            "TIMETABLE_DELAY_MAX_MS",
            "TIMETABLE_DELAY_ENABLED",
        ] {
            env::remove_var(name);
        }
    }
}
