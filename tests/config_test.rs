use serial_test::serial;
use std::env;
use std::time::Duration;

use voyageur_api::config::{AppConfig, ProviderKind, DEFAULT_GEMINI_MODEL};
use voyageur_api::error::ConfigError;

const VARS: [&str; 11] = [
    "HOST",
    "PORT",
    "ITINERARY_PROVIDER",
    "GEMINI_API_KEY",
    "GEMINI_MODEL",
    "GEMINI_BASE_URL",
    "GEMINI_TIMEOUT_SECS",
    "MOCK_DELAY_MS",
    "MAX_TRIP_DAYS",
    "SESSION_CAPACITY",
    "SESSION_TTL_SECS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.provider, ProviderKind::Mock);
    assert_eq!(config.gemini.model, DEFAULT_GEMINI_MODEL);
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.gemini.timeout, Duration::from_secs(60));
    assert_eq!(config.mock_delay, Duration::ZERO);
    assert_eq!(config.max_trip_days, 30);
    assert_eq!(config.session_capacity, 1024);
    assert_eq!(config.session_ttl, Duration::from_secs(1800));
}

#[test]
#[serial]
fn test_reads_gemini_settings() {
    clear_env();
    env::set_var("ITINERARY_PROVIDER", "gemini");
    env::set_var("GEMINI_API_KEY", "test-key");
    env::set_var("GEMINI_MODEL", "gemini-pro");
    env::set_var("GEMINI_BASE_URL", "http://127.0.0.1:9999");
    env::set_var("GEMINI_TIMEOUT_SECS", "5");
    env::set_var("MOCK_DELAY_MS", "1500");
    env::set_var("MAX_TRIP_DAYS", "14");
    env::set_var("SESSION_CAPACITY", "64");
    env::set_var("SESSION_TTL_SECS", "120");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.provider, ProviderKind::Gemini);
    assert_eq!(config.gemini.api_key.as_deref(), Some("test-key"));
    assert_eq!(config.gemini.model, "gemini-pro");
    assert_eq!(config.gemini.base_url.as_str(), "http://127.0.0.1:9999/");
    assert_eq!(config.gemini.timeout, Duration::from_secs(5));
    assert_eq!(config.mock_delay, Duration::from_millis(1500));
    assert_eq!(config.max_trip_days, 14);
    assert_eq!(config.session_capacity, 64);
    assert_eq!(config.session_ttl, Duration::from_secs(120));

    clear_env();
}

#[test]
#[serial]
fn test_unparsable_values_fall_back() {
    clear_env();
    env::set_var("PORT", "eighty");
    env::set_var("MOCK_DELAY_MS", "-3");
    env::set_var("MAX_TRIP_DAYS", "0");
    env::set_var("SESSION_CAPACITY", "0");
    env::set_var("GEMINI_API_KEY", "   ");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.mock_delay, Duration::ZERO);
    assert_eq!(config.max_trip_days, 1);
    assert_eq!(config.session_capacity, 1);
    assert!(config.gemini.api_key.is_none());

    clear_env();
}

#[test]
#[serial]
fn test_unknown_provider_is_rejected() {
    clear_env();
    env::set_var("ITINERARY_PROVIDER", "openai");

    let result = AppConfig::from_env();
    assert!(matches!(result, Err(ConfigError::UnknownProvider(name)) if name == "openai"));

    clear_env();
}

#[test]
#[serial]
fn test_invalid_base_url_is_rejected() {
    clear_env();
    env::set_var("GEMINI_BASE_URL", "not a url");

    let result = AppConfig::from_env();
    assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));

    clear_env();
}
