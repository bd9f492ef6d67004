//! Config tests.

use crate::config::BotConfig;
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "BOT_TOKEN",
    "LOG_FILE",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "EXCHANGE_RATE_API_URL",
    "EXCHANGE_RATE_API_KEY",
    "EXCHANGE_RATE_TIMEOUT_SECS",
    "RATE_CACHE_TTL_SECS",
    "DEFAULT_BASE_CURRENCY",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram_api_url().is_none());
    assert_eq!(config.log_file(), "logs/fxbot.log");
    assert_eq!(config.default_base_currency().as_str(), "USD");
    let rates = config.extensions().rate_source_config();
    assert_eq!(rates.api_url(), "https://v6.exchangerate-api.com/v6");
    assert_eq!(rates.api_key(), "demo-key");
    assert_eq!(rates.cache_window().as_secs(), 300);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "custom_token");
    env::set_var("LOG_FILE", "/tmp/fx.log");
    env::set_var("EXCHANGE_RATE_API_KEY", "secret");
    env::set_var("RATE_CACHE_TTL_SECS", "60");
    env::set_var("DEFAULT_BASE_CURRENCY", "gbp");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "custom_token");
    assert_eq!(config.log_file(), "/tmp/fx.log");
    assert_eq!(config.default_base_currency().as_str(), "GBP");
    let rates = config.extensions().rate_source_config();
    assert_eq!(rates.api_key(), "secret");
    assert_eq!(rates.cache_window().as_secs(), 60);

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_override_token() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();

    assert_eq!(config.bot_token(), "override_token");
}

#[test]
#[serial]
fn test_load_config_requires_token() {
    clear_env();
    assert!(BotConfig::load(None).is_err());
}

#[test]
#[serial]
fn test_invalid_default_base_currency() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("DEFAULT_BASE_CURRENCY", "dollars");

    assert!(BotConfig::load(None).is_err());

    clear_env();
}

#[test]
#[serial]
fn test_validate_telegram_api_url_invalid() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}
