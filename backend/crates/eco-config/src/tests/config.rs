use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, ok, some};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _env = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq("http://192.168.137.1:3000"));
    assert_that!(config.session.factory_balance, eq(53_546_000));
    assert_that!(config.pricing.per_unit, eq(500));
    assert_that!(config.activity_log.capacity, eq(10));
    assert_that!(config.scan.delay_ms, eq(2000));
    assert_that!(config.api.timeout(), none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    let _env = setup_config_dir();

    let config = Config::load().unwrap();

    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested/.eco");

    // When
    let result = Config::load_from(&nested);

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [api]
            base_url = "https://eco.example.com"
            timeout_secs = 15

            [session]
            factory_balance = 500000

            [activity_log]
            capacity = 25
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("https://eco.example.com"));
    assert_that!(config.api.timeout(), some(eq(std::time::Duration::from_secs(15))));
    assert_that!(config.session.factory_balance, eq(500_000));
    assert_that!(config.session.end_user_balance, eq(50_000));
    assert_that!(config.activity_log.capacity, eq(25));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[scan]\ndelay_ms = 1500").unwrap();
    let _delay = EnvGuard::set("ECO_SCAN_DELAY_MS", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.scan.delay_ms, eq(0));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _env = setup_config_dir();
    let _url = EnvGuard::set("ECO_API_BASE_URL", "http://127.0.0.1:3000");
    let _per_kg = EnvGuard::set("ECO_PRICING_PER_KG", "2500");
    let _colored = EnvGuard::set("ECO_LOG_COLORED", "false");
    let _file = EnvGuard::set("ECO_LOG_FILE", "eco.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://127.0.0.1:3000"));
    assert_that!(config.pricing.per_kg, eq(2500));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), some(eq("eco.log")));
}

#[test]
#[serial]
fn given_unparseable_env_override_when_load_then_value_kept() {
    let _env = setup_config_dir();
    let _capacity = EnvGuard::set("ECO_ACTIVITY_LOG_CAPACITY", "many");

    let config = Config::load().unwrap();

    assert_that!(config.activity_log.capacity, eq(10));
}

#[test]
#[serial]
fn given_config_dir_when_resolving_paths_then_joined_to_dir() {
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("ECO_LOG_FILE", "logs/eco.log");

    let config = Config::load().unwrap();

    assert_eq!(config.storage_path(temp.path()), temp.path().join("storage"));
    assert_eq!(
        config.log_file_path(temp.path()),
        Some(temp.path().join("logs/eco.log"))
    );
}

// =========================================================================
// Error Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "this is not valid toml {{{{").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}
