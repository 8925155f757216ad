use crate::config::{parse_cors_origin, Config, ConfigError, CorsOrigin};
use axum::http::HeaderValue;
use rstest::rstest;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const VARS: [&str; 5] = [
    "PORT",
    "HOST",
    "CORS_ORIGIN",
    "SPRIINT_DATABASE_PATH",
    "SPRIINT_DB_MAX_CONNECTIONS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_config_from_env_defaults() {
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.port, 4001);
    assert_eq!(config.host.to_string(), "127.0.0.1");
    assert_eq!(config.cors_origin, CorsOrigin::Any);
    assert_eq!(config.max_connections, 5);
    assert!(config.database_path.ends_with(".spriint/spriint.db"));
}

#[test]
#[serial]
fn test_config_from_env_with_all_custom() {
    clear_env();
    env::set_var("PORT", "3000");
    env::set_var("HOST", "0.0.0.0");
    env::set_var("CORS_ORIGIN", "https://app.example.com");
    env::set_var("SPRIINT_DATABASE_PATH", "/tmp/spriint-test.db");
    env::set_var("SPRIINT_DB_MAX_CONNECTIONS", "12");

    let config = Config::from_env().unwrap();

    assert_eq!(config.port, 3000);
    assert_eq!(config.host.to_string(), "0.0.0.0");
    assert_eq!(
        config.cors_origin,
        CorsOrigin::Exact(HeaderValue::from_static("https://app.example.com"))
    );
    assert_eq!(config.database_path, PathBuf::from("/tmp/spriint-test.db"));
    assert_eq!(config.max_connections, 12);

    let storage = config.storage_config();
    assert_eq!(storage.path, PathBuf::from("/tmp/spriint-test.db"));
    assert_eq!(storage.max_connections, 12);

    clear_env();
}

#[test]
#[serial]
fn test_config_invalid_port() {
    clear_env();
    env::set_var("PORT", "not-a-number");

    let result = Config::from_env();

    assert!(matches!(result.unwrap_err(), ConfigError::InvalidPort(_)));

    clear_env();
}

#[test]
#[serial]
fn test_config_port_zero() {
    clear_env();
    env::set_var("PORT", "0");

    let result = Config::from_env();

    assert!(matches!(result.unwrap_err(), ConfigError::PortOutOfRange(0)));

    clear_env();
}

#[test]
#[serial]
fn test_config_unparseable_ports() {
    for port in ["65536", "-1", ""] {
        clear_env();
        env::set_var("PORT", port);

        assert!(matches!(
            Config::from_env().unwrap_err(),
            ConfigError::InvalidPort(_)
        ));
    }

    clear_env();
}

#[test]
#[serial]
fn test_config_invalid_host() {
    clear_env();
    env::set_var("HOST", "not a host");

    assert!(matches!(
        Config::from_env().unwrap_err(),
        ConfigError::InvalidHost(_)
    ));

    clear_env();
}

#[test]
#[serial]
fn test_config_invalid_max_connections() {
    for value in ["0", "many"] {
        clear_env();
        env::set_var("SPRIINT_DB_MAX_CONNECTIONS", value);

        assert!(matches!(
            Config::from_env().unwrap_err(),
            ConfigError::InvalidMaxConnections(_)
        ));
    }

    clear_env();
}

#[rstest]
#[case("*")]
#[case(" * ")]
fn test_cors_origin_wildcard(#[case] value: &str) {
    assert_eq!(parse_cors_origin(value).unwrap(), CorsOrigin::Any);
}

#[test]
fn test_cors_origin_exact_and_invalid() {
    assert_eq!(
        parse_cors_origin("http://localhost:5173").unwrap(),
        CorsOrigin::Exact(HeaderValue::from_static("http://localhost:5173"))
    );
    assert!(matches!(
        parse_cors_origin("bad\norigin").unwrap_err(),
        ConfigError::InvalidCorsOrigin(_)
    ));
}
