use std::fs;

use pairkeeper::domain::{mints, AssetId};
use pairkeeper::error::{ConfigError, Error};
use pairkeeper::infrastructure::bootstrap::build_session;
use pairkeeper::infrastructure::config::settings::Config;
use pairkeeper::testkit::config::toml_with_cache;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn loads_complete_config_file() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("cache.json");
    let path = write_config(&dir, &toml_with_cache(&cache));

    let config = Config::load(&path).expect("config should load");

    assert_eq!(config.cache.key, "swap_pair_cache");
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.referral.base_url, "https://raydium.io");
    assert_eq!(
        config.assets.default_pair().unwrap().input,
        AssetId::native()
    );
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));

    match result {
        Err(Error::Config(ConfigError::ReadFile(_))) => {}
        other => panic!("expected ReadFile error, got {other:?}"),
    }
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.cache.key, "swap_pair_cache");
    assert_eq!(config.referral.native_alias, "sol");
    assert_eq!(config.assets.priority.len(), 5);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[assets\nnative = ");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::Parse(_))) => {}
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn invalid_priority_entry_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        &format!("[assets]\npriority = [\"{}\", \"0OIl\"]\n", mints::USDC),
    );

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "priority", ..
        })) => {}
        other => panic!("expected priority error, got {other:?}"),
    }
}

#[test]
fn short_default_quote_is_rejected() {
    let dir = TempDir::new().unwrap();
    // Valid base58 but decodes to fewer than 32 bytes.
    let path = write_config(&dir, "[assets]\ndefault_quote = \"abc\"\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "default_quote",
            ..
        })) => {}
        other => panic!("expected default_quote error, got {other:?}"),
    }
}

#[test]
fn blank_native_alias_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[referral]\nnative_alias = \"\"\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::MissingField {
            field: "native_alias",
        })) => {}
        other => panic!("expected native_alias error, got {other:?}"),
    }
}

#[test]
fn custom_priority_drives_session_ordering() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("cache.json");
    let content = format!(
        "{}\n[assets]\ndefault_quote = \"{usdc}\"\npriority = [\"{usdc}\", \"{native}\"]\n",
        toml_with_cache(&cache),
        usdc = mints::USDC,
        native = mints::NATIVE,
    );
    let path = write_config(&dir, &content);
    let config = Config::load(&path).unwrap();

    let mut session = build_session(&config).unwrap();
    session.initialize();

    // USDC outranks the native asset here, so the default pair flips.
    assert!(session.state().reversed);
    assert_eq!(session.roles().base, AssetId::new(mints::USDC));
    assert_eq!(session.roles().quote, AssetId::native());
}

#[test]
fn json_logging_format_is_accepted() {
    let config = Config::parse_toml("[logging]\nlevel = \"debug\"\nformat = \"json\"\n").unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}
