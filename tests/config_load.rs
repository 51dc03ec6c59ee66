#![forbid(unsafe_code)]

use hashchain::core::config::{ChainConfig, ConfigError};
use std::fs;

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("hashchain.toml");
    fs::write(
        &path,
        "[log]\nlevel = \"warn\"\n\n[demo]\npayloads = [\"one\", \"two\"]\n",
    )
    .expect("write");

    let cfg = ChainConfig::load(&path).expect("load");
    assert_eq!(cfg.log.level, "warn");
    assert!(!cfg.log.json);
    assert_eq!(cfg.demo.payloads, vec!["one".to_string(), "two".to_string()]);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = ChainConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io));
}
