// Copyright (c) 2026 Amunchain
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! TOML configuration. Every field has a default, so an empty document is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::Level;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io")]
    Io,
    #[error("parse: {0}")]
    Parse(String),
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Configuration root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainConfig {
    /// Logging settings.
    pub log: LogConfig,
    /// Demo run settings.
    pub demo: DemoConfig,
}

/// Logging settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Max level: trace, debug, info, warn or error.
    pub level: String,
    /// JSON lines instead of compact text.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LogConfig {
    /// Parse `level` into a tracing level.
    pub fn max_level(&self) -> Result<Level, ConfigError> {
        self.level
            .trim()
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.level.clone()))
    }
}

/// Payloads appended after genesis by the demo binary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Appended in order.
    pub payloads: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            payloads: vec![
                "First Block after Genesis".to_string(),
                "Second Block after Genesis".to_string(),
                "Third Block after Genesis".to_string(),
            ],
        }
    }
}

impl ChainConfig {
    /// Parse from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.log.max_level()?;
        Ok(cfg)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(|_| ConfigError::Io)?;
        Self::from_toml_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = ChainConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, ChainConfig::default());
        assert_eq!(cfg.log.max_level().unwrap(), Level::INFO);
        assert_eq!(cfg.demo.payloads.len(), 3);
    }

    #[test]
    fn partial_override() {
        let cfg = ChainConfig::from_toml_str("[log]\nlevel = \"debug\"\njson = true\n").unwrap();
        assert!(cfg.log.json);
        assert_eq!(cfg.log.max_level().unwrap(), Level::DEBUG);
        assert_eq!(cfg.demo, DemoConfig::default());
    }

    #[test]
    fn bad_level_rejected() {
        let err = ChainConfig::from_toml_str("[log]\nlevel = \"loud\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(l) if l == "loud"));
    }

    #[test]
    fn unknown_key_rejected() {
        let err = ChainConfig::from_toml_str("[demo]\nblocks = []\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
