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

//! Structured logging setup.
//!
//! Logs go to stderr; stdout is reserved for the chain dump.

use crate::core::config::{ConfigError, LogConfig};
use thiserror::Error;

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("global subscriber already set")]
    AlreadyInit,
}

/// Install the global subscriber described by `cfg`.
pub fn init(cfg: &LogConfig) -> Result<(), LoggingError> {
    let level = cfg.max_level()?;
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .with_level(true);

    let res = if cfg.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    res.map_err(|_| LoggingError::AlreadyInit)
}
