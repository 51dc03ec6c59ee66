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

//! Hashchain - in-memory, append-only hash chain.
//!
//! This crate provides:
//! - A 256-bit digest type with lowercase hex rendering
//! - Immutable records whose hash binds payload and predecessor hash
//! - An append-only chain that always starts at a fixed genesis record
//! - A human-readable dump of the chain
//! - TOML configuration and structured logging helpers

/// Core primitives (types, chain, configuration).
pub mod core;
/// Observability (structured logging setup).
pub mod monitoring;

pub use crate::core::chain::{record_digest, Chain, Record, GENESIS_DATA};
pub use crate::core::types::H256;
