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

//! Immutable chain record.

use crate::core::chain::digest::record_digest;
use crate::core::types::H256;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Payload of the genesis record.
pub const GENESIS_DATA: &[u8] = b"Genesis";

/// One link of the chain.
///
/// Fields are private: the hash is derived once in the constructor and the
/// record is never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    hash: H256,
    data: Vec<u8>,
    /// `None` only for genesis (empty predecessor).
    prev_hash: Option<H256>,
}

impl Record {
    /// Build a record linked to `prev_hash`.
    pub fn create(data: impl Into<Vec<u8>>, prev_hash: H256) -> Self {
        Self::derive(data.into(), Some(prev_hash))
    }

    /// The genesis record: fixed payload, empty predecessor.
    pub fn genesis() -> Self {
        Self::derive(GENESIS_DATA.to_vec(), None)
    }

    fn derive(data: Vec<u8>, prev_hash: Option<H256>) -> Self {
        let prev: &[u8] = match &prev_hash {
            Some(h) => h.as_bytes(),
            None => &[],
        };
        let hash = record_digest(&data, prev);
        Self {
            hash,
            data,
            prev_hash,
        }
    }

    /// Record hash.
    pub fn hash(&self) -> H256 {
        self.hash
    }

    /// Payload bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Payload as text (invalid UTF-8 replaced).
    pub fn data_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    /// Predecessor hash; `None` for genesis.
    pub fn prev_hash(&self) -> Option<H256> {
        self.prev_hash
    }

    /// Predecessor hash as raw bytes, empty for genesis.
    pub fn prev_hash_bytes(&self) -> &[u8] {
        match &self.prev_hash {
            Some(h) => h.as_bytes(),
            None => &[],
        }
    }

    /// True when this record has the empty predecessor sentinel.
    pub fn is_genesis(&self) -> bool {
        self.prev_hash.is_none()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Previous Hash: {}", hex::encode(self.prev_hash_bytes()))?;
        writeln!(f, "Data in Block: {}", self.data_lossy())?;
        write!(f, "Hash: {}", self.hash)
    }
}
