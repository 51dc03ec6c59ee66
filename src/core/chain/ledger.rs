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

//! Append-only chain of records.
//!
//! records[0] is genesis; for i > 0, records[i].prev_hash == records[i-1].hash.

use crate::core::chain::record::Record;
use crate::core::types::H256;
use tracing::{debug, info};

/// In-memory hash chain.
///
/// Never empty: the only constructor seeds it with genesis, and records are
/// only ever pushed. `append` reads the tail and then pushes, so callers that
/// share a chain between threads must hold a lock around it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    records: Vec<Record>,
}

impl Chain {
    /// New chain holding only the genesis record.
    pub fn init() -> Self {
        let genesis = Record::genesis();
        info!(hash = %genesis.hash(), "chain initialized");
        Self {
            records: vec![genesis],
        }
    }

    /// Append `data` after the current tail and return the new tail.
    pub fn append(&mut self, data: impl Into<Vec<u8>>) -> &Record {
        let prev = self.tail().hash();
        let record = Record::create(data, prev);
        debug!(
            index = self.records.len(),
            hash = %record.hash(),
            prev = %prev,
            len = record.data().len(),
            "record appended"
        );
        self.records.push(record);
        self.tail()
    }

    /// Last record. Panics only if the non-empty invariant was broken.
    pub fn tail(&self) -> &Record {
        &self.records[self.records.len() - 1]
    }

    /// Hash of the last record.
    pub fn tip_hash(&self) -> H256 {
        self.tail().hash()
    }

    /// First record.
    pub fn genesis(&self) -> &Record {
        &self.records[0]
    }

    /// Number of records, genesis included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a chain built through [`Chain::init`].
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// All records in chain order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate records in chain order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::init()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
