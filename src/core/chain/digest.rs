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

//! Record digest.
//!
//! hash = SHA256( data || prev_hash )
//!
//! Plain concatenation: no domain tag, no delimiter, no length prefix.
//! Genesis contributes zero bytes for `prev_hash`.

use crate::core::types::{H256, HASH_LEN};
use ring::digest;

/// Compute the digest of `data` followed by `prev_hash`.
pub fn record_digest(data: &[u8], prev_hash: &[u8]) -> H256 {
    let mut ctx = digest::Context::new(&digest::SHA256);
    ctx.update(data);
    ctx.update(prev_hash);
    let d = ctx.finish();
    let mut out = [0u8; HASH_LEN];
    out.copy_from_slice(d.as_ref());
    H256::from_bytes(out)
}
