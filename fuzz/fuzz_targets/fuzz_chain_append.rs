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

#![no_main]
#![forbid(unsafe_code)]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use hashchain::core::chain::dump::render_dump;
use hashchain::{record_digest, Chain};

#[derive(Clone, Debug, Arbitrary)]
struct Input {
    payloads: Vec<Vec<u8>>,
}

fuzz_target!(|inp: Input| {
    let mut chain = Chain::init();
    for p in inp.payloads {
        chain.append(p);
    }

    let r = chain.records();
    for i in 1..r.len() {
        assert_eq!(r[i].prev_hash(), Some(r[i - 1].hash()));
        assert_eq!(r[i].hash(), record_digest(r[i].data(), r[i].prev_hash_bytes()));
    }
    let _ = render_dump(&chain);
});
