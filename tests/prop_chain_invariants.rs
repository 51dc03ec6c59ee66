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

use hashchain::{record_digest, Chain, Record, H256};
use proptest::prelude::*;

fn arb_hash() -> impl Strategy<Value = H256> {
    any::<[u8; 32]>().prop_map(H256::from_bytes)
}

proptest! {
    #[test]
    fn prop_record_hash_is_digest_of_data_then_prev(
        data in prop::collection::vec(any::<u8>(), 0..256),
        prev in arb_hash(),
    ) {
        let r = Record::create(data.clone(), prev);
        let mut joined = data.clone();
        joined.extend_from_slice(prev.as_bytes());
        prop_assert_eq!(r.hash(), record_digest(&joined, &[]));
        prop_assert_eq!(r.hash(), record_digest(&data, prev.as_bytes()));
    }

    #[test]
    fn prop_distinct_prev_distinct_hash(
        data in prop::collection::vec(any::<u8>(), 0..64),
        p1 in arb_hash(),
        p2 in arb_hash(),
    ) {
        prop_assume!(p1 != p2);
        prop_assert_ne!(Record::create(data.clone(), p1).hash(), Record::create(data, p2).hash());
    }

    #[test]
    fn prop_appends_keep_linkage(
        payloads in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..32), 0..40),
    ) {
        let mut chain = Chain::init();
        for p in payloads.iter() {
            chain.append(p.clone());
        }

        prop_assert_eq!(chain.len(), 1 + payloads.len());
        let genesis = Record::genesis();
        prop_assert_eq!(&chain.records()[0], &genesis);
        for i in 1..chain.len() {
            let r = chain.records();
            prop_assert_eq!(r[i].prev_hash(), Some(r[i - 1].hash()));
            prop_assert_eq!(r[i].data(), payloads[i - 1].as_slice());
        }
    }

    #[test]
    fn prop_append_leaves_existing_records_untouched(
        first in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..16), 1..10),
        more in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..16), 1..10),
    ) {
        let mut chain = Chain::init();
        for p in first { chain.append(p); }
        let before: Vec<Record> = chain.records().to_vec();

        for p in more { chain.append(p); }

        prop_assert_eq!(&chain.records()[..before.len()], before.as_slice());
    }
}
