#![forbid(unsafe_code)]

//! Append-only hash chain: digest, records, the chain itself and its dump.

pub mod digest;
pub mod dump;
pub mod ledger;
pub mod record;

pub use digest::record_digest;
pub use ledger::Chain;
pub use record::{Record, GENESIS_DATA};
