#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Hashchain demo entrypoint.
//! Builds a chain, appends the configured payloads and prints every record.

use std::io;

use anyhow::Result;
use hashchain::core::chain::dump::write_dump;
use hashchain::core::config::ChainConfig;
use hashchain::monitoring::logging;
use hashchain::Chain;
use tracing::{info, warn};

fn main() -> Result<()> {
    let cfg = ChainConfig::default();
    if let Err(e) = logging::init(&cfg.log) {
        eprintln!("logging init failed: {e}");
    }

    let mut chain = Chain::init();
    for payload in cfg.demo.payloads.iter() {
        chain.append(payload.as_str());
    }
    info!(records = chain.len(), tip = %chain.tip_hash(), "chain built");

    let stdout = io::stdout();
    if let Err(e) = write_dump(&chain, stdout.lock()) {
        warn!(?e, "dump write failed");
        return Err(e.into());
    }
    Ok(())
}
