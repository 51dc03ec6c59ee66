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

//! Human-readable chain dump. Output only; there is no parser.

use crate::core::chain::ledger::Chain;
use std::io::{self, Write};

/// Line printed after every record.
pub const SEPARATOR: &str = "------------------------- chain -------------------------";

/// Write every record followed by [`SEPARATOR`].
pub fn write_dump<W: Write>(chain: &Chain, mut out: W) -> io::Result<()> {
    for record in chain {
        writeln!(out, "{record}")?;
        writeln!(out, "{SEPARATOR}")?;
    }
    out.flush()
}

/// Render the dump into a string.
pub fn render_dump(chain: &Chain) -> String {
    let mut s = String::new();
    for record in chain {
        s.push_str(&record.to_string());
        s.push('\n');
        s.push_str(SEPARATOR);
        s.push('\n');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_and_string_agree() {
        let mut c = Chain::init();
        c.append("x");
        let mut buf = Vec::new();
        write_dump(&c, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_dump(&c));
    }

    #[test]
    fn separator_shape() {
        assert_eq!(SEPARATOR, format!("{} chain {}", "-".repeat(25), "-".repeat(25)));
    }
}
