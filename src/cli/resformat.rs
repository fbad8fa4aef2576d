use std::collections::HashMap;
use std::io::Write;

use itertools::Itertools;

use crate::core::consensus::Sigma70Consensus;

const IO_ERROR: &str = "Failed to write the consensus report.";

pub fn consensus(mut saveto: impl Write, entries: &HashMap<String, Sigma70Consensus>) {
    for key in entries.keys().sorted() {
        writeln!(saveto, "{}{}", key, entries[key]).expect(IO_ERROR);
    }
}
