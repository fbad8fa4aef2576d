use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::core::gene::ReferenceGene;

use super::sanitize_protein;

/// Loads the reference gene list: alternating lines with a gene name
/// followed by its protein sequence; end of input terminates the list.
/// A trailing name without a sequence line is dropped.
pub fn load(file: &Path) -> io::Result<Vec<ReferenceGene>> {
    let reader = BufReader::new(File::open(file)?);
    let mut lines = reader.lines();

    let mut genes = Vec::new();
    while let Some(name) = lines.next() {
        let name = name?;
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let sequence = match lines.next() {
            Some(sequence) => sequence?,
            None => break,
        };
        genes.push(ReferenceGene { name: name.to_string(), protein: sanitize_protein(&sequence) });
    }
    Ok(genes)
}
