use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ArgMatches;
use indicatif::ProgressBar;

use crate::core::gene::{GenomeRecord, ReferenceGene};
use crate::core::io::{genbank, reference};

use super::args;
use super::strategy::Strategy;

const REFERENCE_IO_ERROR: &str = "Failed to read the reference gene list.";
const GENOMES_IO_ERROR: &str = "Failed to list GenBank files in the genomes directory.";

pub fn reference(pbar: ProgressBar, matches: &ArgMatches) -> Vec<ReferenceGene> {
    pbar.set_message("Parsing the reference gene list...");
    let path = matches.value_of(args::REFERENCE).unwrap();
    let references = reference::load(Path::new(path)).expect(REFERENCE_IO_ERROR);
    pbar.finish_with_message(format!("Reference genes: {} entries from {}", references.len(), path));
    references
}

pub fn genomes(pbar: ProgressBar, matches: &ArgMatches) -> Vec<PathBuf> {
    pbar.set_message("Listing GenBank files...");
    let dir = matches.value_of(args::GENOMES).unwrap();
    let files = genbank::discover(Path::new(dir)).expect(GENOMES_IO_ERROR);
    pbar.finish_with_message(format!("GenBank files: {} found under {}", files.len(), dir));
    files
}

pub fn strategy(pbar: ProgressBar, matches: &ArgMatches) -> Strategy {
    pbar.set_message("Parsing the scheduling strategy...");
    let strategy = Strategy::from_str(matches.value_of(args::STRATEGY).unwrap()).unwrap();
    pbar.finish_with_message(format!("Scheduling strategy: {}", strategy));
    strategy
}

pub fn threads(pbar: ProgressBar, matches: &ArgMatches) -> usize {
    pbar.set_message("Parsing the threads option...");
    let threads = matches.value_of(args::THREADS).unwrap().parse().unwrap();
    pbar.finish_with_message(format!("Worker threads: {}", threads));
    threads
}

pub fn saveto(pbar: ProgressBar, matches: &ArgMatches) -> Option<PathBuf> {
    pbar.set_message("Parsing the output option...");
    match matches.value_of(args::SAVETO) {
        Some(path) => {
            pbar.finish_with_message(format!("Report will be saved to {}", path));
            Some(PathBuf::from(path))
        }
        None => {
            pbar.finish_with_message("Report will be printed to stdout");
            None
        }
    }
}

// Unreadable or malformed files are reported and skipped, matching the
// per-file strategy which parses inside worker threads.
pub fn records(pbar: ProgressBar, files: &[PathBuf]) -> Vec<GenomeRecord> {
    pbar.set_message("Parsing GenBank records...");
    let mut records = Vec::with_capacity(files.len());
    for file in files {
        match genbank::parse(file) {
            Ok(record) => records.push(record),
            Err(e) => pbar.println(format!("Skipped {}: {}", file.display(), e)),
        }
        pbar.inc(1);
    }
    pbar.finish_with_message(format!("GenBank records: {} parsed from {} files", records.len(), files.len()));
    records
}
