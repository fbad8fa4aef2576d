use std::fs::File;
use std::io::{self, BufWriter};

use clap::ArgMatches;
use indicatif::ProgressBar;

use crate::core::consensus::{ConsensusMap, TOTAL_KEY};
use crate::core::homology::Blosum62Homology;
use crate::core::run::{enumerate, perfile, pool, sequential, stream};

use super::strategy::Strategy;
use super::{parse, resformat, style};

const OUTPUT_IO_ERROR: &str = "Failed to create the output report file.";

fn spinner() -> ProgressBar {
    ProgressBar::new_spinner().with_style(style::parse::with_progress())
}

pub fn run(matches: &ArgMatches) {
    // Fast parse options in the main thread
    let references = parse::reference(spinner(), matches);
    let files = parse::genomes(spinner(), matches);
    let strategy = parse::strategy(spinner(), matches);
    let threads = parse::threads(spinner(), matches);
    let saveto = parse::saveto(spinner(), matches);

    let consensus = ConsensusMap::new(references.iter().map(|x| x.name.clone()));
    let filter = Blosum62Homology;

    let pbar = ProgressBar::new(0).with_style(style::scan::running());
    match strategy {
        Strategy::PerFile => {
            pbar.set_length(files.len() as u64);
            pbar.set_message("Scanning genomes, one thread per file...");
            perfile::run(
                &references,
                &files,
                &filter,
                &consensus,
                || pbar.inc(1),
                |file, error| {
                    pbar.println(format!("Skipped {}: {}", file.display(), error));
                    pbar.inc(1);
                },
            );
        }
        _ => {
            let records =
                parse::records(ProgressBar::new(files.len() as u64).with_style(style::scan::running()), &files);
            pbar.set_length(enumerate(&references, &records).len() as u64);
            pbar.set_message("Scanning candidate genes...");
            match strategy {
                Strategy::Sequential => sequential::run(&references, &records, &filter, &consensus, || pbar.inc(1)),
                Strategy::Pool => pool::run(&references, &records, &filter, &consensus, threads, || pbar.inc(1)),
                Strategy::Stream => stream::run(&references, &records, &filter, &consensus, threads, || pbar.inc(1)),
                Strategy::PerFile => unreachable!(),
            }
        }
    }

    let entries = consensus.finalize();
    pbar.set_style(style::scan::finished());
    pbar.finish_with_message(format!("Finished with {} promoter matches", entries[TOTAL_KEY].count()));

    match saveto {
        Some(path) => {
            let file = BufWriter::new(File::create(&path).expect(OUTPUT_IO_ERROR));
            resformat::consensus(file, &entries);
        }
        None => resformat::consensus(io::stdout().lock(), &entries),
    }
}
