use std::io;
use std::path::{Path, PathBuf};
use std::thread;

use super::{process, WorkItem};
use crate::core::consensus::ConsensusMap;
use crate::core::gene::ReferenceGene;
use crate::core::homology::HomologyFilter;
use crate::core::io::genbank;
use crate::core::motif::sigma70;

/// One native thread per genome file. Each thread parses its own file,
/// builds its own matcher and walks reference genes x candidate genes;
/// leaving the scope is the completion barrier. A file that fails to parse
/// is reported through `onskip` and costs nothing else — one bad record is
/// never fatal to the run.
pub fn run<F>(
    references: &[ReferenceGene],
    files: &[PathBuf],
    filter: &F,
    consensus: &ConsensusMap,
    onfile: impl Fn() + Sync,
    onskip: impl Fn(&Path, io::Error) + Sync,
) where
    F: HomologyFilter + Sync,
{
    let (onfile, onskip) = (&onfile, &onskip);
    thread::scope(|s| {
        for file in files {
            s.spawn(move || {
                let record = match genbank::parse(file) {
                    Ok(record) => record,
                    Err(error) => {
                        onskip(file, error);
                        return;
                    }
                };
                let mut matcher = sigma70::matcher(sigma70::MIN_CONFIDENCE);
                for reference in references {
                    for gene in &record.genes {
                        process(&WorkItem { reference, record: &record, gene }, filter, &mut matcher, consensus);
                    }
                }
                onfile();
            });
        }
    });
}
