use super::{process, WorkItem};
use crate::core::consensus::ConsensusMap;
use crate::core::gene::{GenomeRecord, ReferenceGene};
use crate::core::homology::HomologyFilter;
use crate::core::motif::sigma70;

/// Single-threaded baseline: nested iteration over pre-parsed records with
/// one matcher instance for the whole run. The iteration order is visible
/// only in progress output, never in the final aggregate.
pub fn run<F: HomologyFilter>(
    references: &[ReferenceGene],
    records: &[GenomeRecord],
    filter: &F,
    consensus: &ConsensusMap,
    oniter: impl Fn(),
) {
    let mut matcher = sigma70::matcher(sigma70::MIN_CONFIDENCE);
    for record in records {
        for reference in references {
            for gene in &record.genes {
                process(&WorkItem { reference, record, gene }, filter, &mut matcher, consensus);
                oniter();
            }
        }
    }
}
