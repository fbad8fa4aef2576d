//! The work-item scheduler. A work item is one (reference gene, genome
//! record, candidate gene) triple; the per-item pipeline — homology gate,
//! upstream extraction, promoter prediction, consensus merge — is written
//! once here, and the submodules only vary the dispatch strategy. Every
//! strategy ends in a completion barrier, so the consensus map can be
//! finalized as soon as `run` returns.

mod matchers;
pub mod perfile;
pub mod pool;
pub mod sequential;
pub mod stream;

pub use matchers::MatcherCache;

use crate::core::consensus::ConsensusMap;
use crate::core::gene::{CandidateGene, GenomeRecord, ReferenceGene};
use crate::core::homology::HomologyFilter;
use crate::core::motif::SigmaMatcher;
use crate::core::upstream::extract_upstream;

pub struct WorkItem<'a> {
    pub reference: &'a ReferenceGene,
    pub record: &'a GenomeRecord,
    pub gene: &'a CandidateGene,
}

/// The full cross product of reference genes x records x candidate genes.
pub fn enumerate<'a>(references: &'a [ReferenceGene], records: &'a [GenomeRecord]) -> Vec<WorkItem<'a>> {
    let mut items = Vec::new();
    for reference in references {
        for record in records {
            for gene in &record.genes {
                items.push(WorkItem { reference, record, gene });
            }
        }
    }
    items
}

pub fn homologous<F: HomologyFilter>(item: &WorkItem, filter: &F) -> bool {
    filter.is_homologous(&item.gene.protein, &item.reference.protein)
}

/// The tail of the pipeline for items that passed the homology gate.
/// Merging is the only side effect; a window without a confident promoter
/// site leaves the consensus untouched.
pub fn predict_and_merge(item: &WorkItem, matcher: &mut SigmaMatcher, consensus: &ConsensusMap) {
    let window = extract_upstream(&item.record.nucleotides, item.gene);
    if let Some(prediction) = matcher.best_match(&window) {
        consensus.merge(&item.reference.name, &prediction);
    }
}

pub fn process<F: HomologyFilter>(
    item: &WorkItem,
    filter: &F,
    matcher: &mut SigmaMatcher,
    consensus: &ConsensusMap,
) {
    if homologous(item, filter) {
        predict_and_merge(item, matcher, consensus);
    }
}
