use rayon::ThreadPoolBuilder;

use super::{enumerate, process, MatcherCache};
use crate::core::consensus::ConsensusMap;
use crate::core::gene::{GenomeRecord, ReferenceGene};
use crate::core::homology::HomologyFilter;

pub(super) const POOL_ERROR: &str = "Failed to initialize the worker thread pool.";

/// A fixed-size pool consuming the full per-item enumeration, submitted up
/// front; leaving the pool scope is the completion barrier. Matchers are
/// cached per pool thread, so at most `threads` instances are ever built.
pub fn run<F>(
    references: &[ReferenceGene],
    records: &[GenomeRecord],
    filter: &F,
    consensus: &ConsensusMap,
    threads: usize,
    oniter: impl Fn() + Sync,
) where
    F: HomologyFilter + Sync,
{
    let pool = ThreadPoolBuilder::new().num_threads(threads).build().expect(POOL_ERROR);
    let matchers = MatcherCache::new();
    let items = enumerate(references, records);

    pool.scope(|s| {
        for item in &items {
            let (matchers, oniter) = (&matchers, &oniter);
            s.spawn(move |_| {
                process(item, filter, &mut matchers.get().borrow_mut(), consensus);
                oniter();
            });
        }
    });
}
