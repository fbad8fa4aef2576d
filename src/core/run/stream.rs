use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use super::pool::POOL_ERROR;
use super::{enumerate, homologous, predict_and_merge, MatcherCache};
use crate::core::consensus::ConsensusMap;
use crate::core::gene::{GenomeRecord, ReferenceGene};
use crate::core::homology::HomologyFilter;

/// Data-parallel fan-out: the same per-item enumeration filtered and
/// processed by a parallel iterator with bounded parallelism. Side-effect
/// order across items is unspecified; the operator's synchronous return is
/// the completion barrier.
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

    pool.install(|| {
        items
            .par_iter()
            .inspect(|_| oniter())
            .filter(|item| homologous(item, filter))
            .for_each(|item| predict_and_merge(item, &mut matchers.get().borrow_mut(), consensus));
    });
}
