use bio::alignment::pairwise::Aligner;
use bio::scores::blosum62::blosum62;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// Minimum local-alignment score for two proteins to count as homologs.
/// Consensus totals are sensitive to this constant; it is part of the
/// output contract, not a tunable.
pub const HOMOLOGY_THRESHOLD: f32 = 60.0;

const GAP_OPEN: i32 = -20;
const GAP_EXTEND: i32 = -1;

#[cfg_attr(test, automock)]
pub trait HomologyFilter {
    fn is_homologous(&self, candidate: &[u8], reference: &[u8]) -> bool;
}

/// Smith-Waterman-Gotoh over BLOSUM62 with affine gaps: open 10, extend
/// 0.5. The aligner is integer-scored, so the matrix and the gap penalties
/// are doubled and the final score halved; this represents the half-point
/// extension penalty exactly.
pub struct Blosum62Homology;

impl Blosum62Homology {
    pub fn score(&self, candidate: &[u8], reference: &[u8]) -> f32 {
        let mut aligner = Aligner::with_capacity(
            candidate.len(),
            reference.len(),
            GAP_OPEN,
            GAP_EXTEND,
            |a: u8, b: u8| 2 * blosum62(a, b),
        );
        aligner.local(candidate, reference).score as f32 / 2.0
    }
}

impl HomologyFilter for Blosum62Homology {
    fn is_homologous(&self, candidate: &[u8], reference: &[u8]) -> bool {
        self.score(candidate, reference) >= HOMOLOGY_THRESHOLD
    }
}
