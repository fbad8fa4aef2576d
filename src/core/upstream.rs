use std::cmp::min;

use bio_types::strand::ReqStrand;

use crate::core::dna::complement;
use crate::core::gene::CandidateGene;

/// Target length of the regulatory window preceding a gene start.
pub const UPSTREAM_WINDOW: usize = 250;

/// The upstream window of a gene: the (at most) 250 bases immediately
/// preceding the gene start, read in the gene's own direction. Windows of
/// genes closer than 250 bases to the sequence start are clamped to
/// `location - 1`. Reverse-strand windows are assembled base by base from
/// the complement of the forward strand, case preserved.
///
/// Coordinates are trusted to come from the genome parser; an out-of-range
/// location is a programming error, not a recoverable condition.
pub fn extract_upstream(nucleotides: &[u8], gene: &CandidateGene) -> Vec<u8> {
    debug_assert!(gene.location >= 1 && gene.location <= nucleotides.len());
    let length = min(UPSTREAM_WINDOW, gene.location - 1);

    match gene.strand {
        ReqStrand::Forward => nucleotides[gene.location - 1 - length..gene.location - 1].to_vec(),
        ReqStrand::Reverse => {
            let start = nucleotides.len() - gene.location + length;
            (0..length).map(|i| complement(nucleotides[start - i])).collect()
        }
    }
}
