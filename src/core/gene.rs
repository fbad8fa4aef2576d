use bio_types::strand::ReqStrand;

/// A gene from the reference list. Loaded once, read-only for the run; the
/// name doubles as the key of the matching consensus entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferenceGene {
    pub name: String,
    pub protein: Vec<u8>,
}

/// An annotated gene inside a genome record. The location is 1-based and
/// counted in the gene's own reading frame: from the 5' end of the forward
/// strand for forward genes, from the 5' end of the reverse complement for
/// reverse genes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateGene {
    pub location: usize,
    pub strand: ReqStrand,
    pub protein: Vec<u8>,
}

/// One parsed genome record: the nucleotide sequence (ACGT plus lowercase
/// variants) and its annotated candidate genes. Immutable after parse.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenomeRecord {
    pub name: String,
    pub nucleotides: Vec<u8>,
    pub genes: Vec<CandidateGene>,
}
