//! The sigma-70 promoter definition: two hexamer boxes (-35 TTGACA and
//! -10 TATAAT) separated by a 15-21 base spacer, with per-position base
//! frequencies close to the classical E. coli compilations.

use super::pssm::{Pssm, BOX_LEN};
use super::{SigmaMatcher, SPACER_SPAN};

/// Minimum confidence for a reported promoter match.
pub const MIN_CONFIDENCE: f64 = 0.7;

/// Per-position base frequencies (A, C, G, T) of the -35 box.
const MINUS35: [[f64; 4]; BOX_LEN] = [
    [0.10, 0.10, 0.11, 0.69],
    [0.07, 0.07, 0.07, 0.79],
    [0.13, 0.13, 0.61, 0.13],
    [0.56, 0.15, 0.14, 0.15],
    [0.15, 0.54, 0.15, 0.16],
    [0.54, 0.15, 0.16, 0.15],
];

/// Per-position base frequencies (A, C, G, T) of the -10 box.
const MINUS10: [[f64; 4]; BOX_LEN] = [
    [0.08, 0.08, 0.07, 0.77],
    [0.76, 0.08, 0.08, 0.08],
    [0.14, 0.13, 0.13, 0.60],
    [0.61, 0.13, 0.13, 0.13],
    [0.56, 0.15, 0.14, 0.15],
    [0.06, 0.06, 0.06, 0.82],
];

/// Log2-odds weight of each spacer length from 15 to 21; 17 is optimal.
const SPACER_WEIGHTS: [f64; SPACER_SPAN] = [-2.0, -0.7, 0.0, -0.4, -1.1, -1.9, -2.6];

/// An unanchored sigma-70 matcher with the given confidence cutoff.
pub fn matcher(min_confidence: f64) -> SigmaMatcher {
    SigmaMatcher::new(
        Pssm::from_frequencies(&MINUS35),
        Pssm::from_frequencies(&MINUS10),
        SPACER_WEIGHTS,
        min_confidence,
    )
}
