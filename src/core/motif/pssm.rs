use crate::core::dna::Nucleotide;

/// Length of each promoter box (-35 and -10).
pub const BOX_LEN: usize = 6;

/// Position-specific scoring matrix over ACGT: log2 odds of per-position
/// base frequencies against a uniform background.
#[derive(Clone, Debug)]
pub struct Pssm {
    weights: [[f64; 4]; BOX_LEN],
    min: f64,
    max: f64,
}

impl Pssm {
    /// Builds the matrix from per-position base frequencies (A, C, G, T
    /// order, each row summing to one).
    pub fn from_frequencies(frequencies: &[[f64; 4]; BOX_LEN]) -> Self {
        let mut weights = [[0.0; 4]; BOX_LEN];
        for (position, row) in frequencies.iter().enumerate() {
            let total: f64 = row.iter().sum();
            debug_assert!((total - 1.0).abs() < 1e-6, "Frequencies at position {} sum to {}", position, total);
            for (index, frequency) in row.iter().enumerate() {
                // log2(f / 0.25) == log2(f) + 2
                weights[position][index] = frequency.log2() + 2.0;
            }
        }

        let min = weights.iter().map(|row| row.iter().cloned().fold(f64::INFINITY, f64::min)).sum();
        let max = weights.iter().map(|row| row.iter().cloned().fold(f64::NEG_INFINITY, f64::max)).sum();
        Self { weights, min, max }
    }

    /// Score of the BOX_LEN-long slice of `window` starting at `offset`.
    /// Unknown symbols score as the background (zero log odds).
    pub fn score_at(&self, window: &[u8], offset: usize) -> f64 {
        let mut score = 0.0;
        for (position, symbol) in window[offset..offset + BOX_LEN].iter().enumerate() {
            if let Some(index) = Nucleotide::from(*symbol).index() {
                score += self.weights[position][index];
            }
        }
        score
    }

    pub fn min_score(&self) -> f64 {
        self.min
    }

    pub fn max_score(&self) -> f64 {
        self.max
    }
}
