pub mod pssm;
pub mod sigma70;

pub use pssm::{Pssm, BOX_LEN};

use crate::core::dna::Nucleotide;

/// Bounds of the spacer between the -35 and -10 boxes.
pub const SPACER_MIN: usize = 15;
pub const SPACER_MAX: usize = 21;
pub const SPACER_SPAN: usize = SPACER_MAX - SPACER_MIN + 1;

/// The best promoter site found in one upstream window. Transient: either
/// folded into the consensus right away or dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct PromoterMatch {
    pub minus35: [Nucleotide; BOX_LEN],
    pub minus10: [Nucleotide; BOX_LEN],
    pub spacer: usize,
    pub confidence: f64,
}

/// Unanchored two-box matcher. Holds reusable per-offset score buffers, so
/// an instance is NOT safe for unsynchronized concurrent use: every worker
/// thread must own (or lock) its own matcher.
pub struct SigmaMatcher {
    minus35: Pssm,
    minus10: Pssm,
    spacer: [f64; SPACER_SPAN],
    min_confidence: f64,
    floor: f64,
    ceiling: f64,
    // scratch, reused between windows
    scores35: Vec<f64>,
    scores10: Vec<f64>,
}

impl SigmaMatcher {
    pub fn new(minus35: Pssm, minus10: Pssm, spacer: [f64; SPACER_SPAN], min_confidence: f64) -> Self {
        let floor = minus35.min_score()
            + minus10.min_score()
            + spacer.iter().cloned().fold(f64::INFINITY, f64::min);
        let ceiling = minus35.max_score()
            + minus10.max_score()
            + spacer.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Self {
            minus35,
            minus10,
            spacer,
            min_confidence,
            floor,
            ceiling,
            scores35: Vec::new(),
            scores10: Vec::new(),
        }
    }

    /// The single best-scoring site with confidence at or above the cutoff,
    /// or None. Ties go to the leftmost -35 box, then the shortest spacer,
    /// so results do not depend on scan order or thread.
    pub fn best_match(&mut self, window: &[u8]) -> Option<PromoterMatch> {
        let length = window.len();
        if length < 2 * BOX_LEN + SPACER_MIN {
            return None;
        }
        let offsets = length - BOX_LEN + 1;

        self.scores35.clear();
        self.scores10.clear();
        for offset in 0..offsets {
            let score35 = self.minus35.score_at(window, offset);
            self.scores35.push(score35);
            let score10 = self.minus10.score_at(window, offset);
            self.scores10.push(score10);
        }

        let mut best: Option<(f64, usize, usize)> = None;
        for offset35 in 0..offsets {
            for spacer in SPACER_MIN..=SPACER_MAX {
                let offset10 = offset35 + BOX_LEN + spacer;
                if offset10 >= offsets {
                    break;
                }
                let total =
                    self.scores35[offset35] + self.spacer[spacer - SPACER_MIN] + self.scores10[offset10];
                if best.map_or(true, |(score, ..)| total > score) {
                    best = Some((total, offset35, spacer));
                }
            }
        }

        let (total, offset35, spacer) = best?;
        let confidence = (total - self.floor) / (self.ceiling - self.floor);
        if confidence < self.min_confidence {
            return None;
        }

        let offset10 = offset35 + BOX_LEN + spacer;
        let mut minus35 = [Nucleotide::Unknown; BOX_LEN];
        let mut minus10 = [Nucleotide::Unknown; BOX_LEN];
        for position in 0..BOX_LEN {
            minus35[position] = Nucleotide::from(window[offset35 + position]);
            minus10[position] = Nucleotide::from(window[offset10 + position]);
        }
        Some(PromoterMatch { minus35, minus10, spacer, confidence })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn window_with_site(length: usize, offset: usize, spacer: usize) -> Vec<u8> {
        let mut window = vec![b'c'; length];
        window[offset..offset + BOX_LEN].copy_from_slice(b"TTGACA");
        window[offset + BOX_LEN + spacer..offset + 2 * BOX_LEN + spacer].copy_from_slice(b"TATAAT");
        window
    }

    fn symbols(boxed: &[Nucleotide; BOX_LEN]) -> String {
        boxed.iter().map(|x| x.symbol()).collect()
    }

    #[test]
    fn perfect_site_is_found() {
        let mut matcher = sigma70::matcher(sigma70::MIN_CONFIDENCE);
        let window = window_with_site(250, 100, 17);

        let result = matcher.best_match(&window).unwrap();
        assert_eq!(symbols(&result.minus35), "TTGACA");
        assert_eq!(symbols(&result.minus10), "TATAAT");
        assert_eq!(result.spacer, 17);
        assert!(result.confidence >= sigma70::MIN_CONFIDENCE);
    }

    #[test]
    fn lowercase_site_is_found() {
        let mut matcher = sigma70::matcher(sigma70::MIN_CONFIDENCE);
        let window: Vec<u8> = window_with_site(120, 40, 16).to_ascii_lowercase();

        let result = matcher.best_match(&window).unwrap();
        assert_eq!(symbols(&result.minus35), "TTGACA");
        assert_eq!(result.spacer, 16);
    }

    #[test]
    fn background_window_has_no_match() {
        let mut matcher = sigma70::matcher(sigma70::MIN_CONFIDENCE);
        assert!(matcher.best_match(&vec![b'c'; 250]).is_none());
        assert!(matcher.best_match(&vec![b'N'; 250]).is_none());
    }

    #[test]
    fn short_window_has_no_match() {
        let mut matcher = sigma70::matcher(sigma70::MIN_CONFIDENCE);
        assert!(matcher.best_match(b"TTGACA").is_none());
        assert!(matcher.best_match(b"").is_none());
    }

    #[test]
    fn matcher_is_reusable_between_windows() {
        // Scratch buffers are reused; results must not leak across calls
        let mut matcher = sigma70::matcher(sigma70::MIN_CONFIDENCE);
        let first = matcher.best_match(&window_with_site(250, 100, 17));
        assert!(matcher.best_match(&vec![b'g'; 250]).is_none());
        let second = matcher.best_match(&window_with_site(250, 100, 17));
        assert_eq!(first, second);
    }

    #[test]
    fn spacer_length_is_weighted() {
        // Identical boxes, different spacers: 17 must win inside one window
        let mut matcher = sigma70::matcher(0.0);
        let mut window = vec![b'c'; 250];
        window[10..16].copy_from_slice(b"TTGACA");
        window[10 + 6 + 21..10 + 12 + 21].copy_from_slice(b"TATAAT");
        window[150..156].copy_from_slice(b"TTGACA");
        window[150 + 6 + 17..150 + 12 + 17].copy_from_slice(b"TATAAT");

        let result = matcher.best_match(&window).unwrap();
        assert_eq!(result.spacer, 17);
    }
}
