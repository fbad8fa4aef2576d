use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::sync::Mutex;

use crate::core::dna::NucCounts;
use crate::core::motif::{PromoterMatch, BOX_LEN, SPACER_MIN, SPACER_SPAN};

/// Key of the entry that receives every match regardless of which
/// reference gene it was attributed to.
pub const TOTAL_KEY: &str = "all";

const MISSING_ENTRY: &str = "Consensus entries must be seeded for every reference gene before the run starts.";
const POISONED: &str = "Consensus lock poisoned by a panicked worker.";

/// Running aggregate over all promoter matches attributed to one key:
/// match count, per-position base frequencies of both boxes and the
/// spacer-length distribution. Mutated monotonically through `add_match`
/// until the run's completion barrier, read-only afterwards.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Sigma70Consensus {
    count: u64,
    minus35: [NucCounts; BOX_LEN],
    minus10: [NucCounts; BOX_LEN],
    spacers: [u64; SPACER_SPAN],
}

impl Sigma70Consensus {
    pub fn add_match(&mut self, prediction: &PromoterMatch) {
        debug_assert!((SPACER_MIN..SPACER_MIN + SPACER_SPAN).contains(&prediction.spacer));
        for (counts, nuc) in self.minus35.iter_mut().zip(&prediction.minus35) {
            *counts += NucCounts::single(*nuc);
        }
        for (counts, nuc) in self.minus10.iter_mut().zip(&prediction.minus10) {
            *counts += NucCounts::single(*nuc);
        }
        self.spacers[prediction.spacer - SPACER_MIN] += 1;
        self.count += 1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    fn mean_spacer(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let total: u64 = self.spacers.iter().enumerate().map(|(i, n)| (SPACER_MIN + i) as u64 * n).sum();
        total as f64 / self.count as f64
    }

    fn fmt_box(counts: &[NucCounts; BOX_LEN], f: &mut Formatter<'_>) -> fmt::Result {
        for position in counts {
            match position.mostfreq() {
                (_, 0) => write!(f, "- ")?,
                (nuc, _) => write!(f, "{} ", nuc)?,
            }
        }
        Ok(())
    }
}

impl Display for Sigma70Consensus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, " Consensus: -35: ")?;
        Self::fmt_box(&self.minus35, f)?;
        write!(f, "gap: {:.1} -10: ", self.mean_spacer())?;
        Self::fmt_box(&self.minus10, f)?;
        write!(f, " ({} matches)", self.count)
    }
}

/// The keyed consensus collection shared by all workers of a run: one entry
/// per reference-gene name plus the reserved "all" entry, all seeded at
/// construction so the key set never changes under contention.
pub struct ConsensusMap {
    entries: Mutex<HashMap<String, Sigma70Consensus>>,
}

impl ConsensusMap {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        let mut entries: HashMap<String, Sigma70Consensus> =
            names.into_iter().map(|name| (name, Sigma70Consensus::default())).collect();
        entries.insert(TOTAL_KEY.to_string(), Sigma70Consensus::default());
        Self { entries: Mutex::new(entries) }
    }

    /// Folds one match into the named entry and the "all" entry. The pair
    /// of updates is a single atomic step relative to other merges; the
    /// critical section covers exactly this O(1) accounting and nothing of
    /// the surrounding pipeline.
    pub fn merge(&self, name: &str, prediction: &PromoterMatch) {
        let mut entries = self.entries.lock().expect(POISONED);
        entries.get_mut(name).expect(MISSING_ENTRY).add_match(prediction);
        entries.get_mut(TOTAL_KEY).expect(MISSING_ENTRY).add_match(prediction);
    }

    /// Consumes the map after the completion barrier; reading concurrently
    /// with in-flight merges is impossible by construction.
    pub fn finalize(self) -> HashMap<String, Sigma70Consensus> {
        self.entries.into_inner().expect(POISONED)
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;
    use crate::core::dna::Nucleotide;
    use crate::core::motif::SPACER_MAX;

    fn prediction(minus35: &[u8; BOX_LEN], minus10: &[u8; BOX_LEN], spacer: usize) -> PromoterMatch {
        let mut m35 = [Nucleotide::Unknown; BOX_LEN];
        let mut m10 = [Nucleotide::Unknown; BOX_LEN];
        for position in 0..BOX_LEN {
            m35[position] = Nucleotide::from(minus35[position]);
            m10[position] = Nucleotide::from(minus10[position]);
        }
        PromoterMatch { minus35: m35, minus10: m10, spacer, confidence: 1.0 }
    }

    #[test]
    fn empty_entry_renders_dashes() {
        let entry = Sigma70Consensus::default();
        assert_eq!(entry.to_string(), " Consensus: -35: - - - - - - gap: 0.0 -10: - - - - - -  (0 matches)");
    }

    #[test]
    fn display_is_byte_exact() {
        let mut entry = Sigma70Consensus::default();
        entry.add_match(&prediction(b"TTGACA", b"TATAAT", 17));
        entry.add_match(&prediction(b"TTGACA", b"TATAAT", 18));
        assert_eq!(entry.to_string(), " Consensus: -35: T T G A C A gap: 17.5 -10: T A T A A T  (2 matches)");
    }

    #[test]
    fn consensus_takes_most_frequent_base() {
        let mut entry = Sigma70Consensus::default();
        entry.add_match(&prediction(b"TTGACA", b"TATAAT", 17));
        entry.add_match(&prediction(b"TTGACA", b"TATAAT", 17));
        entry.add_match(&prediction(b"CTGACA", b"TATACT", 17));
        assert_eq!(entry.to_string(), " Consensus: -35: T T G A C A gap: 17.0 -10: T A T A A T  (3 matches)");
    }

    #[test]
    fn merge_is_commutative() {
        let predictions = [
            prediction(b"TTGACA", b"TATAAT", 15),
            prediction(b"TTGTCG", b"TATACT", 18),
            prediction(b"ttgaca", b"tataat", 21),
            prediction(b"CTGACA", b"TATAAT", 17),
        ];

        let mut forward = Sigma70Consensus::default();
        let mut backward = Sigma70Consensus::default();
        for p in &predictions {
            forward.add_match(p);
        }
        for p in predictions.iter().rev() {
            backward.add_match(p);
        }
        assert_eq!(forward, backward);
    }

    #[test]
    fn merge_updates_named_and_total_as_a_pair() {
        let map = ConsensusMap::new(["fixB".to_string(), "carA".to_string()]);
        map.merge("fixB", &prediction(b"TTGACA", b"TATAAT", 17));
        map.merge("fixB", &prediction(b"TTGACA", b"TATAAT", 17));
        map.merge("carA", &prediction(b"TTGACA", b"TATAAT", 16));

        let entries = map.finalize();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries["fixB"].count(), 2);
        assert_eq!(entries["carA"].count(), 1);
        let named: u64 = entries.iter().filter(|(k, _)| *k != TOTAL_KEY).map(|(_, e)| e.count()).sum();
        assert_eq!(entries[TOTAL_KEY].count(), named);
    }

    #[test]
    fn keys_are_seeded_up_front() {
        let map = ConsensusMap::new(["fixB".to_string()]);
        let entries = map.finalize();
        assert_eq!(entries.keys().sorted().collect_vec(), ["all", "fixB"]);
        assert_eq!(entries["fixB"].count(), 0);
    }

    #[test]
    fn spacer_bounds_are_representable() {
        let mut entry = Sigma70Consensus::default();
        entry.add_match(&prediction(b"TTGACA", b"TATAAT", SPACER_MIN));
        entry.add_match(&prediction(b"TTGACA", b"TATAAT", SPACER_MAX));
        assert_eq!(entry.count(), 2);
        assert!((entry.mean_spacer() - 18.0).abs() < 1e-9);
    }
}
