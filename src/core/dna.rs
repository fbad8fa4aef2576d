use std::fmt::{Display, Formatter};

use derive_more::{Add, AddAssign};

#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Debug)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
    Unknown,
}

impl Nucleotide {
    pub fn symbol(&self) -> &str {
        match self {
            Nucleotide::A => "A",
            Nucleotide::C => "C",
            Nucleotide::G => "G",
            Nucleotide::T => "T",
            Nucleotide::Unknown => "N",
        }
    }

    /// Index into per-position count/weight tables; None for unknown symbols.
    pub fn index(&self) -> Option<usize> {
        match self {
            Nucleotide::A => Some(0),
            Nucleotide::C => Some(1),
            Nucleotide::G => Some(2),
            Nucleotide::T => Some(3),
            Nucleotide::Unknown => None,
        }
    }
}

impl Display for Nucleotide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Default for Nucleotide {
    fn default() -> Self {
        Nucleotide::Unknown
    }
}

impl From<u8> for Nucleotide {
    fn from(symbol: u8) -> Self {
        match symbol {
            b'A' | b'a' => Nucleotide::A,
            b'C' | b'c' => Nucleotide::C,
            b'G' | b'g' => Nucleotide::G,
            b'T' | b't' => Nucleotide::T,
            _ => Nucleotide::Unknown,
        }
    }
}

/// Watson-Crick complement of a raw symbol, case preserved.
pub fn complement(symbol: u8) -> u8 {
    match symbol {
        b'A' => b'T',
        b'a' => b't',
        b'T' => b'A',
        b't' => b'a',
        b'C' => b'G',
        b'c' => b'g',
        b'G' => b'C',
        b'g' => b'c',
        _ => b'N',
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug, Default, Add, AddAssign)]
#[allow(non_snake_case)]
pub struct NucCounts {
    pub A: u64,
    pub C: u64,
    pub G: u64,
    pub T: u64,
}

impl NucCounts {
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Counts of a single observation; unknown symbols count nowhere.
    /// Aggregates fold these in with `+`/`+=`.
    pub fn single(nuc: Nucleotide) -> Self {
        let mut counts = Self::zeros();
        match nuc {
            Nucleotide::A => counts.A = 1,
            Nucleotide::C => counts.C = 1,
            Nucleotide::G => counts.G = 1,
            Nucleotide::T => counts.T = 1,
            Nucleotide::Unknown => {}
        }
        counts
    }

    pub fn coverage(&self) -> u64 {
        self.A + self.C + self.G + self.T
    }

    /// The most frequent nucleotide with its count. Ties are broken in the
    /// fixed A > C > G > T order so that rendering is deterministic;
    /// all-zero counts yield (Unknown, 0).
    pub fn mostfreq(&self) -> (Nucleotide, u64) {
        let mut best = (Nucleotide::Unknown, 0u64);
        for (nuc, cnt) in [
            (Nucleotide::A, self.A),
            (Nucleotide::C, self.C),
            (Nucleotide::G, self.G),
            (Nucleotide::T, self.T),
        ] {
            if cnt > best.1 {
                best = (nuc, cnt);
            }
        }
        best
    }
}
