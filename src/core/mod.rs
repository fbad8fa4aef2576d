pub mod consensus;
pub mod dna;
pub mod gene;
pub mod homology;
pub mod io;
pub mod motif;
pub mod run;
pub mod upstream;
