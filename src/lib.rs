//! sigscan scans bacterial genome records for genes homologous to a
//! reference set, extracts each homolog's upstream region, predicts a
//! sigma-70 promoter motif inside it and accumulates per-gene and global
//! consensus statistics. The same pipeline runs under several concurrency
//! strategies and always produces bit-identical aggregates.

pub mod cli;
pub mod core;
