use clap::Arg;

use super::validate;

pub const REFERENCE: &str = "reference";
pub const GENOMES: &str = "genomes";
pub const STRATEGY: &str = "strategy";
pub const THREADS: &str = "threads";
pub const SAVETO: &str = "saveto";

pub fn all<'a>() -> Vec<Arg<'a>> {
    vec![
        Arg::new(REFERENCE)
            .short('r')
            .long(REFERENCE)
            .required(true)
            .takes_value(true)
            .validator(validate::path)
            .long_help(
                "Path to the reference gene list: alternating lines with a gene name \
                 followed by its protein sequence.",
            ),
        Arg::new(GENOMES)
            .short('g')
            .long(GENOMES)
            .required(true)
            .takes_value(true)
            .validator(validate::path)
            .long_help(
                "Directory with GenBank genome records. Files are discovered recursively; \
                 \".gz\" files are decompressed on the fly.",
            ),
        Arg::new(STRATEGY)
            .short('s')
            .long(STRATEGY)
            .required(true)
            .takes_value(true)
            .possible_values(["seq", "perfile", "pool", "stream"])
            .validator(validate::strategy)
            .long_help(
                "Concurrency strategy: \"seq\" runs everything on one thread, \"perfile\" \
                 starts one thread per genome file, \"pool\" submits every (reference gene, \
                 candidate gene) work item to a fixed-size worker pool, \"stream\" fans the \
                 same work items out through a data-parallel iterator. All strategies \
                 produce a byte-identical report.",
            ),
        Arg::new(THREADS)
            .short('t')
            .long(THREADS)
            .takes_value(true)
            .default_value("1")
            .validator(validate::numeric(1usize, 256usize))
            .long_help("Number of worker threads for the pool/stream strategies."),
        Arg::new(SAVETO)
            .short('o')
            .long(SAVETO)
            .takes_value(true)
            .validator(validate::writable)
            .long_help("Write the final consensus report to this file instead of stdout."),
    ]
}
