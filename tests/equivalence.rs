//! End-to-end agreement between scheduling strategies: every strategy must
//! produce a byte-identical consensus report over the same genomes.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use gb_io::seq::{Feature, Location, Seq, Topology};

use sigscan::cli::resformat;
use sigscan::core::consensus::{ConsensusMap, TOTAL_KEY};
use sigscan::core::gene::ReferenceGene;
use sigscan::core::homology::Blosum62Homology;
use sigscan::core::io::{genbank, reference};
use sigscan::core::run::{perfile, pool, sequential, stream};

const HOMOLOG_A: &str = "MWWWWWWWWWWWW";
const HOMOLOG_B: &str = "MHHHHHHHHHHHHHHH";

fn cds(location: Location, translation: &str) -> Feature {
    Feature {
        kind: "CDS".into(),
        location,
        qualifiers: vec![("translation".into(), Some(translation.to_string()))],
    }
}

fn record(name: &str, nucleotides: Vec<u8>, features: Vec<Feature>) -> Seq {
    Seq {
        name: Some(name.to_string()),
        topology: Topology::Linear,
        len: Some(nucleotides.len()),
        seq: nucleotides,
        features,
        ..Seq::empty()
    }
}

// A forward gene at position 301 whose 250 bp upstream window carries a
// perfect promoter site with a 17 bp spacer.
fn forward_genome() -> Seq {
    let mut nucleotides = vec![b'c'; 600];
    nucleotides[120..126].copy_from_slice(b"TTGACA");
    nucleotides[143..149].copy_from_slice(b"TATAAT");
    record("forward", nucleotides, vec![cds(Location::simple_range(300, 450), HOMOLOG_A)])
}

// The reverse-strand mirror of the forward fixture: the gene sits on the
// complement strand, so its upstream window is the reverse complement of
// the trailing sequence and the site is planted reverse complemented.
fn reverse_genome() -> Seq {
    let mut nucleotides = vec![b'c'; 600];
    nucleotides[474..480].copy_from_slice(b"TGTCAA");
    nucleotides[451..457].copy_from_slice(b"ATTATA");
    let location = Location::Complement(Box::new(Location::simple_range(150, 300)));
    record("reverse", nucleotides, vec![cds(location, HOMOLOG_B)])
}

fn write_genomes(dir: &Path) {
    gb_io::writer::write(File::create(dir.join("forward.gb")).unwrap(), &forward_genome()).unwrap();

    // The second genome goes gzipped into a subdirectory to exercise
    // recursive discovery and on-the-fly decompression.
    let subdir = dir.join("nested");
    std::fs::create_dir(&subdir).unwrap();
    let mut encoder = GzEncoder::new(File::create(subdir.join("reverse.gb.gz")).unwrap(), Compression::default());
    gb_io::writer::write(&mut encoder, &reverse_genome()).unwrap();
    encoder.finish().unwrap();
}

fn write_references(dir: &Path) -> PathBuf {
    let path = dir.join("references.txt");
    let mut file = File::create(&path).unwrap();
    writeln!(file, "refA\n{}\nrefB\n{}", HOMOLOG_A, HOMOLOG_B).unwrap();
    path
}

fn report(references: &[ReferenceGene], files: &[PathBuf], strategy: &str, threads: usize) -> String {
    let consensus = ConsensusMap::new(references.iter().map(|x| x.name.clone()));
    let filter = Blosum62Homology;

    match strategy {
        "seq" => {
            let records: Vec<_> = files.iter().map(|x| genbank::parse(x).unwrap()).collect();
            sequential::run(references, &records, &filter, &consensus, || ());
        }
        "perfile" => {
            perfile::run(references, files, &filter, &consensus, || (), |file, error| {
                panic!("unexpected skip of {}: {}", file.display(), error)
            });
        }
        "pool" => {
            let records: Vec<_> = files.iter().map(|x| genbank::parse(x).unwrap()).collect();
            pool::run(references, &records, &filter, &consensus, threads, || ());
        }
        "stream" => {
            let records: Vec<_> = files.iter().map(|x| genbank::parse(x).unwrap()).collect();
            stream::run(references, &records, &filter, &consensus, threads, || ());
        }
        _ => unreachable!(),
    }

    let entries = consensus.finalize();
    assert_eq!(entries["refA"].count(), 1);
    assert_eq!(entries["refB"].count(), 1);
    assert_eq!(entries[TOTAL_KEY].count(), 2);

    let mut buffer = Vec::new();
    resformat::consensus(&mut buffer, &entries);
    String::from_utf8(buffer).unwrap()
}

#[test]
fn all_strategies_agree() {
    let dir = tempfile::tempdir().unwrap();
    let genomes = dir.path().join("genomes");
    std::fs::create_dir(&genomes).unwrap();
    write_genomes(&genomes);
    let references = reference::load(&write_references(dir.path())).unwrap();
    assert_eq!(references.len(), 2);

    let files = genbank::discover(&genomes).unwrap();
    assert_eq!(files.len(), 2);

    let expected = "all Consensus: -35: T T G A C A gap: 17.0 -10: T A T A A T  (2 matches)\n\
                    refA Consensus: -35: T T G A C A gap: 17.0 -10: T A T A A T  (1 matches)\n\
                    refB Consensus: -35: T T G A C A gap: 17.0 -10: T A T A A T  (1 matches)\n";

    assert_eq!(report(&references, &files, "seq", 1), expected);
    assert_eq!(report(&references, &files, "perfile", 1), expected);
    for threads in [1, 2, 8] {
        assert_eq!(report(&references, &files, "pool", threads), expected);
        assert_eq!(report(&references, &files, "stream", threads), expected);
    }
}
