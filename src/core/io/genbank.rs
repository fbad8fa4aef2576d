use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use bio_types::strand::ReqStrand;
use flate2::bufread::GzDecoder;
use gb_io::reader::SeqReader;
use gb_io::seq::{Feature, Location};

use crate::core::gene::{CandidateGene, GenomeRecord};

use super::sanitize_protein;

/// Recursively lists every regular file under `dir`, sorted by path so the
/// work enumeration is reproducible between runs.
pub fn discover(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

/// Parses one GenBank file (gzipped or plain) into a genome record. CDS
/// features without a translation qualifier or with a location that cannot
/// be resolved against the sequence are skipped; a file without a usable
/// record is an InvalidData error the caller may choose to skip.
pub fn parse(file: &Path) -> io::Result<GenomeRecord> {
    let raw = BufReader::new(File::open(file)?);
    let reader: Box<dyn BufRead> = if file.extension() == Some(OsStr::new("gz")) {
        Box::new(BufReader::new(GzDecoder::new(raw)))
    } else {
        Box::new(raw)
    };

    let seq = SeqReader::new(reader)
        .next()
        .ok_or_else(|| io::Error::new(ErrorKind::InvalidData, "no GenBank record found"))?
        .map_err(|x| io::Error::new(ErrorKind::InvalidData, x.to_string()))?;

    let length = seq.seq.len();
    if length == 0 {
        return Err(io::Error::new(ErrorKind::InvalidData, "empty nucleotide sequence"));
    }

    let genes = seq.features.iter().filter_map(|x| gene_of(x, length)).collect();
    let name = seq.name.clone().unwrap_or_else(|| {
        file.file_stem().and_then(OsStr::to_str).unwrap_or("record").to_string()
    });
    Ok(GenomeRecord { name, nucleotides: seq.seq, genes })
}

fn gene_of(feature: &Feature, length: usize) -> Option<CandidateGene> {
    if feature.kind != "CDS" {
        return None;
    }
    let translation = feature.qualifier_values("translation".into()).next()?;
    let (start, end) = bounds(&feature.location)?;
    if start < 0 || end as usize > length || start >= end {
        return None;
    }

    let strand = strand_of(&feature.location);
    // 1-based start in the gene's own reading frame (see CandidateGene)
    let location = match strand {
        ReqStrand::Forward => start as usize + 1,
        ReqStrand::Reverse => length - end as usize + 1,
    };
    Some(CandidateGene { location, strand, protein: sanitize_protein(translation) })
}

fn bounds(location: &Location) -> Option<(i64, i64)> {
    match location {
        Location::Range((start, _), (end, _)) => Some((*start, *end)),
        Location::Complement(inner) => bounds(inner),
        Location::Join(parts) | Location::Order(parts) => {
            let (first, _) = bounds(parts.first()?)?;
            let (_, last) = bounds(parts.last()?)?;
            Some((first, last))
        }
        _ => None,
    }
}

fn strand_of(location: &Location) -> ReqStrand {
    match location {
        Location::Complement(_) => ReqStrand::Reverse,
        _ => ReqStrand::Forward,
    }
}
