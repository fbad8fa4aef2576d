pub mod genbank;
pub mod reference;

/// Normalizes a raw protein string for alignment: uppercase, stop codons
/// and whitespace dropped, anything outside A-Z mapped to the ambiguity
/// code X (the substitution matrix covers the full A-Z alphabet).
pub(crate) fn sanitize_protein(raw: &str) -> Vec<u8> {
    raw.bytes()
        .filter(|x| !x.is_ascii_whitespace() && *x != b'*')
        .map(|x| {
            let upper = x.to_ascii_uppercase();
            if upper.is_ascii_uppercase() {
                upper
            } else {
                b'X'
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sanitize() {
        assert_eq!(sanitize_protein("mkLV*"), b"MKLV");
        assert_eq!(sanitize_protein("MK \nLV"), b"MKLV");
        assert_eq!(sanitize_protein("M-K7"), b"MXKX");
    }
}
