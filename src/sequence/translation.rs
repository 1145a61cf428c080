//! DNA-to-protein translation over the standard genetic code.

use std::fmt;

use crate::sequence::codon::{codon_product, CodonProduct};

/// Text shown wherever a translation produced no amino acids.
pub const NO_TRANSLATION: &str = "No valid translation available.";

/// Outcome of translating a nucleotide sequence.
///
/// `Unavailable` covers every way of producing nothing: empty input, an
/// immediate stop codon, or no decodable codon at all. Presentation code
/// renders it through `Display` as [`NO_TRANSLATION`]; the variants stay
/// distinguishable everywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Protein(String),
    Unavailable,
}

impl Translation {
    pub fn is_available(&self) -> bool {
        matches!(self, Translation::Protein(_))
    }

    pub fn protein(&self) -> Option<&str> {
        match self {
            Translation::Protein(p) => Some(p),
            Translation::Unavailable => None,
        }
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translation::Protein(p) => f.write_str(p),
            Translation::Unavailable => f.write_str(NO_TRANSLATION),
        }
    }
}

/// Translate a DNA sequence into single-letter amino-acid codes.
///
/// Scans non-overlapping character triplets from offset 0. The first stop
/// codon ends the scan without being emitted. Triplets containing
/// characters outside A/T/C/G decode to nothing and are skipped. A
/// trailing remainder of one or two characters is dropped.
pub fn translate_dna(sequence: &str) -> Translation {
    let chars: Vec<char> = sequence.chars().collect();
    let mut protein = String::new();

    for triplet in chars.chunks_exact(3) {
        let codon: String = triplet.iter().collect();
        match codon_product(&codon) {
            Some(CodonProduct::AminoAcid(aa)) => protein.push(aa),
            Some(CodonProduct::Stop) => break,
            None => {}
        }
    }

    if protein.is_empty() {
        Translation::Unavailable
    } else {
        Translation::Protein(protein)
    }
}
