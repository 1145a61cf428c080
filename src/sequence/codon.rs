//! Standard genetic code, keyed by DNA codons.

/// What a single codon decodes to: one amino acid, or the translation
/// stop signal. The stop signal is never part of a protein sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodonProduct {
    AminoAcid(char),
    Stop,
}

impl CodonProduct {
    /// Single-character form, with `*` standing in for a stop.
    pub fn symbol(self) -> char {
        match self {
            CodonProduct::AminoAcid(aa) => aa,
            CodonProduct::Stop => '*',
        }
    }

    /// Label used in UI listings.
    pub fn label(self) -> String {
        match self {
            CodonProduct::AminoAcid(aa) => aa.to_string(),
            CodonProduct::Stop => "Stop".to_string(),
        }
    }
}

/// Decode one codon through the standard genetic code.
///
/// Total over the 64 triplets built from uppercase A/T/C/G. Anything else
/// (wrong length, lowercase, foreign characters) returns `None`.
pub fn codon_product(codon: &str) -> Option<CodonProduct> {
    use CodonProduct::{AminoAcid, Stop};

    match codon.as_bytes() {
        b"ATT" | b"ATC" | b"ATA" => Some(AminoAcid('I')),
        b"ATG" => Some(AminoAcid('M')),
        b"ACA" | b"ACC" | b"ACG" | b"ACT" => Some(AminoAcid('T')),
        b"AAC" | b"AAT" => Some(AminoAcid('N')),
        b"AAA" | b"AAG" => Some(AminoAcid('K')),
        b"AGC" | b"AGT" => Some(AminoAcid('S')),
        b"AGA" | b"AGG" => Some(AminoAcid('R')),
        b"CTA" | b"CTC" | b"CTG" | b"CTT" => Some(AminoAcid('L')),
        b"CCA" | b"CCC" | b"CCG" | b"CCT" => Some(AminoAcid('P')),
        b"CAC" | b"CAT" => Some(AminoAcid('H')),
        b"CAA" | b"CAG" => Some(AminoAcid('Q')),
        b"CGA" | b"CGC" | b"CGG" | b"CGT" => Some(AminoAcid('R')),
        b"GTA" | b"GTC" | b"GTG" | b"GTT" => Some(AminoAcid('V')),
        b"GCA" | b"GCC" | b"GCG" | b"GCT" => Some(AminoAcid('A')),
        b"GAC" | b"GAT" => Some(AminoAcid('D')),
        b"GAA" | b"GAG" => Some(AminoAcid('E')),
        b"GGA" | b"GGC" | b"GGG" | b"GGT" => Some(AminoAcid('G')),
        b"TCA" | b"TCC" | b"TCG" | b"TCT" => Some(AminoAcid('S')),
        b"TTC" | b"TTT" => Some(AminoAcid('F')),
        b"TTA" | b"TTG" => Some(AminoAcid('L')),
        b"TAC" | b"TAT" => Some(AminoAcid('Y')),
        b"TAA" | b"TAG" | b"TGA" => Some(Stop),
        b"TGC" | b"TGT" => Some(AminoAcid('C')),
        b"TGG" => Some(AminoAcid('W')),
        _ => None,
    }
}

/// True for the three stop codons TAA, TAG, TGA.
pub fn is_stop_codon(codon: &str) -> bool {
    matches!(codon_product(codon), Some(CodonProduct::Stop))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bio_seq::prelude::*;
    use bio_seq::translation::{TranslationTable, STANDARD};

    const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

    #[test]
    fn table_is_total_over_valid_triplets() {
        for a in BASES {
            for b in BASES {
                for c in BASES {
                    let codon = format!("{a}{b}{c}");
                    assert!(
                        codon_product(&codon).is_some(),
                        "no product for codon {codon}"
                    );
                }
            }
        }
    }

    #[test]
    fn agrees_with_standard_genetic_code() {
        for a in BASES {
            for b in BASES {
                for c in BASES {
                    let codon = format!("{a}{b}{c}");
                    let seq: Seq<Dna> = codon.parse().unwrap();
                    let expected = STANDARD.to_amino(&seq).to_string();
                    let product = codon_product(&codon).unwrap();
                    assert_eq!(
                        product.symbol().to_string(),
                        expected,
                        "codon {codon} disagrees with the standard table"
                    );
                }
            }
        }
    }

    #[test]
    fn stop_codons() {
        assert!(is_stop_codon("TAA"));
        assert!(is_stop_codon("TAG"));
        assert!(is_stop_codon("TGA"));
        assert!(!is_stop_codon("ATG"));
        assert_eq!(codon_product("TAA"), Some(CodonProduct::Stop));
    }

    #[test]
    fn start_codon_is_methionine() {
        assert_eq!(codon_product("ATG"), Some(CodonProduct::AminoAcid('M')));
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(codon_product(""), None);
        assert_eq!(codon_product("AT"), None);
        assert_eq!(codon_product("ATGA"), None);
        assert_eq!(codon_product("atg"), None);
        assert_eq!(codon_product("AXG"), None);
        assert_eq!(codon_product("AUG"), None);
    }

    #[test]
    fn labels() {
        assert_eq!(codon_product("TAA").unwrap().label(), "Stop");
        assert_eq!(codon_product("TGG").unwrap().label(), "W");
        assert_eq!(codon_product("TGA").unwrap().symbol(), '*');
    }
}
