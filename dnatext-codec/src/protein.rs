//! DNA to amino acids through the standard genetic code.
//!
//! Stop codons do not end translation here: the raw translation keeps
//! going past them and [dna_to_amino_acids] then strips every `*` from
//! the result. Whether translation should instead stop at the first stop
//! codon is an open product question, so the filtering behavior is kept.

use crate::consts::{CODON_LENGTH, STOP_SYMBOL, UNKNOWN_AMINO_ACID};

// Codon order: AAA, AAC, AAG, AAT, ACA, ACC, ACG, ACT, AGA, AGC, AGG, AGT,
//              ATA, ATC, ATG, ATT, CAA, CAC, CAG, CAT, ...
//              TTA, TTC, TTG, TTT

/// Standard genetic code (NCBI Table 1).
const STANDARD_CODE: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// Convert a 3-base codon to an index in [0, 64).
fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != CODON_LENGTH {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

///
/// Translate a single codon. Stop codons yield `*`; anything that is not
/// three uppercase bases yields `X`.
///
pub fn translate_codon(codon: &[u8]) -> char {
    match codon_index(codon) {
        Some(idx) => STANDARD_CODE[idx] as char,
        None => UNKNOWN_AMINO_ACID,
    }
}

///
/// Translate every complete codon of `dna`, keeping stop symbols.
/// Up to two trailing bases that do not form a codon are ignored.
///
pub fn translate_codons(dna: &str) -> String {
    dna.as_bytes()
        .chunks_exact(CODON_LENGTH)
        .map(translate_codon)
        .collect()
}

///
/// Translate `dna` and drop every stop symbol from the result.
///
/// # Example
///
/// ```
/// use dnatext_codec::protein::dna_to_amino_acids;
///
/// // CAAC is truncated to CAA, which codes for glutamine
/// assert_eq!(dna_to_amino_acids("CAAC"), "Q");
/// ```
pub fn dna_to_amino_acids(dna: &str) -> String {
    let mut amino_acids = translate_codons(dna);
    amino_acids.retain(|aa| aa != STOP_SYMBOL);
    amino_acids
}
