//! Deterministic text ↔ nucleotide ↔ protein codec.
//!
//! Text is written as 8 bits per character, the bits are read two at a
//! time as bases (00→A, 01→C, 10→G, 11→T), and the resulting DNA can be
//! translated to amino acids with the standard genetic code.
//!
//! # Example
//!
//! ```
//! use dnatext_codec::{dna_to_text, text_to_dna};
//!
//! let dna = text_to_dna("A");
//! assert_eq!(dna, "CAAC");
//! assert_eq!(dna_to_text(&dna), "A");
//! ```

pub mod binary;
pub mod consts;
pub mod nucleotide;
pub mod protein;

use log::debug;

// re-exports
pub use binary::{binary_to_text, text_to_binary};
pub use nucleotide::{binary_to_dna, dna_to_binary};
pub use protein::{dna_to_amino_acids, translate_codon, translate_codons};

use consts::BASES_PER_CHAR;

///
/// Encode text as DNA: text → bits → bases.
///
pub fn text_to_dna(text: &str) -> String {
    let binary = text_to_binary(text);
    let dna = binary_to_dna(&binary);
    debug!("Encoded {} characters into {} bp", text.chars().count(), dna.len());
    dna
}

///
/// Decode DNA back to text: bases → bits → text.
///
pub fn dna_to_text(dna: &str) -> String {
    let binary = dna_to_binary(dna);
    binary_to_text(&binary)
}

///
/// Number of characters of text needed to produce at least `min_bp` bases.
///
pub fn required_text_length(min_bp: usize) -> usize {
    min_bp.div_ceil(BASES_PER_CHAR)
}
