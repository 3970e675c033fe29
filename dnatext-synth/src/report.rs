use serde::{Deserialize, Serialize};

use dnatext_codec::{dna_to_amino_acids, text_to_dna};

use crate::config::SynthesisGuidelines;
use crate::guidelines::analyze;
use crate::models::AnalysisReport;

///
/// Result of encoding a piece of text: the DNA, its translation and the
/// synthesis metrics, shaped as the payload handed back to callers.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingReport {
    pub text: String,
    pub dna_sequence: String,
    pub amino_acid_sequence: String,
    pub length: usize,
    pub gc_content: f64,
    pub gc_variation: f64,
    pub homopolymers_count: usize,
    pub repeats_count: usize,
    pub issues: Vec<String>,
}

impl EncodingReport {
    ///
    /// Encode `text` and run both branches on the DNA: translation and
    /// guideline analysis. Neither depends on the other, so they run in
    /// parallel.
    ///
    /// The caller is responsible for rejecting empty text.
    ///
    pub fn from_text(text: &str, guidelines: &SynthesisGuidelines) -> Self {
        let dna = text_to_dna(text);
        let (amino_acid_sequence, analysis) =
            rayon::join(|| dna_to_amino_acids(&dna), || analyze(&dna, guidelines));

        EncodingReport::from_parts(text, dna, amino_acid_sequence, analysis)
    }

    fn from_parts(
        text: &str,
        dna_sequence: String,
        amino_acid_sequence: String,
        analysis: AnalysisReport,
    ) -> Self {
        EncodingReport {
            text: text.to_string(),
            length: dna_sequence.len(),
            dna_sequence,
            amino_acid_sequence,
            gc_content: analysis.gc_content,
            gc_variation: analysis.gc_variation,
            homopolymers_count: analysis.homopolymers.len(),
            repeats_count: analysis.repeats.len(),
            issues: analysis.issues,
        }
    }
}
