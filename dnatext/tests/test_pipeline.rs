//! End-to-end tests: text → DNA → (protein, guideline report)
//!
//! Unit tests for the individual codecs and statistics live next to the
//! code in each crate; these go through the public API only.

use dnatext::codec::{dna_to_amino_acids, dna_to_text, text_to_binary, text_to_dna};
use dnatext::core::DnaSequence;
use dnatext::synth::{
    EncodingReport, SequenceStatistics, SynthesisGuidelines, analyze, check_guidelines,
};

use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::tempdir;

#[fixture]
fn pangram() -> &'static str {
    "The quick brown fox jumps over the lazy dog while seven wizards quietly box jackdaws at noon."
}

#[rstest]
fn test_single_character_scenario() {
    assert_eq!(text_to_binary("A"), "01000001");
    let dna = text_to_dna("A");
    assert_eq!(dna, "CAAC");
    assert_eq!(dna_to_amino_acids(&dna), "Q");
    assert_eq!(dna.as_str().gc_content(), 50.0);
}

#[rstest]
fn test_hello_report() {
    let report = EncodingReport::from_text("Hello", &SynthesisGuidelines::default());
    assert_eq!(report.dna_sequence, "CAGACGCCCGTACGTACGTT");
    assert_eq!(report.amino_acid_sequence, "QTPVRT");
    assert_eq!(report.length, 20);
    assert_eq!(report.gc_content, 60.0);
    assert_eq!(
        report.issues,
        vec!["Sequence length (20 bp) is less than the minimum 300 bp required.".to_string()]
    );
}

#[rstest]
fn test_long_text_passes_all_guidelines(pangram: &str) {
    let report = EncodingReport::from_text(pangram, &SynthesisGuidelines::default());
    assert_eq!(report.length, 4 * pangram.len());
    assert!(report.length >= 300);
    assert_eq!(report.repeats_count, 0);
    assert_eq!(report.homopolymers_count, 0);
    assert!(report.issues.is_empty(), "unexpected issues: {:?}", report.issues);
}

#[rstest]
fn test_repetitive_low_gc_text() {
    // '0' encodes to ATAA: no G/C at all and a 20-mer repeat at every offset
    let text = "0".repeat(80);
    let report = EncodingReport::from_text(&text, &SynthesisGuidelines::default());
    assert_eq!(report.length, 320);
    assert_eq!(report.gc_content, 0.0);
    assert_eq!(report.repeats_count, 297);
    assert_eq!(
        report.issues,
        vec![
            "GC content (0.0%) is outside the recommended range (25-65%).".to_string(),
            "Found 297 repeats of 20+ bp. This may cause synthesis issues.".to_string(),
        ]
    );
}

#[rstest]
fn test_decoding_validated_user_dna(pangram: &str) {
    let dna = DnaSequence::parse(&text_to_dna(pangram).to_lowercase()).unwrap();
    assert_eq!(dna_to_text(dna.as_str()), pangram);
}

#[rstest]
fn test_check_matches_analyze() {
    let dna = text_to_dna("Some text that is far too short");
    let g = SynthesisGuidelines::default();
    assert_eq!(check_guidelines(&dna, &g), analyze(&dna, &g).issues);
}

#[rstest]
fn test_guidelines_from_yaml_change_the_verdict(pangram: &str) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("strict.yml");
    std::fs::write(&path, "min_length: 1000\ngc_max: 55.0\n").unwrap();
    let strict = SynthesisGuidelines::try_from(path.as_path()).unwrap();

    let report = EncodingReport::from_text(pangram, &strict);
    assert_eq!(report.issues.len(), 2);
    assert!(report.issues[0].contains("minimum 1000 bp"));
    assert!(report.issues[1].contains("(25-55%)"));
}

#[rstest]
fn test_report_serializes_to_payload() {
    let report = EncodingReport::from_text("A", &SynthesisGuidelines::default());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["dna_sequence"], "CAAC");
    assert_eq!(json["amino_acid_sequence"], "Q");
    assert_eq!(json["length"], 4);
    assert_eq!(json["homopolymers_count"], 0);
    assert_eq!(json["repeats_count"], 0);
    assert_eq!(json["issues"].as_array().unwrap().len(), 1);
}
