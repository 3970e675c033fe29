//! Check a DNA sequence against synthesis guidelines.
//!
//! The checks run in a fixed order (length, GC content, GC variation,
//! repeats, homopolymers) and each failing check appends one or more
//! human-readable lines to the issue list.

use log::debug;

use dnatext_codec::{required_text_length, text_to_dna};

use crate::config::SynthesisGuidelines;
use crate::models::{AnalysisReport, Homopolymer, Repeat};
use crate::statistics::{calc_gc_content, calc_gc_variation, find_homopolymers, find_repeats};

///
/// Compute every metric for `dna` and the issues they raise.
///
/// GC content, GC variation, homopolymers and repeats are independent,
/// so they are computed in parallel and joined before the issues are built.
///
pub fn analyze(dna: &str, guidelines: &SynthesisGuidelines) -> AnalysisReport {
    let ((gc_content, gc_variation), (homopolymers, repeats)) = rayon::join(
        || {
            rayon::join(
                || calc_gc_content(dna),
                || calc_gc_variation(dna, guidelines.gc_window),
            )
        },
        || {
            rayon::join(
                || find_homopolymers(dna, guidelines.homopolymer_min_length),
                || find_repeats(dna, guidelines.repeat_min_length),
            )
        },
    );

    let issues = collect_issues(
        dna.len(),
        gc_content,
        gc_variation,
        &repeats,
        &homopolymers,
        guidelines,
    );
    debug!(
        "Analyzed {} bp: {} repeats, {} homopolymers, {} issues",
        dna.len(),
        repeats.len(),
        homopolymers.len(),
        issues.len()
    );

    AnalysisReport {
        length: dna.len(),
        gc_content,
        gc_variation,
        homopolymers,
        repeats,
        issues,
    }
}

///
/// List every guideline `dna` violates. Empty when all checks pass.
///
pub fn check_guidelines(dna: &str, guidelines: &SynthesisGuidelines) -> Vec<String> {
    analyze(dna, guidelines).issues
}

fn collect_issues(
    length: usize,
    gc_content: f64,
    gc_variation: f64,
    repeats: &[Repeat],
    homopolymers: &[Homopolymer],
    g: &SynthesisGuidelines,
) -> Vec<String> {
    let mut issues = Vec::new();

    if length < g.min_length {
        issues.push(format!(
            "Sequence length ({} bp) is less than the minimum {} bp required.",
            length, g.min_length
        ));
    }

    if gc_content < g.gc_min || gc_content > g.gc_max {
        issues.push(format!(
            "GC content ({:.1}%) is outside the recommended range ({}-{}%).",
            gc_content, g.gc_min, g.gc_max
        ));
    }

    if gc_variation > g.max_gc_variation {
        issues.push(format!(
            "GC content variation ({:.1}%) exceeds the maximum recommended ({}%).",
            gc_variation, g.max_gc_variation
        ));
    }

    if !repeats.is_empty() {
        issues.push(format!(
            "Found {} repeats of {}+ bp. This may cause synthesis issues.",
            repeats.len(),
            g.repeat_min_length
        ));
    }

    if !homopolymers.is_empty() {
        issues.push(format!(
            "Found {} homopolymers of {}+ bases. This may cause synthesis issues.",
            homopolymers.len(),
            g.homopolymer_min_length
        ));
        for homo in homopolymers.iter().take(g.max_homopolymer_examples) {
            issues.push(format!("  - {} at position {}", homo.sequence, homo.position));
        }
        if homopolymers.len() > g.max_homopolymer_examples {
            issues.push(format!(
                "  - ... and {} more",
                homopolymers.len() - g.max_homopolymer_examples
            ));
        }
    }

    issues
}

///
/// Printable ASCII characters whose 4-base encoding is at least 75% G/C.
///
pub fn gc_rich_characters() -> Vec<char> {
    characters_by_gc(|gc| gc >= 75.0)
}

///
/// Printable ASCII characters whose 4-base encoding is at most 25% G/C.
///
pub fn gc_poor_characters() -> Vec<char> {
    characters_by_gc(|gc| gc <= 25.0)
}

fn characters_by_gc(keep: impl Fn(f64) -> bool) -> Vec<char> {
    (b' '..=b'~')
        .map(char::from)
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .filter(|c| keep(calc_gc_content(&text_to_dna(&c.to_string()))))
        .collect()
}

///
/// Hints for getting a failing encoded sequence within the guidelines.
///
/// Covers the two properties the author of the text can steer directly:
/// length (how many more characters are needed) and GC content (which
/// characters push it up or down).
///
pub fn suggestions(length: usize, gc_content: f64, guidelines: &SynthesisGuidelines) -> Vec<String> {
    let mut hints = Vec::new();

    if length < guidelines.min_length {
        let missing = required_text_length(guidelines.min_length - length);
        hints.push(format!(
            "Add approximately {} more characters to reach the minimum length.",
            missing
        ));
    }

    let list = |chars: Vec<char>| {
        chars
            .iter()
            .map(|c| format!("{:?}", c))
            .collect::<Vec<String>>()
            .join(", ")
    };

    if gc_content < guidelines.gc_min {
        hints.push(format!(
            "To increase GC content, add text with characters that encode to G or C: {}",
            list(gc_rich_characters())
        ));
    } else if gc_content > guidelines.gc_max {
        hints.push(format!(
            "To decrease GC content, add text with characters that encode to A or T: {}",
            list(gc_poor_characters())
        ));
    }

    hints
}
