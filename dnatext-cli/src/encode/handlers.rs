use anyhow::Result;
use clap::ArgMatches;

use dnatext_core::utils::read_text_input;
use dnatext_synth::{EncodingReport, suggestions};

use super::cli::{FILE_ARG, TEXT_ARG};
use crate::common::{JSON_ARG, load_guidelines, print_issues, print_json};

pub fn run_encode(matches: &ArgMatches) -> Result<()> {
    let text = match matches.get_one::<String>(FILE_ARG) {
        Some(path) => read_text_input(path)?,
        None => matches.get_one::<String>(TEXT_ARG).cloned().unwrap_or_default(),
    };

    if text.is_empty() {
        anyhow::bail!("No text provided");
    }

    let guidelines = load_guidelines(matches)?;
    let report = EncodingReport::from_text(&text, &guidelines);

    if matches.get_flag(JSON_ARG) {
        return print_json(&report);
    }

    println!("Original Text: {}", report.text);
    println!("Text Length: {} characters", report.text.chars().count());
    println!("Encoded DNA: {}", report.dna_sequence);
    println!("DNA Length: {} base pairs", report.length);
    println!("Amino Acids: {}", report.amino_acid_sequence);
    println!("GC Content: {:.1}%", report.gc_content);
    println!("GC Variation: {:.1}%", report.gc_variation);
    println!("Homopolymers: {}", report.homopolymers_count);
    println!("Repeats: {}", report.repeats_count);

    print_issues(&report.issues);

    let hints = suggestions(report.length, report.gc_content, &guidelines);
    for hint in hints {
        println!("\nSuggestion: {}", hint);
    }

    Ok(())
}
