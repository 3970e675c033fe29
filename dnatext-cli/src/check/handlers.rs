use anyhow::Result;
use clap::ArgMatches;

use dnatext_synth::analyze;

use crate::common::{JSON_ARG, dna_from_matches, load_guidelines, print_issues, print_json};

pub fn run_check(matches: &ArgMatches) -> Result<()> {
    let dna = dna_from_matches(matches)?;
    let guidelines = load_guidelines(matches)?;

    let report = analyze(dna.as_str(), &guidelines);

    if matches.get_flag(JSON_ARG) {
        return print_json(&report);
    }

    println!("Sequence Length: {} bp", report.length);
    println!("GC Content: {:.1}%", report.gc_content);
    println!("GC Variation: {:.1}%", report.gc_variation);
    match report.homopolymers.len() {
        0 => println!("Homopolymers: None found"),
        n => println!("Homopolymers: {} found", n),
    }
    match report.repeats.len() {
        0 => println!("Repeats ({}+ bp): None found", guidelines.repeat_min_length),
        n => println!("Repeats ({}+ bp): {} found", guidelines.repeat_min_length, n),
    }

    print_issues(&report.issues);

    Ok(())
}
