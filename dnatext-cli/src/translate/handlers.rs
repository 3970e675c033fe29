use anyhow::Result;
use clap::ArgMatches;

use dnatext_codec::dna_to_amino_acids;

use crate::common::dna_from_matches;

pub fn run_translate(matches: &ArgMatches) -> Result<()> {
    let dna = dna_from_matches(matches)?;
    println!("{}", dna_to_amino_acids(dna.as_str()));
    Ok(())
}
