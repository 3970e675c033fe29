use anyhow::Result;
use clap::ArgMatches;

use dnatext_codec::dna_to_text;

use crate::common::dna_from_matches;

pub fn run_decode(matches: &ArgMatches) -> Result<()> {
    let dna = dna_from_matches(matches)?;
    let text = dna_to_text(dna.as_str());

    if text.is_empty() {
        println!("[No readable text found]");
    } else {
        println!("{}", text);
    }

    Ok(())
}
