use clap::Command;

use crate::common::dna_arg;

pub const TRANSLATE_CMD: &str = "translate";

pub fn create_translate_cli() -> Command {
    Command::new(TRANSLATE_CMD)
        .about("Translate a DNA sequence to amino acids (stop codons are dropped).")
        .arg(dna_arg())
}
