use clap::Command;

use crate::common::dna_arg;

pub const DECODE_CMD: &str = "decode";

pub fn create_decode_cli() -> Command {
    Command::new(DECODE_CMD)
        .about("Decode a DNA sequence back into text.")
        .arg(dna_arg())
}
