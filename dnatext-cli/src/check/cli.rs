use clap::Command;

use crate::common::{config_arg, dna_arg, json_arg};

pub const CHECK_CMD: &str = "check";

pub fn create_check_cli() -> Command {
    Command::new(CHECK_CMD)
        .about("Check a DNA sequence against synthesis guidelines.")
        .arg(dna_arg())
        .arg(config_arg())
        .arg(json_arg())
}
