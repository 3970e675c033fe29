use clap::{Arg, Command, arg};

use crate::common::{config_arg, json_arg};

pub const ENCODE_CMD: &str = "encode";
pub const TEXT_ARG: &str = "text";
pub const FILE_ARG: &str = "file";

pub fn create_encode_cli() -> Command {
    Command::new(ENCODE_CMD)
        .about("Encode text as DNA, translate it, and check the DNA against synthesis guidelines.")
        .arg(
            Arg::new(TEXT_ARG)
                .help("Text to encode")
                .conflicts_with(FILE_ARG),
        )
        .arg(arg!(--file <file>).help("Read the text from a file (.gz is decompressed, - is stdin)"))
        .arg(config_arg())
        .arg(json_arg())
}
