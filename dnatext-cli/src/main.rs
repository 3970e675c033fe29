mod check;
mod common;
mod decode;
mod encode;
mod logging;
mod translate;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "dnatext";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Encode text as DNA, translate it to protein, and check it against synthesis guidelines.")
        .subcommand_required(true)
        .subcommand(encode::cli::create_encode_cli())
        .subcommand(decode::cli::create_decode_cli())
        .subcommand(translate::cli::create_translate_cli())
        .subcommand(check::cli::create_check_cli())
}

fn main() -> Result<()> {
    logging::init_logging();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // ENCODE
        //
        Some((encode::cli::ENCODE_CMD, matches)) => {
            encode::handlers::run_encode(matches)?;
        }

        //
        // DECODE
        //
        Some((decode::cli::DECODE_CMD, matches)) => {
            decode::handlers::run_decode(matches)?;
        }

        //
        // TRANSLATE
        //
        Some((translate::cli::TRANSLATE_CMD, matches)) => {
            translate::handlers::run_translate(matches)?;
        }

        //
        // CHECK
        //
        Some((check::cli::CHECK_CMD, matches)) => {
            check::handlers::run_check(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn test_parser_is_well_formed() {
        build_parser().debug_assert();
    }

    #[rstest]
    #[case(&["dnatext", "encode", "Hello"])]
    #[case(&["dnatext", "encode", "--file", "input.txt", "--json"])]
    #[case(&["dnatext", "decode", "CAAC"])]
    #[case(&["dnatext", "translate", "CAAC"])]
    #[case(&["dnatext", "check", "CAAC", "--config", "guidelines.toml"])]
    fn test_parser_accepts_subcommands(#[case] args: &[&str]) {
        assert!(build_parser().try_get_matches_from(args).is_ok());
    }

    #[rstest]
    fn test_parser_requires_subcommand() {
        assert!(build_parser().try_get_matches_from(["dnatext"]).is_err());
    }
}
