use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, arg};
use log::info;

use dnatext_core::DnaSequence;
use dnatext_synth::SynthesisGuidelines;

pub const CONFIG_ARG: &str = "config";
pub const JSON_ARG: &str = "json";
pub const DNA_ARG: &str = "dna";

pub fn config_arg() -> Arg {
    arg!(--config <config>)
        .help("Guideline thresholds as a .toml, .yaml/.yml or .json file (defaults are used otherwise)")
}

pub fn json_arg() -> Arg {
    arg!(--json)
        .help("Print the result as JSON")
        .action(ArgAction::SetTrue)
}

pub fn dna_arg() -> Arg {
    Arg::new(DNA_ARG)
        .help("DNA sequence (A, C, G, T only; case-insensitive)")
        .required(true)
}

///
/// Load guidelines from `--config`, or fall back to the defaults.
///
pub fn load_guidelines(matches: &ArgMatches) -> Result<SynthesisGuidelines> {
    match matches.get_one::<String>(CONFIG_ARG) {
        Some(path) => {
            let guidelines = SynthesisGuidelines::try_from(Path::new(path))
                .with_context(|| format!("Failed to load guideline config: {}", path))?;
            Ok(guidelines)
        }
        None => {
            info!("Using default synthesis guidelines");
            Ok(SynthesisGuidelines::default())
        }
    }
}

///
/// Parse and validate the positional DNA argument.
///
pub fn dna_from_matches(matches: &ArgMatches) -> Result<DnaSequence> {
    let raw = matches
        .get_one::<String>(DNA_ARG)
        .expect("A DNA sequence is required.");

    let dna = DnaSequence::parse(raw)?;
    if dna.is_empty() {
        anyhow::bail!("No DNA sequence provided");
    }
    Ok(dna)
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_issues(issues: &[String]) {
    if issues.is_empty() {
        println!("\nThis sequence meets all synthesis guidelines.");
    } else {
        println!("\nThis sequence may not be suitable for synthesis:");
        for issue in issues {
            println!("- {}", issue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Command;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::tempdir;

    fn test_command() -> Command {
        Command::new("test").arg(dna_arg()).arg(config_arg()).arg(json_arg())
    }

    #[rstest]
    fn test_dna_is_normalized() {
        let matches = test_command().get_matches_from(["test", "caac"]);
        let dna = dna_from_matches(&matches).unwrap();
        assert_eq!(dna.as_str(), "CAAC");
    }

    #[rstest]
    fn test_empty_dna_is_rejected() {
        let matches = test_command().get_matches_from(["test", "  "]);
        let err = dna_from_matches(&matches).unwrap_err();
        assert_eq!(err.to_string(), "No DNA sequence provided");
    }

    #[rstest]
    fn test_invalid_dna_is_rejected() {
        let matches = test_command().get_matches_from(["test", "ACGU"]);
        assert!(dna_from_matches(&matches).is_err());
    }

    #[rstest]
    fn test_default_guidelines_without_config() {
        let matches = test_command().get_matches_from(["test", "ACGT"]);
        let guidelines = load_guidelines(&matches).unwrap();
        assert_eq!(guidelines, SynthesisGuidelines::default());
        assert!(!matches.get_flag(JSON_ARG));
    }

    #[rstest]
    fn test_guidelines_from_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("guidelines.toml");
        std::fs::write(&path, "min_length = 8\n").unwrap();

        let matches = test_command().get_matches_from([
            "test",
            "ACGT",
            "--config",
            path.to_str().unwrap(),
            "--json",
        ]);
        let guidelines = load_guidelines(&matches).unwrap();
        assert_eq!(guidelines.min_length, 8);
        assert!(matches.get_flag(JSON_ARG));
    }

    #[rstest]
    fn test_bad_config_extension_is_an_error() {
        let matches =
            test_command().get_matches_from(["test", "ACGT", "--config", "guidelines.ini"]);
        assert!(load_guidelines(&matches).is_err());
    }
}
