//! Synthesis-guideline analysis for DNA sequences.
//!
//! This crate scores a DNA string against the kind of heuristics DNA
//! synthesis providers publish:
//!
//! - minimum length
//! - overall GC content and its variation across 50 bp windows
//! - exact repeats of 20 bp or more
//! - homopolymer runs of 5 bases or more
//!
//! All thresholds live in [`SynthesisGuidelines`], which can be loaded
//! from a TOML, YAML or JSON file.
//!
//! # Example
//!
//! ```
//! use dnatext_synth::{SynthesisGuidelines, check_guidelines};
//!
//! let issues = check_guidelines("CAAC", &SynthesisGuidelines::default());
//! assert_eq!(issues.len(), 1); // too short
//! ```

pub mod config;
pub mod consts;
pub mod errors;
pub mod guidelines;
pub mod models;
pub mod report;
pub mod statistics;

// re-exports
pub use config::SynthesisGuidelines;
pub use errors::GuidelineConfigError;
pub use guidelines::{analyze, check_guidelines, suggestions};
pub use models::{AnalysisReport, Homopolymer, Repeat};
pub use report::EncodingReport;
pub use statistics::{
    SequenceStatistics, calc_gc_content, calc_gc_variation, find_homopolymers, find_repeats,
};
