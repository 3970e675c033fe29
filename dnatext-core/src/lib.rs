//! Core types shared across the dnatext crates.
//!
//! - [`models::Base`]: the four nucleotides and their 2-bit codes
//! - [`models::DnaSequence`]: a DNA string validated against `{A,C,G,T}`
//! - [`utils`]: helpers for reading text input from files, gzip'd files or stdin

pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::DnaSequenceError;
pub use models::{Base, DnaSequence};
