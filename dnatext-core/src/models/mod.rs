pub mod base;
pub mod dna;

// re-export for cleaner imports
pub use self::base::Base;
pub use self::dna::DnaSequence;
