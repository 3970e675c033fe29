use thiserror::Error;

#[derive(Error, Debug)]
pub enum DnaSequenceError {
    #[error("Invalid DNA base '{base}' at position {position}. Please use A, C, G, T only.")]
    InvalidBase { base: char, position: usize },
}
