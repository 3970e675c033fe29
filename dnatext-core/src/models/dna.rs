use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::DnaSequenceError;
use crate::models::Base;

///
/// A DNA string restricted to the alphabet `{A,C,G,T}`.
///
/// Sequences produced by the codec are always valid; this type exists for
/// DNA that comes from the outside (user input, files), where the symbols
/// have to be checked once before any analysis runs.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DnaSequence(String);

impl DnaSequence {
    ///
    /// Validate and normalize a raw DNA string. Surrounding whitespace is
    /// trimmed and lowercase bases are upper-cased.
    ///
    pub fn parse(raw: &str) -> Result<Self, DnaSequenceError> {
        let mut seq = String::with_capacity(raw.len());
        for (position, symbol) in raw.trim().chars().enumerate() {
            match Base::try_from(symbol) {
                Ok(base) => seq.push(base.as_char()),
                Err(base) => return Err(DnaSequenceError::InvalidBase { base, position }),
            }
        }
        Ok(DnaSequence(seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    ///
    /// Iterate over the bases of the sequence.
    ///
    pub fn bases(&self) -> impl Iterator<Item = Base> + '_ {
        // every byte was checked in `parse`
        self.0.bytes().filter_map(Base::from_byte)
    }
}

impl Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DnaSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for DnaSequence {
    type Err = DnaSequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DnaSequence::parse(s)
    }
}

impl TryFrom<&str> for DnaSequence {
    type Error = DnaSequenceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        DnaSequence::parse(value)
    }
}

impl TryFrom<String> for DnaSequence {
    type Error = DnaSequenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DnaSequence::parse(&value)
    }
}
