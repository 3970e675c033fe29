use std::fmt::{self, Display};

///
/// One of the four nucleotides. The discriminant is the 2-bit code
/// used by the text codec (A=00, C=01, G=10, T=11).
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Base {
    A = 0b00,
    C = 0b01,
    G = 0b10,
    T = 0b11,
}

impl Base {
    /// All bases in code order.
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    ///
    /// Parse a single byte into a base. Lowercase input is accepted.
    ///
    pub fn from_byte(byte: u8) -> Option<Base> {
        match byte.to_ascii_uppercase() {
            b'A' => Some(Base::A),
            b'C' => Some(Base::C),
            b'G' => Some(Base::G),
            b'T' => Some(Base::T),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Base::A => b'A',
            Base::C => b'C',
            Base::G => b'G',
            Base::T => b'T',
        }
    }

    pub fn as_char(self) -> char {
        self.as_byte() as char
    }

    /// The 2-bit code of this base.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_gc(self) -> bool {
        matches!(self, Base::G | Base::C)
    }
}

impl Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Base {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        if value.is_ascii() {
            Base::from_byte(value as u8).ok_or(value)
        } else {
            Err(value)
        }
    }
}
