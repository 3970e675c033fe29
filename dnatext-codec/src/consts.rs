/// Bits used to encode one character of text.
pub const BITS_PER_CHAR: usize = 8;
/// Bits carried by one nucleotide.
pub const BITS_PER_BASE: usize = 2;
/// Nucleotides produced per character of text.
pub const BASES_PER_CHAR: usize = BITS_PER_CHAR / BITS_PER_BASE;
/// Bases per codon.
pub const CODON_LENGTH: usize = 3;

/// Symbol the codon table uses for stop codons.
pub const STOP_SYMBOL: char = '*';
/// Symbol emitted for a codon containing anything outside `{A,C,G,T}`.
pub const UNKNOWN_AMINO_ACID: char = 'X';
