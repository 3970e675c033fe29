//! Bit string to nucleotides and back, two bits per base.

use crate::consts::BITS_PER_BASE;

/// Marks a byte that is not one of the four bases.
const NOT_A_BASE: u8 = 0xFF;

/// Maps an uppercase base to its 2-bit code: A=00, C=01, G=10, T=11.
/// Every other byte maps to [NOT_A_BASE].
const BASE_ENCODING_ARRAY: [u8; 256] = {
    let mut arr = [NOT_A_BASE; 256];
    arr[b'A' as usize] = 0b00;
    arr[b'C' as usize] = 0b01;
    arr[b'G' as usize] = 0b10;
    arr[b'T' as usize] = 0b11;
    arr
};

/// Reverse lookup: 2-bit value → base.
const BASE_DECODING_ARRAY: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Reverse lookup: 2-bit value → bit pair as text.
const BIT_PAIRS: [&str; 4] = ["00", "01", "10", "11"];

///
/// Convert a bit string into a DNA string.
///
/// Bits are read in pairs: 00→A, 01→C, 10→G, 11→T. A dangling final bit
/// is dropped, and a pair containing anything other than `0`/`1`
/// contributes nothing.
///
pub fn binary_to_dna(binary: &str) -> String {
    let bits: Vec<char> = binary.chars().collect();
    let mut dna = String::with_capacity(bits.len() / BITS_PER_BASE);
    for pair in bits.chunks_exact(BITS_PER_BASE) {
        if let Some(code) = pair_code(pair[0], pair[1]) {
            dna.push(BASE_DECODING_ARRAY[code as usize] as char);
        }
    }
    dna
}

///
/// Convert a DNA string back into a bit string. Symbols other than
/// `A`, `C`, `G`, `T` are skipped.
///
pub fn dna_to_binary(dna: &str) -> String {
    let mut binary = String::with_capacity(dna.len() * BITS_PER_BASE);
    for byte in dna.bytes() {
        let code = BASE_ENCODING_ARRAY[byte as usize];
        if code != NOT_A_BASE {
            binary.push_str(BIT_PAIRS[code as usize]);
        }
    }
    binary
}

fn pair_code(high: char, low: char) -> Option<u8> {
    let bit = |b: char| match b {
        '0' => Some(0u8),
        '1' => Some(1u8),
        _ => None,
    };
    Some((bit(high)? << 1) | bit(low)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("00", "A")]
    #[case("01", "C")]
    #[case("10", "G")]
    #[case("11", "T")]
    #[case("01000001", "CAAC")]
    #[case("", "")]
    fn test_binary_to_dna(#[case] binary: &str, #[case] expected: &str) {
        assert_eq!(binary_to_dna(binary), expected);
    }

    #[rstest]
    fn test_odd_trailing_bit_is_dropped() {
        assert_eq!(binary_to_dna("011"), "C");
        assert_eq!(binary_to_dna("1"), "");
    }

    #[rstest]
    fn test_malformed_pair_contributes_nothing() {
        assert_eq!(binary_to_dna("01x011"), "CT");
    }

    #[rstest]
    #[case("é00111", "CT")]
    #[case("01é", "C")]
    #[case("ñ1", "")]
    fn test_binary_to_dna_pairs_by_character(#[case] binary: &str, #[case] expected: &str) {
        assert_eq!(binary_to_dna(binary), expected);
    }

    #[rstest]
    fn test_dna_to_binary_skips_unknown_symbols() {
        assert_eq!(dna_to_binary("CANAC"), "01000001");
        assert_eq!(dna_to_binary("acgt"), "");
    }

    #[rstest]
    #[case("0110110001")]
    #[case("00011011")]
    fn test_round_trip_even_length(#[case] binary: &str) {
        assert_eq!(dna_to_binary(&binary_to_dna(binary)), binary);
    }

    #[rstest]
    fn test_round_trip_odd_length_loses_last_bit() {
        assert_eq!(dna_to_binary(&binary_to_dna("10101")), "1010");
    }
}
