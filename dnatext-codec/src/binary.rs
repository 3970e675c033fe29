//! Text to bit string and back, eight bits per character.
//!
//! Each character is written as the big-endian binary form of its code
//! point, zero-padded to eight digits. Only the low eight bits of a code
//! point are kept, so characters at or above U+0100 do not survive a round
//! trip. That is a known limitation of the scheme, not an error.

use crate::consts::BITS_PER_CHAR;

///
/// Convert text into a string of `0`/`1` characters.
///
pub fn text_to_binary(text: &str) -> String {
    let mut binary = String::with_capacity(text.chars().count() * BITS_PER_CHAR);
    for c in text.chars() {
        let byte = (c as u32 & 0xFF) as u8;
        binary.push_str(&format!("{:08b}", byte));
    }
    binary
}

///
/// Convert a bit string back into text.
///
/// The input is padded on the right with `0` up to a multiple of eight
/// bits. Every 8-bit group becomes the character with that code point;
/// groups containing anything other than `0` or `1` are skipped.
///
pub fn binary_to_text(binary: &str) -> String {
    let mut bits: Vec<char> = binary.chars().collect();
    let remainder = bits.len() % BITS_PER_CHAR;
    if remainder != 0 {
        bits.resize(bits.len() + BITS_PER_CHAR - remainder, '0');
    }

    bits.chunks(BITS_PER_CHAR)
        .filter_map(parse_byte)
        .map(char::from)
        .collect()
}

fn parse_byte(group: &[char]) -> Option<u8> {
    group.iter().try_fold(0u8, |acc, bit| match bit {
        '0' => Some(acc << 1),
        '1' => Some((acc << 1) | 1),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("A", "01000001")]
    #[case("Hi", "0100100001101001")]
    #[case("", "")]
    #[case("\u{0}", "00000000")]
    #[case("ÿ", "11111111")]
    fn test_text_to_binary(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(text_to_binary(text), expected);
    }

    #[rstest]
    #[case("Hello, World!")]
    #[case("latin-1: café ñ ü")]
    #[case("tabs\tand\nnewlines")]
    fn test_round_trip_below_256(#[case] text: &str) {
        assert_eq!(binary_to_text(&text_to_binary(text)), text);
    }

    #[rstest]
    fn test_binary_to_text_pads_right() {
        // "0100" -> "01000000" -> '@'
        assert_eq!(binary_to_text("0100"), "@");
    }

    #[rstest]
    fn test_binary_to_text_empty() {
        assert_eq!(binary_to_text(""), "");
    }

    #[rstest]
    fn test_binary_to_text_skips_malformed_groups() {
        assert_eq!(binary_to_text("0100000x01000010"), "B");
    }

    #[rstest]
    #[case("é010000101000010", "B")]
    #[case("01000010€", "B")]
    #[case("€", "")]
    fn test_binary_to_text_groups_by_character(#[case] binary: &str, #[case] expected: &str) {
        // a multi-byte symbol fills one bit slot, not several
        assert_eq!(binary_to_text(binary), expected);
    }

    // Known limitation: code points >= 256 are truncated to their low byte.
    #[rstest]
    fn test_wide_code_points_are_truncated() {
        // U+0141 (Ł) keeps only 0x41
        assert_eq!(text_to_binary("Ł"), "01000001");
        assert_eq!(binary_to_text(&text_to_binary("Ł")), "A");
    }
}
