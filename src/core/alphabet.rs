//! Shared numeric-value-to-letter mapping used by the token decoders.

/// Inline marker for a token that failed validation or lookup.
pub const UNKNOWN: char = '?';

/// Range-checked mapping: 1 -> 'A' ... 26 -> 'Z', anything else '?'.
pub fn checked_letter(value: u32) -> char {
    if (1..=26).contains(&value) {
        (b'@' + value as u8) as char
    } else {
        UNKNOWN
    }
}

/// Unchecked mapping kept for A1Z26 parity: the value is offset by 64 and
/// interpreted as a code point, so out-of-range values yield non-letters
/// (27 decodes to '[') rather than '?'. Returns None only when the offset
/// value is not a valid code point.
pub fn unchecked_letter(value: u32) -> Option<char> {
    value.checked_add(64).and_then(char::from_u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_letter_boundaries() {
        assert_eq!(checked_letter(1), 'A');
        assert_eq!(checked_letter(26), 'Z');
        assert_eq!(checked_letter(0), '?');
        assert_eq!(checked_letter(27), '?');
    }

    #[test]
    fn test_unchecked_letter_has_no_range_guard() {
        assert_eq!(unchecked_letter(1), Some('A'));
        assert_eq!(unchecked_letter(26), Some('Z'));
        assert_eq!(unchecked_letter(0), Some('@'));
        assert_eq!(unchecked_letter(27), Some('['));
        assert_eq!(unchecked_letter(u32::MAX), None);
    }
}
