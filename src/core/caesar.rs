use crate::domain::model::ShiftCandidate;

/// Rotate ASCII letters by `shift`, preserving case; everything else passes
/// through unchanged. Shift is normalized modulo 26, any sign or magnitude.
fn rotate(text: &str, shift: i32) -> String {
    let shift = shift.rem_euclid(26) as u8;
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                (((c as u8 - base + shift) % 26) + base) as char
            } else {
                c
            }
        })
        .collect()
}

/// "Known shift" convention: undo an encoding that added `shift`.
pub fn decode_subtractive(text: &str, shift: i32) -> String {
    rotate(text, -shift.rem_euclid(26))
}

/// "Assumed encoding shift" convention: apply `shift` forward. The two
/// conventions are deliberately separate operations; callers pick one.
pub fn decode_additive(text: &str, shift: i32) -> String {
    rotate(text, shift)
}

/// Apply the additive transform for every shift in 1..=25, ascending.
pub fn brute_force(text: &str) -> Vec<ShiftCandidate> {
    (1..=25u8)
        .map(|shift| ShiftCandidate {
            shift,
            text: decode_additive(text, i32::from(shift)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_wraps_and_preserves_case() {
        assert_eq!(rotate("xyz XYZ", 3), "abc ABC");
        assert_eq!(rotate("Hello, World!", 0), "Hello, World!");
    }

    #[test]
    fn test_shift_normalization() {
        assert_eq!(rotate("ABC", 27), rotate("ABC", 1));
        assert_eq!(rotate("ABC", -1), "ZAB");
    }
}
