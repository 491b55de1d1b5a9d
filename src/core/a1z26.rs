use crate::core::alphabet;
use crate::utils::error::{DecodeError, Result};

/// Decode space-separated decimal tokens (1 -> 'A' ... 26 -> 'Z'). Any token
/// containing a non-digit character becomes a literal space.
///
/// Digit values are NOT range-checked: "27" decodes to '[' through the +64
/// offset instead of '?'. Known gap, kept on purpose until the mapping is
/// revisited; see DESIGN.md. Overflowing or unmappable values surface as
/// the whole-input fault.
pub fn decode(text: &str) -> Result<String> {
    let mut decoded = String::new();
    for token in text.split_whitespace() {
        if token.bytes().all(|b| b.is_ascii_digit()) {
            let value: u32 = token.parse().map_err(|_| DecodeError::InvalidA1z26Input)?;
            let letter =
                alphabet::unchecked_letter(value).ok_or(DecodeError::InvalidA1z26Input)?;
            decoded.push(letter);
        } else {
            decoded.push(' ');
        }
    }
    Ok(decoded)
}
