use crate::core::alphabet;
use crate::utils::error::{DecodeError, Result};

const TOKEN_WIDTH: usize = 5;

/// Decode space-separated 5-digit binary tokens into A-Z.
///
/// Per-token problems (wrong width, stray characters, values outside the
/// 1..=26 letter range) render as '?' without aborting the pass; only a
/// parse fault fails the whole input.
pub fn decode(text: &str) -> Result<String> {
    let mut decoded = String::new();
    for token in text.split_whitespace() {
        if token.len() != TOKEN_WIDTH || !token.bytes().all(|b| matches!(b, b'0' | b'1')) {
            decoded.push(alphabet::UNKNOWN);
            continue;
        }
        let value =
            u32::from_str_radix(token, 2).map_err(|_| DecodeError::InvalidBinaryInput)?;
        decoded.push(alphabet::checked_letter(value));
    }
    Ok(decoded)
}
