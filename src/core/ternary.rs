use crate::core::alphabet;
use crate::utils::error::{DecodeError, Result};

const TOKEN_WIDTH: usize = 3;

/// Decode space-separated 3-digit base-3 tokens into A-Z.
///
/// Same per-token policy as the binary decoder: wrong width, stray
/// characters, or values outside 1..=26 render as '?'.
pub fn decode(text: &str) -> Result<String> {
    let mut decoded = String::new();
    for token in text.split_whitespace() {
        if token.len() != TOKEN_WIDTH || !token.bytes().all(|b| matches!(b, b'0'..=b'2')) {
            decoded.push(alphabet::UNKNOWN);
            continue;
        }
        let value =
            u32::from_str_radix(token, 3).map_err(|_| DecodeError::InvalidTernaryInput)?;
        decoded.push(alphabet::checked_letter(value));
    }
    Ok(decoded)
}
