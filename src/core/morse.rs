use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::core::alphabet;

static MORSE_TABLE: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
    HashMap::from([
        (".-", 'A'),
        ("-...", 'B'),
        ("-.-.", 'C'),
        ("-..", 'D'),
        (".", 'E'),
        ("..-.", 'F'),
        ("--.", 'G'),
        ("....", 'H'),
        ("..", 'I'),
        (".---", 'J'),
        ("-.-", 'K'),
        (".-..", 'L'),
        ("--", 'M'),
        ("-.", 'N'),
        ("---", 'O'),
        (".--.", 'P'),
        ("--.-", 'Q'),
        (".-.", 'R'),
        ("...", 'S'),
        ("-", 'T'),
        ("..-", 'U'),
        ("...-", 'V'),
        (".--", 'W'),
        ("-..-", 'X'),
        ("-.--", 'Y'),
        ("--..", 'Z'),
        ("-----", '0'),
        (".----", '1'),
        ("..---", '2'),
        ("...--", '3'),
        ("....-", '4'),
        (".....", '5'),
        ("-....", '6'),
        ("--...", '7'),
        ("---..", '8'),
        ("----.", '9'),
    ])
});

/// Decode space-separated dot/dash tokens. Unknown tokens render inline as
/// '?'; the pass never fails, and whitespace-only input decodes to "".
pub fn decode(text: &str) -> String {
    text.split_whitespace()
        .map(|token| MORSE_TABLE.get(token).copied().unwrap_or(alphabet::UNKNOWN))
        .collect()
}
