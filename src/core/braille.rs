use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::core::alphabet;
use crate::domain::model::BrailleCell;

/// A-Z dot patterns keyed by the row-major bit string of the cell.
static BRAILLE_TABLE: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
    HashMap::from([
        ("100000", 'A'),
        ("101000", 'B'),
        ("110000", 'C'),
        ("110100", 'D'),
        ("100100", 'E'),
        ("111000", 'F'),
        ("111100", 'G'),
        ("101100", 'H'),
        ("011000", 'I'),
        ("011100", 'J'),
        ("100010", 'K'),
        ("101010", 'L'),
        ("110010", 'M'),
        ("110110", 'N'),
        ("100110", 'O'),
        ("111010", 'P'),
        ("111110", 'Q'),
        ("101110", 'R'),
        ("011010", 'S'),
        ("011110", 'T'),
        ("100011", 'U'),
        ("101011", 'V'),
        ("011101", 'W'),
        ("110011", 'X'),
        ("110111", 'Y'),
        ("100111", 'Z'),
    ])
});

/// Decode one 6-dot cell. Patterns outside the 26 letter shapes, including
/// the all-flat cell, come back as '?'. Total: there is no incomplete state,
/// every dot always holds a value.
pub fn decode(cell: &BrailleCell) -> char {
    BRAILLE_TABLE
        .get(cell.bit_string().as_str())
        .copied()
        .unwrap_or(alphabet::UNKNOWN)
}
