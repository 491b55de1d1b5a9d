use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::core::alphabet;
use crate::domain::model::{SemaphoreReading, SemaphoreSelection};

/// All 28 unordered pairs of the 8 selectable grid positions, keyed in
/// ascending order: 26 letters plus the numeric sign '#' at (1, 9) and the
/// annul sign '/' at (2, 3).
static SEMAPHORE_TABLE: Lazy<HashMap<(u8, u8), char>> = Lazy::new(|| {
    HashMap::from([
        ((7, 8), 'A'),
        ((4, 8), 'B'),
        ((1, 8), 'C'),
        ((2, 8), 'D'),
        ((3, 8), 'E'),
        ((6, 8), 'F'),
        ((8, 9), 'G'),
        ((4, 7), 'H'),
        ((1, 7), 'I'),
        ((2, 6), 'J'),
        ((2, 7), 'K'),
        ((3, 7), 'L'),
        ((6, 7), 'M'),
        ((7, 9), 'N'),
        ((1, 4), 'O'),
        ((2, 4), 'P'),
        ((3, 4), 'Q'),
        ((4, 6), 'R'),
        ((4, 9), 'S'),
        ((1, 2), 'T'),
        ((1, 3), 'U'),
        ((2, 9), 'V'),
        ((3, 6), 'W'),
        ((3, 9), 'X'),
        ((1, 6), 'Y'),
        ((6, 9), 'Z'),
        ((1, 9), '#'),
        ((2, 3), '/'),
    ])
});

/// Read the current flag selection. Anything other than exactly two active
/// positions is the awaiting-input state, not an error.
pub fn decode(selection: &SemaphoreSelection) -> SemaphoreReading {
    let positions = selection.positions();
    if positions.len() != 2 {
        return SemaphoreReading::AwaitingSelection;
    }
    let pair = (positions[0], positions[1]);
    let letter = SEMAPHORE_TABLE
        .get(&pair)
        .copied()
        .unwrap_or(alphabet::UNKNOWN);
    SemaphoreReading::Decoded { letter }
}
