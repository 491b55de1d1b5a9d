use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{DecodeError, Result};

/// The supported cipher schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherKind {
    Morse,
    Binary,
    A1z26,
    Ternary,
    Caesar,
    Semaphore,
    Braille,
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherKind::Morse => "morse",
            CipherKind::Binary => "binary",
            CipherKind::A1z26 => "a1z26",
            CipherKind::Ternary => "ternary",
            CipherKind::Caesar => "caesar",
            CipherKind::Semaphore => "semaphore",
            CipherKind::Braille => "braille",
        };
        write!(f, "{}", name)
    }
}

/// One complete decode invocation, input included. The engine matches on the
/// variant instead of branching on a cipher-name string.
#[derive(Debug, Clone)]
pub enum DecodeRequest {
    Morse { text: String },
    Binary { text: String },
    A1z26 { text: String },
    Ternary { text: String },
    CaesarAdditive { text: String, shift: i32 },
    CaesarSubtractive { text: String, shift: i32 },
    CaesarBruteForce { text: String },
    Semaphore { selection: SemaphoreSelection },
    Braille { cell: BrailleCell },
}

impl DecodeRequest {
    pub fn kind(&self) -> CipherKind {
        match self {
            DecodeRequest::Morse { .. } => CipherKind::Morse,
            DecodeRequest::Binary { .. } => CipherKind::Binary,
            DecodeRequest::A1z26 { .. } => CipherKind::A1z26,
            DecodeRequest::Ternary { .. } => CipherKind::Ternary,
            DecodeRequest::CaesarAdditive { .. }
            | DecodeRequest::CaesarSubtractive { .. }
            | DecodeRequest::CaesarBruteForce { .. } => CipherKind::Caesar,
            DecodeRequest::Semaphore { .. } => CipherKind::Semaphore,
            DecodeRequest::Braille { .. } => CipherKind::Braille,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DecodeOutcome {
    /// Decoded text, possibly containing '?' markers for unknown tokens.
    Text { decoded: String },
    /// All 25 brute-force Caesar candidates, ascending by shift.
    Candidates { candidates: Vec<ShiftCandidate> },
    Semaphore { reading: SemaphoreReading },
    Braille { letter: char },
}

/// One brute-force Caesar row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftCandidate {
    pub shift: u8,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SemaphoreReading {
    /// Fewer or more than two positions are active; not an error.
    AwaitingSelection,
    Decoded { letter: char },
}

/// Flag-grid selection state, passed into each semaphore decode call.
/// Reset is `SemaphoreSelection::default()` rather than any in-place
/// clearing of shared state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemaphoreSelection {
    active: BTreeSet<u8>,
}

impl SemaphoreSelection {
    /// The eight selectable grid cells. Position 5 is the blocked center.
    pub const VALID_POSITIONS: [u8; 8] = [1, 2, 3, 4, 6, 7, 8, 9];

    pub fn from_positions<I>(positions: I) -> Result<Self>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut selection = Self::default();
        for position in positions {
            selection.toggle(position)?;
        }
        Ok(selection)
    }

    /// Flip one grid cell on or off.
    pub fn toggle(&mut self, position: u8) -> Result<()> {
        if !Self::VALID_POSITIONS.contains(&position) {
            return Err(DecodeError::InvalidFlagPosition { position });
        }
        if !self.active.remove(&position) {
            self.active.insert(position);
        }
        Ok(())
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Active positions in ascending order; the canonical pair key.
    pub fn positions(&self) -> Vec<u8> {
        self.active.iter().copied().collect()
    }
}

/// One Braille cell: six dots in fixed row-major order
/// (r1c1, r1c2, r2c1, r2c2, r3c1, r3c2). Default is all flat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrailleCell {
    dots: [bool; 6],
}

impl BrailleCell {
    pub fn new(dots: [bool; 6]) -> Self {
        Self { dots }
    }

    /// Canonical table key: '1' for raised, '0' for flat.
    pub fn bit_string(&self) -> String {
        self.dots
            .iter()
            .map(|&raised| if raised { '1' } else { '0' })
            .collect()
    }
}

impl FromStr for BrailleCell {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        let cells: Vec<char> = s.chars().collect();
        if cells.len() != 6 {
            return Err(DecodeError::InvalidDotPattern {
                pattern: s.to_string(),
            });
        }
        let mut dots = [false; 6];
        for (slot, cell) in dots.iter_mut().zip(cells) {
            *slot = match cell {
                '1' => true,
                '0' => false,
                _ => {
                    return Err(DecodeError::InvalidDotPattern {
                        pattern: s.to_string(),
                    })
                }
            };
        }
        Ok(Self { dots })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_reversible() {
        let mut selection = SemaphoreSelection::default();
        selection.toggle(7).unwrap();
        assert_eq!(selection.active_count(), 1);
        selection.toggle(7).unwrap();
        assert_eq!(selection.active_count(), 0);
    }

    #[test]
    fn test_center_position_rejected() {
        let mut selection = SemaphoreSelection::default();
        assert!(selection.toggle(5).is_err());
        assert!(selection.toggle(0).is_err());
        assert!(selection.toggle(10).is_err());
    }

    #[test]
    fn test_positions_are_sorted() {
        let selection = SemaphoreSelection::from_positions([8, 7]).unwrap();
        assert_eq!(selection.positions(), vec![7, 8]);
    }

    #[test]
    fn test_braille_cell_bit_string() {
        let cell = BrailleCell::new([true, false, true, false, false, false]);
        assert_eq!(cell.bit_string(), "101000");
        assert_eq!(BrailleCell::default().bit_string(), "000000");
    }

    #[test]
    fn test_braille_cell_from_str() {
        let cell: BrailleCell = "100000".parse().unwrap();
        assert_eq!(cell, BrailleCell::new([true, false, false, false, false, false]));
        assert!("10000".parse::<BrailleCell>().is_err());
        assert!("1000000".parse::<BrailleCell>().is_err());
        assert!("10200x".parse::<BrailleCell>().is_err());
    }
}
