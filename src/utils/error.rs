use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid binary input (expect space-separated 5-digit binary numbers for A-Z).")]
    InvalidBinaryInput,

    #[error("Invalid A1Z26 input.")]
    InvalidA1z26Input,

    #[error("Invalid ternary input (use space-separated 3-digit base-3 numbers for A-Z).")]
    InvalidTernaryInput,

    #[error("Flag position {position} is not selectable (valid positions are 1-9, excluding 5)")]
    InvalidFlagPosition { position: u8 },

    #[error("Dot pattern must be six '0'/'1' cells in row-major order, got '{pattern}'")]
    InvalidDotPattern { pattern: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidInputValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
