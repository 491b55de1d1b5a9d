use clap::{Parser, Subcommand};

use crate::domain::model::{DecodeRequest, SemaphoreSelection};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_input, validate_shift_range, Validate};

#[derive(Debug, Parser)]
#[command(name = "cipher-decoder")]
#[command(about = "Decode classical puzzle ciphers from the command line")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print the outcome as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode space-separated Morse tokens (dots and dashes)
    Morse {
        // Morse input routinely starts with a dash.
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Decode space-separated 5-digit binary tokens
    Binary { text: String },

    /// Decode space-separated A1Z26 number tokens
    A1z26 { text: String },

    /// Decode space-separated 3-digit base-3 tokens
    Ternary { text: String },

    /// Shift-decode text, or list all 25 candidate shifts
    Caesar {
        text: String,

        #[arg(
            long,
            default_value = "0",
            allow_negative_numbers = true,
            conflicts_with = "brute_force"
        )]
        shift: i32,

        #[arg(long, help = "Try every shift from 1 to 25")]
        brute_force: bool,

        #[arg(long, help = "Subtract the shift instead of adding it")]
        reverse: bool,
    },

    /// Decode a two-flag grid selection (positions 1-9, center excluded)
    Semaphore {
        #[arg(long, value_delimiter = ',', required = true)]
        positions: Vec<u8>,
    },

    /// Decode a six-dot Braille cell given as a row-major 0/1 pattern
    Braille {
        #[arg(long)]
        dots: String,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Morse { text }
            | Command::Binary { text }
            | Command::A1z26 { text }
            | Command::Ternary { text } => validate_non_empty_input("text", text),
            Command::Caesar {
                text,
                shift,
                brute_force,
                ..
            } => {
                validate_non_empty_input("text", text)?;
                if !brute_force {
                    validate_shift_range("shift", *shift)?;
                }
                Ok(())
            }
            // A wrong position count is the engine's awaiting-input state,
            // not a CLI error; dot patterns are checked during conversion.
            Command::Semaphore { .. } | Command::Braille { .. } => Ok(()),
        }
    }
}

impl CliConfig {
    /// Build the engine request for the selected cipher.
    pub fn to_request(&self) -> Result<DecodeRequest> {
        let request = match &self.command {
            Command::Morse { text } => DecodeRequest::Morse { text: text.clone() },
            Command::Binary { text } => DecodeRequest::Binary { text: text.clone() },
            Command::A1z26 { text } => DecodeRequest::A1z26 { text: text.clone() },
            Command::Ternary { text } => DecodeRequest::Ternary { text: text.clone() },
            Command::Caesar {
                text,
                shift,
                brute_force,
                reverse,
            } => {
                if *brute_force {
                    DecodeRequest::CaesarBruteForce { text: text.clone() }
                } else if *reverse {
                    DecodeRequest::CaesarSubtractive {
                        text: text.clone(),
                        shift: *shift,
                    }
                } else {
                    DecodeRequest::CaesarAdditive {
                        text: text.clone(),
                        shift: *shift,
                    }
                }
            }
            Command::Semaphore { positions } => DecodeRequest::Semaphore {
                selection: SemaphoreSelection::from_positions(positions.iter().copied())?,
            },
            Command::Braille { dots } => DecodeRequest::Braille { cell: dots.parse()? },
        };
        Ok(request)
    }
}
