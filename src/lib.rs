pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::engine;
pub use domain::model::{
    BrailleCell, CipherKind, DecodeOutcome, DecodeRequest, SemaphoreReading, SemaphoreSelection,
    ShiftCandidate,
};
pub use utils::error::{DecodeError, Result};
