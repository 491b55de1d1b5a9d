pub mod a1z26;
pub mod alphabet;
pub mod binary;
pub mod braille;
pub mod caesar;
pub mod engine;
pub mod morse;
pub mod semaphore;
pub mod ternary;

pub use crate::domain::model::{DecodeOutcome, DecodeRequest};
pub use crate::utils::error::Result;
