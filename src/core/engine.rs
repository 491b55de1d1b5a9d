use crate::core::{a1z26, binary, braille, caesar, morse, semaphore, ternary};
use crate::domain::model::{DecodeOutcome, DecodeRequest};
use crate::utils::error::Result;

/// Dispatch one decode request to its cipher operation.
pub fn run(request: &DecodeRequest) -> Result<DecodeOutcome> {
    tracing::debug!("Dispatching {} decode request", request.kind());

    let outcome = match request {
        DecodeRequest::Morse { text } => DecodeOutcome::Text {
            decoded: morse::decode(text),
        },
        DecodeRequest::Binary { text } => DecodeOutcome::Text {
            decoded: binary::decode(text)?,
        },
        DecodeRequest::A1z26 { text } => DecodeOutcome::Text {
            decoded: a1z26::decode(text)?,
        },
        DecodeRequest::Ternary { text } => DecodeOutcome::Text {
            decoded: ternary::decode(text)?,
        },
        DecodeRequest::CaesarAdditive { text, shift } => DecodeOutcome::Text {
            decoded: caesar::decode_additive(text, *shift),
        },
        DecodeRequest::CaesarSubtractive { text, shift } => DecodeOutcome::Text {
            decoded: caesar::decode_subtractive(text, *shift),
        },
        DecodeRequest::CaesarBruteForce { text } => DecodeOutcome::Candidates {
            candidates: caesar::brute_force(text),
        },
        DecodeRequest::Semaphore { selection } => DecodeOutcome::Semaphore {
            reading: semaphore::decode(selection),
        },
        DecodeRequest::Braille { cell } => DecodeOutcome::Braille {
            letter: braille::decode(cell),
        },
    };

    tracing::debug!("Decode completed for {} request", request.kind());
    Ok(outcome)
}
