use anyhow::Context;
use clap::Parser;

use cipher_decoder::utils::{logger, validation::Validate};
use cipher_decoder::{engine, CliConfig, DecodeOutcome, SemaphoreReading};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cipher-decoder CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Input validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let request = match config.to_request() {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("Could not build decode request: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    match engine::run(&request) {
        Ok(outcome) => {
            if config.json {
                let rendered =
                    serde_json::to_string_pretty(&outcome).context("serializing outcome")?;
                println!("{}", rendered);
            } else {
                render(&outcome);
            }
        }
        Err(e) => {
            tracing::error!("Decode failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn render(outcome: &DecodeOutcome) {
    match outcome {
        DecodeOutcome::Text { decoded } => println!("Decoded Output: {}", decoded),
        DecodeOutcome::Candidates { candidates } => {
            for candidate in candidates {
                println!("Shift {:>2} → {}", candidate.shift, candidate.text);
            }
        }
        DecodeOutcome::Semaphore { reading } => match reading {
            SemaphoreReading::AwaitingSelection => {
                println!("Please select exactly two flag positions.");
            }
            SemaphoreReading::Decoded { letter } => println!("Flags → {}", letter),
        },
        DecodeOutcome::Braille { letter } => println!("Braille → {}", letter),
    }
}
