use clap::Parser;

use cipher_decoder::config::Command;
use cipher_decoder::utils::validation::Validate;
use cipher_decoder::{CipherKind, CliConfig, DecodeRequest};

fn parse(args: &[&str]) -> CliConfig {
    CliConfig::try_parse_from(args).unwrap()
}

#[test]
fn test_parse_text_cipher_subcommands() {
    let config = parse(&["cipher-decoder", "morse", ".- -..."]);
    assert!(matches!(config.command, Command::Morse { .. }));
    assert!(config.validate().is_ok());
    assert_eq!(config.to_request().unwrap().kind(), CipherKind::Morse);

    let config = parse(&["cipher-decoder", "binary", "00001"]);
    assert_eq!(config.to_request().unwrap().kind(), CipherKind::Binary);

    let config = parse(&["cipher-decoder", "a1z26", "1 2 3"]);
    assert_eq!(config.to_request().unwrap().kind(), CipherKind::A1z26);

    let config = parse(&["cipher-decoder", "ternary", "001"]);
    assert_eq!(config.to_request().unwrap().kind(), CipherKind::Ternary);
}

#[test]
fn test_empty_input_rejected_before_decoding() {
    let config = parse(&["cipher-decoder", "morse", "   "]);
    assert!(config.validate().is_err());

    let config = parse(&["cipher-decoder", "caesar", ""]);
    assert!(config.validate().is_err());
}

#[test]
fn test_caesar_shift_modes() {
    let config = parse(&["cipher-decoder", "caesar", "ABC", "--shift", "1"]);
    assert!(config.validate().is_ok());
    assert!(matches!(
        config.to_request().unwrap(),
        DecodeRequest::CaesarAdditive { shift: 1, .. }
    ));

    let config = parse(&["cipher-decoder", "caesar", "BCD", "--shift", "1", "--reverse"]);
    assert!(matches!(
        config.to_request().unwrap(),
        DecodeRequest::CaesarSubtractive { shift: 1, .. }
    ));

    let config = parse(&["cipher-decoder", "caesar", "B", "--brute-force"]);
    assert!(config.validate().is_ok());
    assert!(matches!(
        config.to_request().unwrap(),
        DecodeRequest::CaesarBruteForce { .. }
    ));
}

#[test]
fn test_caesar_shift_slider_bounds() {
    let config = parse(&["cipher-decoder", "caesar", "ABC", "--shift", "26"]);
    assert!(config.validate().is_err());

    let config = parse(&["cipher-decoder", "caesar", "ABC", "--shift", "-25"]);
    assert!(config.validate().is_ok());
}

#[test]
fn test_caesar_shift_conflicts_with_brute_force() {
    let result = CliConfig::try_parse_from([
        "cipher-decoder",
        "caesar",
        "ABC",
        "--shift",
        "3",
        "--brute-force",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_semaphore_positions() {
    let config = parse(&["cipher-decoder", "semaphore", "--positions", "7,8"]);
    assert!(config.validate().is_ok());
    assert!(config.to_request().is_ok());

    // The blocked center cell is rejected at request construction.
    let config = parse(&["cipher-decoder", "semaphore", "--positions", "5,8"]);
    assert!(config.to_request().is_err());
}

#[test]
fn test_braille_dot_pattern() {
    let config = parse(&["cipher-decoder", "braille", "--dots", "100000"]);
    assert!(config.to_request().is_ok());

    let config = parse(&["cipher-decoder", "braille", "--dots", "10"]);
    assert!(config.to_request().is_err());
}

#[test]
fn test_global_flags() {
    let config = parse(&["cipher-decoder", "--json", "braille", "--dots", "100000"]);
    assert!(config.json);
    assert!(!config.verbose);

    let config = parse(&["cipher-decoder", "morse", ".-", "--verbose"]);
    assert!(config.verbose);
}
