//! Check command implementation

use std::process::ExitCode;

use crate::parser::parse_command_tokens;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the check command: parse every token, report structure or the
/// first error, render nothing.
pub fn run_check(tokens: &[String], json: bool) -> ExitCode {
    let hands = match parse_command_tokens(tokens) {
        Ok(hands) => hands,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if json {
        match serde_json::to_string_pretty(&hands) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: failed to serialize hands: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        for (index, hand) in hands.iter().enumerate() {
            println!(
                "hand {}: {} tiles in {} groups, style {:?}",
                index + 1,
                hand.tile_count(),
                hand.groups.len(),
                hand.style
            );
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
