//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod check;
mod draw;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// Tilepix - Compile riichi hand notation and render tile images
#[derive(Parser)]
#[command(name = "tpx")]
#[command(about = "Tilepix - Compile riichi hand notation (e.g. 123m44p_E*) to PNG")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render hand descriptions to PNG images
    Render {
        /// Hand descriptions and style flags (-w regular, -b black),
        /// processed in order. Pass flags after `--` or after -o.
        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,

        /// Output file or directory.
        /// If omitted: hand.png, or hand_{n}.png for multiple hands
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Parse hand descriptions and report their structure without rendering
    Check {
        /// Hand descriptions and style flags, processed in order
        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,

        /// Print the parsed hands as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI and return the process exit code.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { tokens, output } => draw::run_render(&tokens, output.as_deref()),
        Commands::Check { tokens, json } => check::run_check(&tokens, json),
    }
}
