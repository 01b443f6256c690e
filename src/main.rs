//! Tilepix - Command-line tool for rendering riichi hands from text notation

use std::process::ExitCode;

use tilepix::cli;

fn main() -> ExitCode {
    cli::run()
}
