//! Render command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::output::{hand_output_path, save_png};
use crate::render::render_command;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the render command: one PNG per hand token, in token order.
pub fn run_render(tokens: &[String], output: Option<&Path>) -> ExitCode {
    let images = match render_command(tokens) {
        Ok(images) => images,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if images.is_empty() {
        eprintln!("Error: no hand descriptions given");
        return ExitCode::from(EXIT_ERROR);
    }

    let total = images.len();
    for (index, image) in images.iter().enumerate() {
        let path = hand_output_path(output, index, total);
        if let Err(e) = save_png(image, &path) {
            eprintln!("Error: failed to write {}: {}", path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
        println!("{}", path.display());
    }

    ExitCode::from(EXIT_SUCCESS)
}
