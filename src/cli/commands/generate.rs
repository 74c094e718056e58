//! Diagram generation command handler
//!
//! Every outcome, including failures, is reported as plain text on the
//! chosen output; the process exit code stays 0.

use addi_mermaid::core::generator::{generate_mermaid_from_csv, render_outcome};
use addi_mermaid::core::visualization::MermaidGenerator;
use addi_mermaid::{error, info, verbose};
use std::fs;
use std::path::Path;

/// Run diagram generation for one export file.
///
/// # Arguments
/// * `csv_file` - Path to the ADDI export
/// * `output` - Optional file to write instead of standard output
/// * `fenced` - Wrap successful markup in a Markdown mermaid fence
pub fn run(csv_file: &Path, output: Option<&Path>, fenced: bool) {
    let text = render(csv_file, fenced);

    let Some(output_path) = output else {
        println!("{text}");
        return;
    };

    match fs::write(output_path, &text) {
        Ok(()) => {
            verbose!("✓ Diagram written to: {}", output_path.display());
            info!("Wrote diagram to: {}", output_path.display());
        }
        Err(e) => {
            error!("Failed to write {}: {e}", output_path.display());
            println!(
                "Error: failed to write output to {}: {e}",
                output_path.display()
            );
        }
    }
}

/// Produce the user-facing text for one export: markup or an error message.
pub fn render(csv_file: &Path, fenced: bool) -> String {
    match generate_mermaid_from_csv(csv_file) {
        Ok(markup) => {
            verbose!("✓ Diagram generated from: {}", csv_file.display());
            if fenced {
                MermaidGenerator::fence(&markup)
            } else {
                markup
            }
        }
        Err(e) => {
            error!("Diagram generation failed for {}: {e}", csv_file.display());
            render_outcome(Err(e))
        }
    }
}
