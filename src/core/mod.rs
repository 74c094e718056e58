//! Core functionality: configuration, parsing, the hierarchy model and
//! diagram generation

pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod visualization;

pub use error::DiagramError;
pub use generator::{generate_mermaid_from_csv, generate_mermaid_from_str, render_outcome};

/// Returns the current version of the `addi-mermaid` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
