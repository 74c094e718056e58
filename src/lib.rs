//! Shared library for `addi-mermaid`
//! Converts ADDI hierarchy exports into Mermaid flowchart markup.

pub mod core;
pub mod logger;

pub use crate::core::{
    config, generate_mermaid_from_csv, generate_mermaid_from_str, get_version, render_outcome,
    DiagramError,
};
