//! CLI command handlers for `addi-mermaid`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod generate;
