//! Parsing of ADDI hierarchy exports

pub mod csv_parser;

pub use csv_parser::{chain_from_record, parse_export_csv, parse_export_reader, parse_export_str};
