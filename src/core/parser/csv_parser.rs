//! CSV parser for ADDI hierarchy exports
//!
//! Exports are `;`-delimited with one header line. Column 0 holds the root
//! entity, column 1 is unused, and columns 2+ hold the descendant chain.

use crate::core::error::DiagramError;
use crate::debug;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Field separator used by ADDI exports
pub const DELIMITER: u8 = b';';

const ROOT_COLUMN: usize = 0;
const CHAIN_START_COLUMN: usize = 2;

/// Parse an export file into row chains
///
/// # Arguments
/// * `path` - Path to the export file
///
/// # Returns
/// One chain per data row that has a root, in file order
///
/// # Errors
/// Returns [`DiagramError::NotFound`] if the file does not exist, and
/// [`DiagramError::Unexpected`] for any other read or parse failure.
pub fn parse_export_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>, DiagramError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DiagramError::from_open(path, &e))?;
    parse_export_reader(file)
}

/// Parse export data from any reader into row chains
///
/// # Errors
/// Returns [`DiagramError::Unexpected`] when the input is not valid UTF-8,
/// cannot be read, or fails [`parse_export_str`].
pub fn parse_export_reader<R: Read>(mut reader: R) -> Result<Vec<Vec<String>>, DiagramError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_export_str(&text)
}

/// Parse export text into row chains
///
/// The first physical line is the header and is discarded whatever it
/// contains, including nothing. Every later line must be a row: an empty
/// line is an error, not a separator.
///
/// # Errors
/// Returns [`DiagramError::Unexpected`] when the input has no header line,
/// when a data line is empty, or when the CSV reader fails.
pub fn parse_export_str(text: &str) -> Result<Vec<Vec<String>>, DiagramError> {
    if text.is_empty() {
        return Err(DiagramError::Unexpected(
            "input has no header line".to_string(),
        ));
    }
    let body = text.find('\n').map_or("", |end| &text[end + 1..]);

    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut chains = Vec::new();
    let mut record = StringRecord::new();
    loop {
        let start = reader.position().clone();
        let more = reader.read_record(&mut record)?;
        if begins_with_empty_line(body.as_bytes(), start.byte(), reader.position().byte()) {
            return Err(DiagramError::Unexpected(format!(
                "empty line after data row {}",
                start.record()
            )));
        }
        if !more {
            break;
        }

        if let Some(chain) = chain_from_record(&record) {
            chains.push(chain);
        } else {
            debug!("Skipping data row {}: empty root column", start.record() + 1);
        }
    }

    Ok(chains)
}

/// Whether the bytes consumed by one read start with an empty line
///
/// The CSV reader silently drops empty lines ahead of the next record, so
/// they only show up in the consumed span. A CRLF terminator leaves its
/// `\n` to the following read.
fn begins_with_empty_line(body: &[u8], start: u64, end: u64) -> bool {
    let (Ok(start), Ok(end)) = (usize::try_from(start), usize::try_from(end)) else {
        return false;
    };
    let Some(mut consumed) = body.get(start..end) else {
        return false;
    };
    if start > 0 && body[start - 1] == b'\r' {
        consumed = consumed.strip_prefix(b"\n").unwrap_or(consumed);
    }
    matches!(consumed.first(), Some(b'\n' | b'\r'))
}

/// Build the chain for one row
///
/// Returns `None` when the root column is missing or blank. Otherwise the
/// chain is the root followed by every non-blank cell from column 2 on,
/// all trimmed. Blank cells are dropped, not treated as chain breaks.
#[must_use]
pub fn chain_from_record(record: &StringRecord) -> Option<Vec<String>> {
    let root = record
        .get(ROOT_COLUMN)
        .map(str::trim)
        .filter(|root| !root.is_empty())?;

    let mut chain = vec![root.to_string()];
    chain.extend(
        record
            .iter()
            .skip(CHAIN_START_COLUMN)
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(ToString::to_string),
    );
    Some(chain)
}
