//! Tabular network description: one row per bus or load.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::InputError;

/// One raw input row. Every cell is optional text; numbers are parsed later
/// by the builder so errors can name their row and column.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputRow {
    pub sector: Option<String>,
    pub load: Option<String>,
    pub emergency: Option<String>,
    pub name: Option<String>,
    pub rated_current: Option<String>,
    pub conductor_name: Option<String>,
    pub conductor_section: Option<String>,
    pub conductor_admissible: Option<String>,
    pub conductor_k: Option<String>,
    pub breaker_name: Option<String>,
    pub breaker_rated: Option<String>,
    pub breaker_short_circuit: Option<String>,
    pub breaker_ir: Option<String>,
    pub breaker_tr: Option<String>,
    pub breaker_isd: Option<String>,
    pub breaker_tsd: Option<String>,
    pub breaker_ii: Option<String>,
    pub breaker_curve: Option<String>,
    pub generic_name: Option<String>,
    pub generic_rated: Option<String>,
    pub generic_short_circuit: Option<String>,
    pub generic_curve: Option<String>,
    pub fuse_name: Option<String>,
    pub fuse_rating: Option<String>,
    pub feeder: Option<String>,
}

/// Normalizes a numeric cell and parses it.
///
/// Accepts a comma as decimal separator, keeps the first part of `a/b`
/// (`"3x95/50"` is three 95 mm² phases with a 50 mm² neutral) and multiplies
/// out `AxB` products. Returns `None` for anything else.
///
/// ```
/// use tcc_plot::io::input::parse_quantity;
///
/// assert_eq!(parse_quantity(" 2,5 "), Some(2.5));
/// assert_eq!(parse_quantity("3x95/50"), Some(285.0));
/// assert_eq!(parse_quantity("n/a"), None);
/// ```
pub fn parse_quantity(raw: &str) -> Option<f64> {
    let text = raw.trim().replace(',', ".");
    let text = text.split('/').next().unwrap_or_default().trim();
    if text.is_empty() {
        return None;
    }
    text.split(['x', 'X', '×'])
        .map(|factor| factor.trim().parse::<f64>().ok())
        .try_fold(1.0, |acc, f| f.map(|v| acc * v))
        .filter(|v| v.is_finite())
}

/// Reads rows from CSV text after skipping `skip_rows` leading lines.
///
/// The first remaining line is the header. Unknown columns are ignored and
/// rows may be shorter than the header.
///
/// # Errors
///
/// Returns [`InputError::Io`] or [`InputError::Csv`] on malformed input.
pub fn read_rows(reader: impl Read, skip_rows: usize, delimiter: u8) -> Result<Vec<InputRow>, InputError> {
    let mut reader = BufReader::new(reader);
    let mut discard = String::new();
    for _ in 0..skip_rows {
        discard.clear();
        if reader.read_line(&mut discard)? == 0 {
            break;
        }
    }

    let mut csv = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv.deserialize() {
        let row: InputRow = record?;
        if row != InputRow::default() {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Reads rows from a CSV file.
pub fn read_rows_from_path(path: &Path, skip_rows: usize, delimiter: u8) -> Result<Vec<InputRow>, InputError> {
    read_rows(File::open(path)?, skip_rows, delimiter)
}
