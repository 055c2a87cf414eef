use std::fs;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::ProcessError;
use crate::types::{Dataset, MIN_ROW_LEN, Row};

/// Reads a CSV file of numeric rows into a [`Dataset`].
///
/// # Errors
/// Returns [`ProcessError::FileNotFound`] if `path` does not exist,
/// [`ProcessError::Read`] if it cannot be read, and any error
/// [`parse_dataset`] reports for the file's contents.
pub fn read_dataset(path: &Path) -> Result<Dataset, ProcessError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ProcessError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ProcessError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "reading input");
    parse_dataset(&bytes)
}

/// Parses comma-separated rows from raw CSV bytes.
///
/// There is no header row and rows may differ in length. Surrounding
/// whitespace is trimmed from every field. A blank line is a row with no
/// fields.
///
/// # Errors
/// Returns an error if a row has fewer than three fields, a field is not a
/// number, the CSV is structurally invalid, or no rows were found.
pub fn parse_dataset(input: &[u8]) -> Result<Dataset, ProcessError> {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).trim(Trim::All);

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    for (line, raw) in split_records(input) {
        let mut rdr = builder.from_reader(raw);
        if !rdr.read_record(&mut record)? {
            record.clear();
        }
        rows.push(parse_row(&record, line)?);
    }
    debug!(rows = rows.len(), "parsed input");

    Dataset::new(rows).ok_or(ProcessError::EmptyInput)
}

/// Splits `input` into records paired with their 1-based starting line.
///
/// Line breaks inside quoted fields stay part of their record. Terminators
/// (`\n` or `\r\n`) are stripped; a trailing terminator does not start a
/// new record.
fn split_records(input: &[u8]) -> Vec<(u64, &[u8])> {
    #[derive(Clone, Copy)]
    enum State {
        FieldStart,
        Unquoted,
        Quoted,
        QuoteInQuoted,
    }

    let mut out = Vec::new();
    let mut state = State::FieldStart;
    let mut start = 0;
    let mut line = 1;
    let mut start_line = 1;
    for (i, &b) in input.iter().enumerate() {
        if b == b'\n' {
            line += 1;
        }
        state = match (state, b) {
            (State::Quoted, b'"') => State::QuoteInQuoted,
            (State::Quoted, _) => State::Quoted,
            (State::FieldStart | State::QuoteInQuoted, b'"') => State::Quoted,
            (_, b',') => State::FieldStart,
            (_, b'\n') => {
                out.push((start_line, trim_cr(&input[start..i])));
                start = i + 1;
                start_line = line;
                State::FieldStart
            }
            _ => State::Unquoted,
        };
    }
    if start < input.len() {
        out.push((start_line, trim_cr(&input[start..])));
    }
    out
}

fn trim_cr(s: &[u8]) -> &[u8] {
    s.strip_suffix(b"\r").unwrap_or(s)
}

fn parse_row(record: &StringRecord, line: u64) -> Result<Row, ProcessError> {
    let malformed = || ProcessError::MalformedRow {
        line,
        fields: record.iter().map(str::to_owned).collect(),
    };
    if record.len() < MIN_ROW_LEN {
        return Err(malformed());
    }

    let values = record
        .iter()
        .map(|field| {
            field
                .parse::<f64>()
                .map_err(|source| ProcessError::NumericParse {
                    line,
                    value: field.to_owned(),
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Row::new(values).ok_or_else(malformed)
}
