use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::MIN_ROW_LEN;

/// Failures raised while reading, aggregating or writing a dataset.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The input path does not exist.
    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The input file exists but could not be opened.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The CSV reader rejected the input (bad UTF-8, IO error mid-read).
    #[error("malformed CSV input: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("row {line} must contain at least {} values: {fields:?}", MIN_ROW_LEN)]
    MalformedRow { line: u64, fields: Vec<String> },

    #[error("row {line}: could not convert {value:?} to a number: {source}")]
    NumericParse {
        line: u64,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Input file is empty")]
    EmptyInput,

    /// Sum of all values is zero, so the first value's share is undefined.
    #[error("total sum is zero; percentage of the first value is undefined")]
    DivisionByZero,

    #[error("cannot write results to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
