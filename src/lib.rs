//! Read a CSV file of numeric rows, summarise it, and write a text report.
//!
//! The pipeline is [`reader`] → [`aggregator`] → [`writer`]; the [`cli`]
//! module wires it to the command line and fixes the output location.

pub mod aggregator;
pub mod cli;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod reader;
pub mod types;
pub mod writer;

pub use error::ProcessError;
pub use types::{Dataset, Row, StatsResult};
