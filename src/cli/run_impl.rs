use std::path::Path;

use tracing::debug;

use crate::error::ProcessError;
use crate::types::StatsResult;
use crate::{aggregator, reader, writer};

/// Reads `input`, computes its statistics and writes the report to `output`.
///
/// Nothing is written unless every earlier step succeeds.
///
/// # Errors
/// Returns the first [`ProcessError`] raised by any step.
pub fn process(input: &Path, output: &Path) -> Result<StatsResult, ProcessError> {
    let data = reader::read_dataset(input)?;
    debug!(
        rows = data.rows().len(),
        values = data.value_count(),
        "dataset loaded"
    );

    let stats = aggregator::calculate_statistics(&data)?;
    debug!(
        total_sum = stats.total_sum,
        average = stats.average,
        percentage = stats.percentage,
        "statistics computed"
    );

    writer::write_results(output, &stats)?;
    Ok(stats)
}
