use crate::error::ProcessError;
use crate::types::{Dataset, Row, StatsResult};

/// Computes the total, per-value average and the first value's share of
/// the total.
///
/// Rows are summed left to right and row sums are then added in row order,
/// so the result is deterministic for a given input.
///
/// # Errors
/// Returns [`ProcessError::DivisionByZero`] if the values sum to zero.
#[allow(clippy::cast_precision_loss)]
pub fn calculate_statistics(data: &Dataset) -> Result<StatsResult, ProcessError> {
    let total_sum: f64 = data.rows().iter().map(Row::sum).sum();
    if total_sum == 0.0 {
        return Err(ProcessError::DivisionByZero);
    }

    let average = total_sum / data.value_count() as f64;
    let percentage = (data.first_value() / total_sum) * 100.0;

    Ok(StatsResult {
        total_sum,
        average,
        percentage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dataset(rows: &[&[f64]]) -> Dataset {
        let rows = rows.iter().map(|r| Row::new(r.to_vec()).unwrap()).collect();
        Dataset::new(rows).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn two_by_three() {
        let stats = calculate_statistics(&dataset(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]])).unwrap();
        assert!(close(stats.total_sum, 21.0));
        assert!(close(stats.average, 3.5));
        assert!(close(stats.percentage, 100.0 / 21.0));
    }

    #[test]
    fn average_divides_by_value_count_not_rows() {
        let stats =
            calculate_statistics(&dataset(&[&[2.0, 2.0, 2.0, 2.0], &[4.0, 4.0, 4.0]])).unwrap();
        assert!(close(stats.total_sum, 20.0));
        assert!(close(stats.average, 20.0 / 7.0));
        assert!(close(stats.percentage, 10.0));
    }

    #[test]
    fn negative_values_are_summed() {
        let stats = calculate_statistics(&dataset(&[&[-5.0, 10.0, 5.0]])).unwrap();
        assert!(close(stats.total_sum, 10.0));
        assert!(close(stats.percentage, -50.0));
    }

    #[rstest]
    #[case(&[&[0.0, 0.0, 0.0][..]][..])]
    #[case(&[&[1.0, -1.0, 0.0][..]][..])]
    #[case(&[&[-0.0, -0.0, -0.0][..]][..])]
    fn zero_total_is_rejected(#[case] rows: &[&[f64]]) {
        let err = calculate_statistics(&dataset(rows)).unwrap_err();
        assert!(matches!(err, ProcessError::DivisionByZero));
    }
}
