use std::fmt::Write as _;

use crate::types::StatsResult;

pub fn format(stats: &StatsResult) -> String {
    let mut out = String::new();
    out.push_str("Data Processing Results\n");
    out.push_str("=====================\n\n");
    let _ = writeln!(out, "Total Sum: {}", fixed2(stats.total_sum));
    let _ = writeln!(out, "Average: {}", fixed2(stats.average));
    let _ = writeln!(out, "Percentage (first value): {}%", fixed2(stats.percentage));
    out
}

/// Two decimal places; non-finite values render as `nan`, `inf`, `-inf`.
fn fixed2(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_template() {
        let stats = StatsResult {
            total_sum: 21.0,
            average: 3.5,
            percentage: 100.0 / 21.0,
        };
        assert_eq!(
            format(&stats),
            "Data Processing Results\n\
             =====================\n\
             \n\
             Total Sum: 21.00\n\
             Average: 3.50\n\
             Percentage (first value): 4.76%\n"
        );
    }

    #[test]
    fn values_are_rounded_to_two_places() {
        let stats = StatsResult {
            total_sum: 1234.5678,
            average: -0.004,
            percentage: 99.996,
        };
        let s = format(&stats);
        assert!(s.contains("Total Sum: 1234.57\n"));
        assert!(s.contains("Average: -0.00\n"));
        assert!(s.contains("Percentage (first value): 100.00%\n"));
    }

    #[test]
    fn non_finite_values_are_lowercase() {
        let stats = StatsResult {
            total_sum: f64::NAN,
            average: f64::INFINITY,
            percentage: f64::NEG_INFINITY,
        };
        let s = format(&stats);
        assert!(s.contains("Total Sum: nan\n"));
        assert!(s.contains("Average: inf\n"));
        assert!(s.contains("Percentage (first value): -inf%\n"));
    }
}
