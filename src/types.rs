/// Minimum number of values a row must carry.
pub const MIN_ROW_LEN: usize = 3;

/// One parsed line of numeric input.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<f64>,
}

impl Row {
    /// Returns `None` when `values` is shorter than [`MIN_ROW_LEN`].
    pub fn new(values: Vec<f64>) -> Option<Self> {
        if values.len() < MIN_ROW_LEN {
            return None;
        }
        Some(Row { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// All rows read from one input file, in source order. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    /// Returns `None` when `rows` is empty.
    pub fn new(rows: Vec<Row>) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        Some(Dataset { rows })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Count of individual values across every row.
    pub fn value_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    /// Value at row 0, column 0.
    pub fn first_value(&self) -> f64 {
        // Both indices are guaranteed by the constructors.
        self.rows[0].values[0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsResult {
    pub total_sum: f64,
    pub average: f64,
    pub percentage: f64,
}
