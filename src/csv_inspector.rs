// csv_inspector.rs
use crate::csv_table::Table;
use crate::error::CompareResult;

/// Rows above, below and at zero for one numeric column. NaN lands in none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignCounts {
    pub positive: usize,
    pub negative: usize,
    pub zero: usize,
}

pub fn count_positive(table: &Table, column: &str) -> CompareResult<usize> {
    Ok(table.numbers(column)?.iter().filter(|&&v| v > 0.0).count())
}

pub fn sign_counts(table: &Table, column: &str) -> CompareResult<SignCounts> {
    let mut counts = SignCounts::default();
    for &value in table.numbers(column)? {
        if value > 0.0 {
            counts.positive += 1;
        } else if value < 0.0 {
            counts.negative += 1;
        } else if value == 0.0 {
            counts.zero += 1;
        }
    }
    Ok(counts)
}
