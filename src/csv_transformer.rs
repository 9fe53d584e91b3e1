// csv_transformer.rs
use crate::csv_table::{Column, Table};
use crate::error::CompareResult;
use std::cmp::Ordering;

/// Adds `{metric}_diff = {metric}{after} - {metric}{before}` for every metric.
pub fn compute_diffs(
    table: &mut Table,
    metrics: &[String],
    suffixes: (&str, &str),
) -> CompareResult<()> {
    for metric in metrics {
        let before = format!("{}{}", metric, suffixes.0);
        let after = format!("{}{}", metric, suffixes.1);
        subtract_columns(table, &after, &before, &format!("{}_diff", metric))?;
    }
    Ok(())
}

/// `out = minuend - subtrahend`, row by row.
pub fn subtract_columns(
    table: &mut Table,
    minuend: &str,
    subtrahend: &str,
    out: &str,
) -> CompareResult<()> {
    let diff: Vec<f64> = table
        .numbers(minuend)?
        .iter()
        .zip(table.numbers(subtrahend)?)
        .map(|(a, b)| a - b)
        .collect();
    table.add_column(out, Column::Number(diff))
}

/// Stable sort on a numeric column. NaN goes last either way.
pub fn sort_by(table: &Table, column: &str, descending: bool) -> CompareResult<Table> {
    let values = table.numbers(column)?;
    let mut order: Vec<usize> = (0..values.len()).collect();

    order.sort_by(|&a, &b| {
        let (x, y) = (values[a], values[b]);
        match (x.is_nan(), y.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
                if descending {
                    ord.reverse()
                } else {
                    ord
                }
            }
        }
    });

    Ok(table.take(&order))
}
