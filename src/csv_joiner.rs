// csv_joiner.rs
use crate::csv_table::{Column, Table};
use crate::error::{CompareError, CompareResult};
use std::collections::{HashMap, HashSet};

/// Distinct keys each side of a join had that the other side lacked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinReport {
    pub left_only: usize,
    pub right_only: usize,
}

/// Inner join on `key`. Output rows follow `left` order; matches within one
/// left row follow `right` order, so repeated keys give the cross product.
///
/// Columns present on both sides (other than the key) get `suffixes.0` on the
/// left copy and `suffixes.1` on the right copy. Everything else keeps its name.
pub fn inner_join(
    left: &Table,
    right: &Table,
    key: &str,
    suffixes: (&str, &str),
) -> CompareResult<(Table, JoinReport)> {
    let left_keys = left.texts(key)?;
    let right_keys = right.texts(key)?;

    let mut right_index: HashMap<&str, Vec<usize>> = HashMap::new();
    for (row, k) in right_keys.iter().enumerate() {
        right_index.entry(k.as_str()).or_default().push(row);
    }

    let mut left_rows = Vec::new();
    let mut right_rows = Vec::new();
    for (row, k) in left_keys.iter().enumerate() {
        if let Some(matches) = right_index.get(k.as_str()) {
            for &other in matches {
                left_rows.push(row);
                right_rows.push(other);
            }
        }
    }

    let report = count_unmatched(left_keys, right_keys);

    let left_side = left.take(&left_rows);
    let right_side = right.take(&right_rows);

    let mut merged = Table::new();
    for (name, column) in left_side.columns() {
        let out_name = if name != key && right.has_column(name) {
            format!("{}{}", name, suffixes.0)
        } else {
            name.to_string()
        };
        add_unique(&mut merged, &out_name, column)?;
    }
    for (name, column) in right_side.columns() {
        if name == key {
            continue;
        }
        let out_name = if left.has_column(name) {
            format!("{}{}", name, suffixes.1)
        } else {
            name.to_string()
        };
        add_unique(&mut merged, &out_name, column)?;
    }

    log::debug!(
        "Joined {} x {} rows on {:?} into {} rows",
        left.len(),
        right.len(),
        key,
        merged.len()
    );
    Ok((merged, report))
}

fn add_unique(merged: &mut Table, name: &str, column: &Column) -> CompareResult<()> {
    if merged.has_column(name) {
        return Err(CompareError::column(
            name,
            "clashes with an existing column after suffixing",
        ));
    }
    merged.add_column(name, column.clone())
}

fn count_unmatched(left_keys: &[String], right_keys: &[String]) -> JoinReport {
    let left_set: HashSet<&str> = left_keys.iter().map(String::as_str).collect();
    let right_set: HashSet<&str> = right_keys.iter().map(String::as_str).collect();

    JoinReport {
        left_only: left_set.difference(&right_set).count(),
        right_only: right_set.difference(&left_set).count(),
    }
}
