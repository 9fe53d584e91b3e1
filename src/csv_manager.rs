// csv_manager.rs
use crate::csv_table::{Column, Table};
use crate::error::{CompareError, CompareResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use fuzzywuzzy::fuzz;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const SPREADSHEET_EXTENSIONS: [&str; 4] = ["xls", "xlsx", "xlsm", "ods"];

/// Columns a metric table must carry: one text key plus numeric metrics.
#[derive(Debug, Clone, Copy)]
pub struct RequiredColumns<'a> {
    pub key: &'a str,
    pub metrics: &'a [String],
}

/// Loads a metric table from a delimited text file or the first sheet of a workbook.
pub fn load(path: &Path, required: RequiredColumns, delimiter: u8) -> CompareResult<Table> {
    let (headers, rows) = if is_spreadsheet(path) {
        read_spreadsheet(path)?
    } else {
        read_delimited(path, delimiter)?
    };

    let table = build_table(path, headers, rows, required)?;
    log::info!(
        "Loaded {} rows, {} columns from {:?}",
        table.len(),
        table.headers().len(),
        path
    );
    Ok(table)
}

fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| SPREADSHEET_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn read_delimited(path: &Path, delimiter: u8) -> CompareResult<(Vec<String>, Vec<Vec<String>>)> {
    let bytes = fs::read(path).map_err(|source| CompareError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(bytes.as_slice());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| CompareError::schema(path, format!("unreadable header: {}", e)))?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| CompareError::schema(path, e.to_string()))?;
        rows.push(record.iter().map(String::from).collect());
    }

    Ok((headers, rows))
}

fn read_spreadsheet(path: &Path) -> CompareResult<(Vec<String>, Vec<Vec<String>>)> {
    fs::metadata(path).map_err(|source| CompareError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| CompareError::schema(path, format!("can't open workbook: {}", e)))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => {
            range.map_err(|e| CompareError::schema(path, format!("can't read sheet: {}", e)))?
        }
        None => return Ok((Vec::new(), Vec::new())),
    };

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<String>>());

    let headers = rows.next().unwrap_or_default();
    Ok((headers, rows.collect()))
}

fn build_table(
    path: &Path,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    required: RequiredColumns,
) -> CompareResult<Table> {
    let mut table = Table::new();

    // Nothing at all, not even a header.
    if headers.is_empty() {
        table.add_column(required.key, Column::Text(Vec::new()))?;
        for metric in required.metrics {
            table.add_column(metric, Column::Number(Vec::new()))?;
        }
        return Ok(table);
    }

    let headers = dedupe_headers(headers);
    for name in std::iter::once(required.key).chain(required.metrics.iter().map(String::as_str)) {
        if !headers.iter().any(|h| h == name) {
            return Err(CompareError::schema(path, missing_column_message(name, &headers)));
        }
    }

    for (index, name) in headers.iter().enumerate() {
        let cells: Vec<&str> = rows
            .iter()
            .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
            .collect();

        let column = if name == required.key {
            Column::Text(cells.iter().map(|c| c.to_string()).collect())
        } else if required.metrics.iter().any(|m| m == name) {
            Column::Number(parse_metric(path, name, &cells)?)
        } else {
            infer_column(&cells)
        };
        table.add_column(name, column)?;
    }

    Ok(table)
}

fn parse_metric(path: &Path, name: &str, cells: &[&str]) -> CompareResult<Vec<f64>> {
    cells
        .iter()
        .enumerate()
        .map(|(row, cell)| {
            cell.trim().parse::<f64>().map_err(|_| {
                // +2: one for the header line, one for 1-based lines
                CompareError::schema(
                    path,
                    format!(
                        "line {}: {:?} in column {:?} is not a number",
                        row + 2,
                        cell,
                        name
                    ),
                )
            })
        })
        .collect()
}

fn infer_column(cells: &[&str]) -> Column {
    let numbers: Option<Vec<f64>> = cells.iter().map(|c| c.trim().parse().ok()).collect();
    match numbers {
        Some(values) => Column::Number(values),
        None => Column::Text(cells.iter().map(|c| c.to_string()).collect()),
    }
}

fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    headers
        .into_iter()
        .map(|header| {
            let mut candidate = header.clone();
            let mut n = 1;
            while !seen.insert(candidate.clone()) {
                candidate = format!("{}.{}", header, n);
                n += 1;
            }
            candidate
        })
        .collect()
}

fn missing_column_message(name: &str, headers: &[String]) -> String {
    let best_match = headers
        .iter()
        .map(|h| (h, fuzz::ratio(&name.to_lowercase(), &h.to_lowercase())))
        .max_by_key(|&(_, score)| score);

    match best_match {
        Some((header, score)) if score > 60 => {
            format!("missing column {:?} (did you mean {:?}?)", name, header)
        }
        _ => format!("missing column {:?}", name),
    }
}
