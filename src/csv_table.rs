// csv_table.rs
use crate::error::{CompareError, CompareResult};

/// One named column of a table. All columns in a table are the same length.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Text(Vec<String>),
    Number(Vec<f64>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Text(values) => values.len(),
            Column::Number(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds a column whose rows are `indices` picked out of this one, in that order.
    pub fn gather(&self, indices: &[usize]) -> Column {
        match self {
            Column::Text(values) => {
                Column::Text(indices.iter().map(|&i| values[i].clone()).collect())
            }
            Column::Number(values) => Column::Number(indices.iter().map(|&i| values[i]).collect()),
        }
    }

    /// Cell at `row` rendered the way the preview prints it.
    pub fn cell(&self, row: usize) -> String {
        match self {
            Column::Text(values) => values[row].clone(),
            Column::Number(values) => format_number(values[row]),
        }
    }
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Ordered mapping of column names to columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column, or replaces the one already carrying `name`.
    pub fn add_column(&mut self, name: &str, column: Column) -> CompareResult<()> {
        if !self.columns.is_empty() && column.len() != self.len() {
            return Err(CompareError::column(
                name,
                format!("has {} rows, table has {}", column.len(), self.len()),
            ));
        }

        match self.position(name) {
            Some(index) => self.columns[index] = column,
            None => {
                self.names.push(name.to_string());
                self.columns.push(column);
            }
        }
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn column(&self, name: &str) -> CompareResult<&Column> {
        self.position(name)
            .map(|index| &self.columns[index])
            .ok_or_else(|| CompareError::column(name, "no such column"))
    }

    pub fn numbers(&self, name: &str) -> CompareResult<&[f64]> {
        match self.column(name)? {
            Column::Number(values) => Ok(values),
            Column::Text(_) => Err(CompareError::column(name, "holds text, not numbers")),
        }
    }

    pub fn texts(&self, name: &str) -> CompareResult<&[String]> {
        match self.column(name)? {
            Column::Text(values) => Ok(values),
            Column::Number(_) => Err(CompareError::column(name, "holds numbers, not text")),
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }

    /// New table holding the rows at `indices`, in that order.
    pub fn take(&self, indices: &[usize]) -> Table {
        Table {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.gather(indices)).collect(),
        }
    }

    pub fn head(&self, n: usize) -> Table {
        let indices: Vec<usize> = (0..n.min(self.len())).collect();
        self.take(&indices)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}
