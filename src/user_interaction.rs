// user_interaction.rs
use crate::csv_table::Table;

/// Prints a message in bold orange font.
pub fn print_insight(message: &str) {
    let bold_orange = "\x1b[1;38;5;208m";
    let reset = "\x1b[0m";

    println!("{}@BIGBro: {}{}", bold_orange, message, reset);
}

/// Prints a message in orange font, indented one level.
pub fn print_insight_level_2(message: &str) {
    let orange = "\x1b[0;38;5;208m";
    let reset = "\x1b[0m";

    println!("  {}@LILBro: {}{}", orange, message, reset);
}

pub fn print_table(table: &Table, total_rows: usize) {
    print!("{}", format_table(table, total_rows));
}

/// Renders `table` as `|col |col |` rows. `total_rows` is the size of the table
/// the preview was cut from; the gap shows up as `<<+N rows>>`.
pub fn format_table(table: &Table, total_rows: usize) -> String {
    let headers = table.headers();
    let cells: Vec<Vec<String>> = (0..table.len())
        .map(|row| table.columns().map(|(_, col)| col.cell(row)).collect())
        .collect();

    // Calculate the width of each column from its header and cells
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render_row = |values: Vec<&str>| -> String {
        let mut line = String::from("|");
        for (value, width) in values.iter().zip(&widths) {
            line.push_str(&format!("{:<width$} |", value, width = width));
        }
        line.push('\n');
        line
    };

    let header_line = render_row(headers.iter().map(String::as_str).collect());
    let mut out = header_line.clone();
    out.push_str(&"-".repeat(header_line.trim_end().chars().count()));
    out.push('\n');

    for row in &cells {
        out.push_str(&render_row(row.iter().map(String::as_str).collect()));
    }

    let hidden = total_rows.saturating_sub(table.len());
    if hidden > 0 {
        let plural = if hidden == 1 { "row" } else { "rows" };
        out.push_str(&format!("<<+{} {}>>\n", hidden, plural));
    }
    out.push_str(&format!("Total rows: {}\n", total_rows));
    out
}
