//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Renders rows under a header with each column padded to its widest cell.
///
/// Widths count characters, so umlauts in titles do not skew the columns.
/// Cells beyond the header count are ignored and trailing padding is trimmed.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = (0..headers.len())
        .map(|column| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .fold(headers[column].chars().count(), usize::max)
        })
        .collect();

    let mut lines = vec![render_line(headers.iter().copied(), &widths)];
    for row in rows {
        lines.push(render_line(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Prints [`render_table`] output, nothing at all when there are no rows.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if !rows.is_empty() {
        println!("{}", render_table(headers, rows));
    }
}

/// Print a `label: value` line with labels padded to a common width.
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("{:<13}{value}", format!("{label}:"));
}

/// Joins a list for display, `-` when empty.
pub fn join_or_dash<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items: Vec<String> = items.into_iter().map(|s| s.as_ref().to_string()).collect();
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
