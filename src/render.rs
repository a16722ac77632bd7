//! Terminal table rendering for result sets.
//!
//! Every table starts with an `(index)` column holding the zero-based row
//! number, followed by the result columns in store order. Cells are left
//! aligned and padded by display width so wide characters line up.

use unicode_width::UnicodeWidthStr;

use crate::engine::QueryResult;

const INDEX_HEADER: &str = "(index)";

/// Render a result set as a box-drawn table, ending with a newline.
#[must_use]
pub fn render_table(result: &QueryResult) -> String {
    let mut header = Vec::with_capacity(result.columns.len() + 1);
    header.push(INDEX_HEADER.to_string());
    header.extend(result.columns.iter().cloned());

    let body: Vec<Vec<String>> = result
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let mut cells = Vec::with_capacity(header.len());
            cells.push(idx.to_string());
            cells.extend(row.iter().map(format_cell));
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for cells in &body {
        for (col, cell) in cells.iter().enumerate() {
            if let Some(width) = widths.get_mut(col) {
                *width = (*width).max(cell.width());
            }
        }
    }

    let mut out = String::new();
    out.push_str(&border('┌', '┬', '┐', &widths));
    out.push_str(&line(&header, &widths));
    out.push_str(&border('├', '┼', '┤', &widths));
    for cells in &body {
        out.push_str(&line(cells, &widths));
    }
    out.push_str(&border('└', '┴', '┘', &widths));
    out
}

/// Display text for one cell
#[must_use]
pub fn format_cell(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn border(left: char, mid: char, right: char, widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}\n", segments.join(&mid.to_string()))
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let mut out = String::from("│");
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width.saturating_sub(cell.width());
        out.push(' ');
        out.push_str(cell);
        out.push_str(&" ".repeat(pad));
        out.push_str(" │");
    }
    out.push('\n');
    out
}
