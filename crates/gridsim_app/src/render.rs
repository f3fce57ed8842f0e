//! Plain-text rendering of projections.

use std::fmt::Write;

use gridsim_core::{CellView, GridDiff, GridView, NumberFormat, StyleMap};

const COLUMN_GAP: &str = " | ";

/// Renders a grid as aligned text columns.
///
/// Active cell `[text]`, other selected cells `(text)`, bold `**text**`,
/// cut `~text~`.
pub fn render_grid(view: &GridView) -> String {
    let cells: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| row.iter().map(decorate).collect())
        .collect();

    let cols = cells.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..cols)
        .map(|col| {
            cells
                .iter()
                .filter_map(|row| row.get(col))
                .map(|text| text.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(text, width)| format!("{text:<width$}"))
            .collect();
        let _ = writeln!(out, "{}", line.join(COLUMN_GAP).trim_end());
    }
    if cells.is_empty() {
        out.push_str("(empty grid)\n");
    }
    out
}

fn decorate(cell: &CellView) -> String {
    let mut text = cell.text.clone();
    if cell.style.bold {
        text = format!("**{text}**");
    }
    if cell.style.is_cut() {
        text = format!("~{text}~");
    }
    if cell.active {
        format!("[{text}]")
    } else if cell.selected {
        format!("({text})")
    } else {
        text
    }
}

/// One line per visible change, or a single "no changes" line.
pub fn render_diff(diff: &GridDiff, styles: &StyleMap) -> String {
    if diff.is_empty() {
        return "no changes\n".to_string();
    }

    let mut out = String::new();
    if diff.rows_removed > 0 {
        let _ = writeln!(out, "rows removed: {}", diff.rows_removed);
    }
    for change in &diff.changed_cells {
        let currency = styles
            .get(change.coord)
            .is_some_and(|style| style.number_format == Some(NumberFormat::Currency));
        let _ = writeln!(
            out,
            "{}: {:?} -> {:?}{}",
            change.coord,
            change.before,
            change.after,
            if currency { " (currency)" } else { "" }
        );
    }
    if !diff.styled_cells.is_empty() {
        let keys: Vec<String> = diff.styled_cells.iter().map(|coord| coord.key()).collect();
        let _ = writeln!(out, "restyled: {}", keys.join(", "));
    }
    if diff.selection_changed {
        out.push_str("selection changed\n");
    }
    out
}
