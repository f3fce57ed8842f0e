use std::collections::BTreeSet;

use engine_logging::{engine_debug, engine_trace};

use crate::{
    BorderStyle, CellCoord, ChallengeStep, GridAction, GridState, NumberFormat, StyleMap,
    CUT_OPACITY,
};

/// Pure applicator: returns the grid and styles after one step's effect.
///
/// Inputs are only borrowed; the result is always a fresh copy, so callers can
/// keep the previous state around for before/after rendering.
pub fn apply_effect(
    grid: &GridState,
    styles: &StyleMap,
    step: &ChallengeStep,
) -> (GridState, StyleMap) {
    let mut grid = grid.clone();
    let mut styles = styles.clone();

    let Some(effect) = &step.grid_effect else {
        return (grid, styles);
    };
    engine_trace!("Applying grid effect {}", effect.action.tag());

    match &effect.action {
        GridAction::SelectRow => {
            let row = grid.selection.active_cell.row;
            let cols = grid.data.get(row).map_or(0, Vec::len);
            grid.selection.clear();
            grid.selection
                .selected_cells
                .extend((0..cols).map(|col| CellCoord::new(row, col)));
        }
        GridAction::SelectColumn => {
            let col = grid.selection.active_cell.col;
            let rows: Vec<CellCoord> = (0..grid.row_count())
                .map(|row| CellCoord::new(row, col))
                .filter(|coord| grid.contains(*coord))
                .collect();
            grid.selection.clear();
            grid.selection.selected_cells.extend(rows);
        }
        GridAction::SelectAll => {
            let all: Vec<CellCoord> = grid
                .data
                .iter()
                .enumerate()
                .flat_map(|(row, cells)| {
                    (0..cells.len()).map(move |col| CellCoord::new(row, col))
                })
                .collect();
            grid.selection.clear();
            grid.selection.selected_cells.extend(all);
        }
        GridAction::DeleteRow => delete_rows(&mut grid),
        GridAction::Cut => {
            for coord in grid.selection.effective() {
                let style = styles.entry(coord);
                style.opacity = Some(CUT_OPACITY);
                style.border = Some(BorderStyle::Dashed);
            }
        }
        GridAction::ApplyStyleBold => {
            for coord in grid.selection.effective() {
                styles.entry(coord).bold = true;
            }
        }
        GridAction::ApplyStyleCurrency => {
            for coord in grid.selection.effective() {
                let Some(cell) = grid.cell_mut(coord) else {
                    continue;
                };
                if let Some(formatted) = format_currency(cell) {
                    *cell = formatted;
                    styles.entry(coord).number_format = Some(NumberFormat::Currency);
                }
            }
        }
        GridAction::Unrecognized(tag) => {
            engine_debug!("Ignoring unrecognized grid action {tag:?}");
        }
    }

    (grid, styles)
}

fn delete_rows(grid: &mut GridState) {
    let targets: BTreeSet<usize> = if grid.selection.selected_cells.is_empty() {
        BTreeSet::from([grid.selection.active_cell.row])
    } else {
        grid.selection
            .selected_cells
            .iter()
            .map(|coord| coord.row)
            .collect()
    };

    // Highest first so pending indices keep pointing at the same rows.
    for row in targets.into_iter().rev() {
        if row < grid.data.len() {
            grid.data.remove(row);
        }
    }

    grid.selection.clear();
    let last_row = grid.data.len().saturating_sub(1);
    let active = &mut grid.selection.active_cell;
    active.row = active.row.min(last_row);
}

/// `"$1,234.5"` becomes `"$1234.50"`; text with no number in it yields `None`.
fn format_currency(text: &str) -> Option<String> {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let value: f64 = stripped.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    // Avoid rendering "-0.00".
    let value = if value == 0.0 { 0.0 } else { value };
    Some(format!("${value:.2}"))
}

#[cfg(test)]
mod tests {
    use super::format_currency;

    #[test]
    fn currency_strips_symbols_and_separators() {
        assert_eq!(format_currency("$1,234.50").as_deref(), Some("$1234.50"));
        assert_eq!(format_currency("1234.5").as_deref(), Some("$1234.50"));
        assert_eq!(format_currency("-5").as_deref(), Some("$-5.00"));
        assert_eq!(format_currency("-0").as_deref(), Some("$0.00"));
    }

    #[test]
    fn currency_rejects_non_numbers() {
        assert_eq!(format_currency("N/A"), None);
        assert_eq!(format_currency("abc"), None);
        assert_eq!(format_currency(""), None);
        assert_eq!(format_currency("1.2.3"), None);
    }
}
