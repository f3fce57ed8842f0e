use crate::{CellCoord, CellStyle, GridState, Projection, StyleMap};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridView {
    pub rows: Vec<Vec<CellView>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub text: String,
    /// Member of the effective selection.
    pub selected: bool,
    pub active: bool,
    pub style: CellStyle,
}

impl GridView {
    pub(crate) fn build(grid: &GridState, styles: &StyleMap) -> Self {
        let selected = grid.selection.effective();
        let rows = grid
            .data
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, text)| {
                        let coord = CellCoord::new(row, col);
                        CellView {
                            text: text.clone(),
                            selected: selected.contains(&coord),
                            active: grid.selection.active_cell == coord,
                            style: styles.get(coord).copied().unwrap_or_default(),
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellChange {
    pub coord: CellCoord,
    pub before: String,
    pub after: String,
}

/// What a preview transition between two projections has to animate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridDiff {
    /// Cells present in both grids whose text differs, row-major.
    pub changed_cells: Vec<CellChange>,
    pub rows_removed: usize,
    pub selection_changed: bool,
    /// Cells whose style differs between the two projections.
    pub styled_cells: Vec<CellCoord>,
}

impl GridDiff {
    pub fn is_empty(&self) -> bool {
        self.changed_cells.is_empty()
            && self.rows_removed == 0
            && !self.selection_changed
            && self.styled_cells.is_empty()
    }
}

pub fn diff(before: &Projection, after: &Projection) -> GridDiff {
    let changed_cells = before
        .grid
        .data
        .iter()
        .zip(&after.grid.data)
        .enumerate()
        .flat_map(|(row, (old, new))| {
            old.iter()
                .zip(new)
                .enumerate()
                .filter(|(_, (a, b))| a != b)
                .map(move |(col, (a, b))| CellChange {
                    coord: CellCoord::new(row, col),
                    before: a.clone(),
                    after: b.clone(),
                })
        })
        .collect();

    let mut styled_cells: Vec<CellCoord> = after
        .styles
        .iter()
        .filter(|(coord, style)| before.styles.get(**coord) != Some(*style))
        .map(|(coord, _)| *coord)
        .collect();
    styled_cells.extend(
        before
            .styles
            .iter()
            .filter(|(coord, _)| after.styles.get(**coord).is_none())
            .map(|(coord, _)| *coord),
    );
    styled_cells.sort();

    GridDiff {
        changed_cells,
        rows_removed: before
            .grid
            .row_count()
            .saturating_sub(after.grid.row_count()),
        selection_changed: before.grid.selection != after.grid.selection,
        styled_cells,
    }
}
