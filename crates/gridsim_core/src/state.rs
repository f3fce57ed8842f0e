use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Zero-based `(row, col)` position in a grid. Orders row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Canonical `"row-col"` key used by authoring data and style lookups.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid cell key {0:?}, expected \"row-col\"")]
pub struct ParseCoordError(pub String);

impl FromStr for CellCoord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordError(s.to_string());
        let (row, col) = s.split_once('-').ok_or_else(err)?;
        let row = row.parse().map_err(|_| err())?;
        let col = col.parse().map_err(|_| err())?;
        Ok(Self { row, col })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub active_cell: CellCoord,
    /// Empty means only the active cell is implicitly selected.
    pub selected_cells: BTreeSet<CellCoord>,
}

impl Selection {
    pub fn at(active_cell: CellCoord) -> Self {
        Self {
            active_cell,
            selected_cells: BTreeSet::new(),
        }
    }

    /// The selected set, or the active cell alone when nothing is selected.
    pub fn effective(&self) -> BTreeSet<CellCoord> {
        if self.selected_cells.is_empty() {
            BTreeSet::from([self.active_cell])
        } else {
            self.selected_cells.clone()
        }
    }

    pub fn clear(&mut self) {
        self.selected_cells.clear();
    }
}

/// Rectangular table of cell text plus the current selection.
///
/// Row 0 conventionally holds header labels. The active cell is expected to be
/// inside `data` while the grid is non-empty; callers own that precondition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridState {
    pub data: Vec<Vec<String>>,
    pub selection: Selection,
}

impl GridState {
    pub fn new(data: Vec<Vec<String>>, active_cell: CellCoord) -> Self {
        Self {
            data,
            selection: Selection::at(active_cell),
        }
    }

    /// Builds a grid from string slices, handy for authoring and tests.
    pub fn from_rows<R, C>(rows: R, active_cell: CellCoord) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let data = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self::new(data, active_cell)
    }

    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    pub fn col_count(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    pub fn contains(&self, coord: CellCoord) -> bool {
        self.data
            .get(coord.row)
            .is_some_and(|row| coord.col < row.len())
    }

    pub fn cell(&self, coord: CellCoord) -> Option<&str> {
        self.data
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .map(String::as_str)
    }

    pub(crate) fn cell_mut(&mut self, coord: CellCoord) -> Option<&mut String> {
        self.data
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
    }
}
