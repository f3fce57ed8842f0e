use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::CellCoord;

/// Opacity applied to cells marked by a cut.
pub const CUT_OPACITY: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    Currency,
}

/// Visual properties for one cell. `Default` means unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellStyle {
    pub bold: bool,
    pub border: Option<BorderStyle>,
    pub opacity: Option<f32>,
    pub number_format: Option<NumberFormat>,
}

impl CellStyle {
    /// True when the cell carries the cut marker.
    pub fn is_cut(&self) -> bool {
        self.border == Some(BorderStyle::Dashed)
    }
}

/// Per-cell styles keyed by coordinate. Entries only ever get added or
/// overwritten; there is no way to unstyle a cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleMap(BTreeMap<CellCoord, CellStyle>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, coord: CellCoord) -> Option<&CellStyle> {
        self.0.get(&coord)
    }

    /// Looks up a style by its `"row-col"` key. Malformed keys find nothing.
    pub fn get_by_key(&self, key: &str) -> Option<&CellStyle> {
        key.parse().ok().and_then(|coord| self.get(coord))
    }

    /// Existing entry for `coord`, or a fresh unstyled one.
    pub fn entry(&mut self, coord: CellCoord) -> &mut CellStyle {
        self.0.entry(coord).or_default()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, CellCoord, CellStyle> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a StyleMap {
    type Item = (&'a CellCoord, &'a CellStyle);
    type IntoIter = btree_map::Iter<'a, CellCoord, CellStyle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
