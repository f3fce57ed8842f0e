use std::io;
use std::path::PathBuf;

use gridsim_core::{CellCoord, ParseCoordError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid challenge json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid challenge ron: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("failed to serialize challenge as ron: {0}")]
    RonWrite(#[from] ron::Error),
    #[error("unsupported challenge format for {}, expected .json or .ron", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("challenge grid has no rows")]
    EmptyGrid,
    #[error("row {row} has {actual} cells, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("active cell {coord} outside {rows}x{cols} grid")]
    ActiveCellOutOfBounds {
        coord: CellCoord,
        rows: usize,
        cols: usize,
    },
    #[error("bad selected cell: {0}")]
    BadCellKey(#[from] ParseCoordError),
}
