use std::collections::BTreeSet;

use gridsim_core::{
    project_after, project_at, project_before, CellCoord, ChallengeStep, GridAction, GridEffect,
    GridState, Projection, Selection,
};

use crate::types::{
    ChallengeFile, CoordFile, GridEffectFile, GridStateFile, SelectionFile, StepFile,
};
use crate::ContentError;

/// A validated challenge ready for projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub initial: GridState,
    pub steps: Vec<ChallengeStep>,
}

impl Challenge {
    /// Grid before any step, with no styling.
    pub fn before(&self) -> Projection {
        project_before(&self.initial)
    }

    /// Grid after every step.
    pub fn after(&self) -> Projection {
        project_after(&self.steps, &self.initial)
    }

    pub fn at(&self, index: isize) -> Projection {
        project_at(&self.steps, &self.initial, index)
    }

    /// `(step index, tag)` for every step whose action the engine ignores.
    pub fn unrecognized_actions(&self) -> Vec<(usize, &str)> {
        self.steps
            .iter()
            .enumerate()
            .filter_map(|(index, step)| match step.grid_effect.as_ref()?.action {
                GridAction::Unrecognized(ref tag) => Some((index, tag.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl TryFrom<ChallengeFile> for Challenge {
    type Error = ContentError;

    fn try_from(file: ChallengeFile) -> Result<Self, Self::Error> {
        let initial = grid_from_file(file.initial_grid_state)?;
        let steps = file
            .steps
            .into_iter()
            .map(|step| ChallengeStep {
                instruction: step.instruction,
                keys: step.keys,
                grid_effect: step
                    .grid_effect
                    .map(|effect| GridEffect::new(GridAction::from_tag(&effect.action))),
            })
            .collect();
        Ok(Self {
            id: file.id,
            title: file.title,
            description: file.description,
            initial,
            steps,
        })
    }
}

impl From<&Challenge> for ChallengeFile {
    fn from(challenge: &Challenge) -> Self {
        let selection = &challenge.initial.selection;
        Self {
            id: challenge.id.clone(),
            title: challenge.title.clone(),
            description: challenge.description.clone(),
            initial_grid_state: GridStateFile {
                data: challenge.initial.data.clone(),
                selection: SelectionFile {
                    active_cell: CoordFile {
                        row: selection.active_cell.row,
                        col: selection.active_cell.col,
                    },
                    selected_cells: selection.selected_cells.iter().map(CellCoord::key).collect(),
                },
            },
            steps: challenge
                .steps
                .iter()
                .map(|step| StepFile {
                    instruction: step.instruction.clone(),
                    keys: step.keys.clone(),
                    grid_effect: step.grid_effect.as_ref().map(|effect| GridEffectFile {
                        action: effect.action.tag().to_string(),
                    }),
                })
                .collect(),
        }
    }
}

/// Checks the preconditions the engine relies on and builds the grid.
fn grid_from_file(file: GridStateFile) -> Result<GridState, ContentError> {
    let expected = file.data.first().map(Vec::len).ok_or(ContentError::EmptyGrid)?;
    if let Some((row, cells)) = file
        .data
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != expected)
    {
        return Err(ContentError::NonRectangular {
            row,
            expected,
            actual: cells.len(),
        });
    }

    let CoordFile { row, col } = file.selection.active_cell;
    let active_cell = CellCoord::new(row, col);
    let grid_rows = file.data.len();
    if active_cell.row >= grid_rows || active_cell.col >= expected {
        return Err(ContentError::ActiveCellOutOfBounds {
            coord: active_cell,
            rows: grid_rows,
            cols: expected,
        });
    }

    let selected_cells = file
        .selection
        .selected_cells
        .iter()
        .map(|key| key.parse::<CellCoord>())
        .collect::<Result<BTreeSet<CellCoord>, _>>()?;

    Ok(GridState {
        data: file.data,
        selection: Selection {
            active_cell,
            selected_cells,
        },
    })
}
