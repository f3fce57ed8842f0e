//! Gridsim core: pure grid model, effect applicator and step projector.
mod apply;
mod effect;
mod project;
mod state;
mod style;
mod view_model;

pub use apply::apply_effect;
pub use effect::{ChallengeStep, GridAction, GridEffect};
pub use project::{project, project_after, project_at, project_before, Projection};
pub use state::{CellCoord, GridState, ParseCoordError, Selection};
pub use style::{BorderStyle, CellStyle, NumberFormat, StyleMap, CUT_OPACITY};
pub use view_model::{diff, CellChange, CellView, GridDiff, GridView};
