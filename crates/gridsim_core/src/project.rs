use engine_logging::engine_debug;

use crate::view_model::GridView;
use crate::{apply_effect, ChallengeStep, GridState, StyleMap};

/// Grid state and styles visible at some point of a step sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projection {
    pub grid: GridState,
    pub styles: StyleMap,
}

impl Projection {
    pub fn view(&self) -> GridView {
        GridView::build(&self.grid, &self.styles)
    }
}

/// Replays `steps[0..=target]` from a copy of `initial`.
///
/// `None` means before any step: the untouched grid with no styles. A target
/// past the end of `steps` is clamped to the last step.
pub fn project(
    steps: &[ChallengeStep],
    initial: &GridState,
    target: Option<usize>,
) -> Projection {
    let start = Projection {
        grid: initial.clone(),
        styles: StyleMap::new(),
    };
    let Some(target) = target else {
        return start;
    };

    let take = target.saturating_add(1);
    if take > steps.len() {
        engine_debug!(
            "Projection target {target} beyond {} steps, applying all",
            steps.len()
        );
    }

    steps
        .iter()
        .take(take)
        .fold(start, |Projection { grid, styles }, step| {
            let (grid, styles) = apply_effect(&grid, &styles, step);
            Projection { grid, styles }
        })
}

/// Index-based form: any negative index means before any step.
pub fn project_at(steps: &[ChallengeStep], initial: &GridState, index: isize) -> Projection {
    project(steps, initial, usize::try_from(index).ok())
}

pub fn project_before(initial: &GridState) -> Projection {
    project(&[], initial, None)
}

/// State after every step has been applied.
pub fn project_after(steps: &[ChallengeStep], initial: &GridState) -> Projection {
    project(steps, initial, steps.len().checked_sub(1))
}
