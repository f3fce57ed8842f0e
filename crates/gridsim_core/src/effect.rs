#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction {
    /// Select every column in the active cell's row.
    SelectRow,
    /// Select every row in the active cell's column.
    SelectColumn,
    /// Select every cell in the grid.
    SelectAll,
    /// Remove the selected rows, or the active row.
    DeleteRow,
    /// Mark the effective selection as pending removal.
    Cut,
    /// Embolden the effective selection.
    ApplyStyleBold,
    /// Reformat numeric cells in the effective selection as dollars.
    ApplyStyleCurrency,
    /// Tag outside the known vocabulary; applies as a no-op.
    Unrecognized(String),
}

impl GridAction {
    /// Maps an authoring tag to an action. Unknown tags are kept, not rejected.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "SELECT_ROW" => Self::SelectRow,
            "SELECT_COLUMN" => Self::SelectColumn,
            "SELECT_ALL" => Self::SelectAll,
            "DELETE_ROW" => Self::DeleteRow,
            "CUT" => Self::Cut,
            "APPLY_STYLE_BOLD" => Self::ApplyStyleBold,
            "APPLY_STYLE_CURRENCY" => Self::ApplyStyleCurrency,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::SelectRow => "SELECT_ROW",
            Self::SelectColumn => "SELECT_COLUMN",
            Self::SelectAll => "SELECT_ALL",
            Self::DeleteRow => "DELETE_ROW",
            Self::Cut => "CUT",
            Self::ApplyStyleBold => "APPLY_STYLE_BOLD",
            Self::ApplyStyleCurrency => "APPLY_STYLE_CURRENCY",
            Self::Unrecognized(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridEffect {
    pub action: GridAction,
}

impl GridEffect {
    pub fn new(action: GridAction) -> Self {
        Self { action }
    }
}

/// One step of a challenge. Steps without a grid effect leave the grid alone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChallengeStep {
    pub instruction: String,
    pub keys: Vec<String>,
    pub grid_effect: Option<GridEffect>,
}

impl ChallengeStep {
    pub fn with_action(action: GridAction) -> Self {
        Self {
            grid_effect: Some(GridEffect::new(action)),
            ..Self::default()
        }
    }
}
