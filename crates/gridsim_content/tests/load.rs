use std::fs;
use std::path::Path;
use std::sync::Once;

use gridsim_content::{
    load_challenge, parse_challenge_json, parse_challenge_ron, save_challenge, ChallengeFormat,
    ContentError,
};
use gridsim_core::{CellCoord, GridAction};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

const PRICE_LIST: &str = r#"{
  "id": "price-list",
  "title": "Currency",
  "initialGridState": {
    "data": [["Name", "Price"], ["Widget", "10"], ["Gadget", "20.5"]],
    "selection": { "activeCell": { "row": 1, "col": 1 } }
  },
  "steps": [
    { "instruction": "Format", "keys": ["Ctrl", "Shift", "4"],
      "gridEffect": { "action": "APPLY_STYLE_CURRENCY" } },
    { "instruction": "Just look" },
    { "gridEffect": { "action": "APPLY_STYLE_ITALIC" } }
  ]
}"#;

fn challenge_json(data: &str, active: &str, selected: &str) -> String {
    format!(
        r#"{{"id": "x", "title": "x", "initialGridState": {{"data": {data},
            "selection": {{"activeCell": {active}, "selectedCells": {selected}}}}}}}"#
    )
}

#[test]
fn json_challenge_converts_to_engine_steps() {
    init_logging();
    let challenge = parse_challenge_json(PRICE_LIST).unwrap();

    assert_eq!(challenge.id, "price-list");
    assert_eq!(challenge.description, None);
    assert_eq!(challenge.initial.selection.active_cell, CellCoord::new(1, 1));
    assert!(challenge.initial.selection.selected_cells.is_empty());
    assert_eq!(challenge.steps.len(), 3);
    assert_eq!(challenge.steps[0].keys, ["Ctrl", "Shift", "4"]);
    assert_eq!(
        challenge.steps[0].grid_effect.as_ref().map(|e| &e.action),
        Some(&GridAction::ApplyStyleCurrency)
    );
    assert_eq!(challenge.steps[1].grid_effect, None);
    assert_eq!(challenge.unrecognized_actions(), vec![(2, "APPLY_STYLE_ITALIC")]);
}

#[test]
fn loaded_challenge_projects_before_and_after() {
    init_logging();
    let challenge = parse_challenge_json(PRICE_LIST).unwrap();

    let before = challenge.before();
    let after = challenge.after();

    assert_eq!(before.grid, challenge.initial);
    assert!(before.styles.is_empty());
    assert_eq!(after.grid.data[1][1], "$10.00");
    assert!(after.styles.get_by_key("1-1").is_some());
    assert_eq!(challenge.at(-1), before);
    assert_eq!(challenge.at(2), after);
}

#[test]
fn selected_cell_keys_are_parsed() {
    init_logging();
    let json = challenge_json(
        r#"[["a", "b"], ["c", "d"]]"#,
        r#"{"row": 0, "col": 0}"#,
        r#"["1-0", "1-1"]"#,
    );
    let challenge = parse_challenge_json(&json).unwrap();

    let selected: Vec<CellCoord> = challenge
        .initial
        .selection
        .selected_cells
        .iter()
        .copied()
        .collect();
    assert_eq!(selected, vec![CellCoord::new(1, 0), CellCoord::new(1, 1)]);
}

#[test]
fn invalid_grids_are_rejected() {
    init_logging();
    let cases = [
        challenge_json("[]", r#"{"row": 0, "col": 0}"#, "[]"),
        challenge_json(r#"[["a", "b"], ["c"]]"#, r#"{"row": 0, "col": 0}"#, "[]"),
        challenge_json(r#"[["a", "b"]]"#, r#"{"row": 1, "col": 0}"#, "[]"),
        challenge_json(r#"[["a", "b"]]"#, r#"{"row": 0, "col": 0}"#, r#"["0:1"]"#),
    ];

    let errors: Vec<ContentError> = cases
        .iter()
        .map(|json| parse_challenge_json(json).unwrap_err())
        .collect();

    assert!(matches!(errors[0], ContentError::EmptyGrid));
    assert!(matches!(
        errors[1],
        ContentError::NonRectangular {
            row: 1,
            expected: 2,
            actual: 1
        }
    ));
    assert!(matches!(
        errors[2],
        ContentError::ActiveCellOutOfBounds { rows: 1, cols: 2, .. }
    ));
    assert!(matches!(errors[3], ContentError::BadCellKey(_)));
    assert_eq!(errors[2].to_string(), "active cell 1-0 outside 1x2 grid");
}

#[test]
fn malformed_json_is_a_json_error() {
    init_logging();
    let err = parse_challenge_json("{ not json").unwrap_err();
    assert!(matches!(err, ContentError::Json(_)));
}

#[test]
fn ron_challenge_parses() {
    init_logging();
    let ron = r#"(
        id: "bold",
        title: "Bold header",
        initialGridState: (
            data: [["Name", "Price"], ["Widget", "10"]],
            selection: (activeCell: (row: 0, col: 0), selectedCells: ["0-0", "0-1"]),
        ),
        steps: [(keys: ["Ctrl", "B"], gridEffect: Some((action: "APPLY_STYLE_BOLD")))],
    )"#;

    let challenge = parse_challenge_ron(ron).unwrap();
    let after = challenge.after();

    assert_eq!(after.styles.len(), 2);
    assert!(after.styles.get_by_key("0-1").is_some_and(|s| s.bold));
}

#[test]
fn format_follows_extension() {
    assert_eq!(
        ChallengeFormat::from_path(Path::new("a/b.JSON")).unwrap(),
        ChallengeFormat::Json
    );
    assert_eq!(
        ChallengeFormat::from_path(Path::new("b.ron")).unwrap(),
        ChallengeFormat::Ron
    );
    assert!(matches!(
        ChallengeFormat::from_path(Path::new("b.yaml")),
        Err(ContentError::UnsupportedFormat(_))
    ));
}

#[test]
fn challenge_saved_as_ron_loads_back_identically() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let challenge = parse_challenge_json(PRICE_LIST).unwrap();
    let path = temp.path().join("price-list.ron");

    save_challenge(&path, &challenge).unwrap();
    let loaded = load_challenge(&path).unwrap();

    assert_eq!(loaded, challenge);
}

#[test]
fn save_replaces_existing_file() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("challenge.json");
    fs::write(&path, "stale").unwrap();
    let challenge = parse_challenge_json(PRICE_LIST).unwrap();

    save_challenge(&path, &challenge).unwrap();

    assert_eq!(load_challenge(&path).unwrap(), challenge);
}

#[test]
fn missing_file_reports_path() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.json");

    let err = load_challenge(&path).unwrap_err();

    assert!(matches!(err, ContentError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn bundled_challenges_load() {
    init_logging();
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../challenges");

    let delete_row = load_challenge(&root.join("delete-row.json")).unwrap();
    let after = delete_row.after();
    assert_eq!(after.grid.row_count(), 3);
    assert_eq!(after.grid.cell(CellCoord::new(2, 0)), Some("Gizmo"));

    let currency = load_challenge(&root.join("currency.ron")).unwrap();
    let after = currency.after();
    assert_eq!(after.grid.cell(CellCoord::new(2, 1)), Some("$20.50"));
    assert_eq!(after.grid.cell(CellCoord::new(3, 1)), Some("N/A"));
    assert!(after.styles.get_by_key("3-1").is_some_and(|s| s.bold));
}
