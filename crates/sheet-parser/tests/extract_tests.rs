use proptest::prelude::*;
use sheet_parser::{
    extract_sheet, extract_workbook, find_blocks, parse_points_block, parse_reference_distance,
    parse_wheels_block, Workbook,
};
use susp_types::{BlockData, CellValue, Row, Sheet, SideValues};

// ── Helpers ──────────────────────────────────────────────────────────────

fn n(v: f64) -> CellValue {
    CellValue::Number(v)
}

fn t(s: &str) -> CellValue {
    CellValue::text(s)
}

const E: CellValue = CellValue::Empty;

// ── Reference scenarios ──────────────────────────────────────────────────

#[test]
fn test_wheels_block_scenario() {
    let rows: Vec<Row> = vec![
        vec![t("Wheels Block"), t("Point Name"), t("Left"), t(""), t(""), t(""), t("Right")],
        vec![t("Wheels"), t("TireDia"), n(18.0), E, E, E, n(16.0)],
    ];
    let params = parse_wheels_block(&rows);
    assert_eq!(params.len(), 1);
    assert_eq!(params["TireDia"], SideValues::new(18.0, 16.0));

    let json = serde_json::to_value(&params).unwrap();
    assert_eq!(json, serde_json::json!({"TireDia": {"left": 18.0, "right": 16.0}}));
}

#[test]
fn test_wheels_scenario_through_sheet_extraction_splits_blocks() {
    // A label in column 0 of the data row starts its own block.
    let rows: Vec<Row> = vec![
        vec![t("Wheels Block"), t("Point Name"), t("Left"), t(""), t(""), t(""), t("Right")],
        vec![t("Wheels"), t("TireDia"), n(18.0), E, E, E, n(16.0)],
    ];
    assert_eq!(find_blocks(&rows).len(), 2);
    let schema = extract_sheet(&rows);
    assert_eq!(schema.len(), 1);
    assert!(schema.get("Wheels Block").unwrap().is_empty());
}

#[test]
fn test_points_block_scenario() {
    let rows: Vec<Row> = vec![
        vec![t("Susp"), t("Point Name"), t("Left"), t("Right")],
        vec![t(""), t(""), t("X"), t("Y"), t("Z"), t("X"), t("Y"), t("Z")],
        vec![t(""), t("CHAS_UppFor"), n(100.0), n(200.0), n(50.0), n(100.0), n(-200.0), n(50.0)],
    ];
    let schema = extract_sheet(&rows);
    let points = schema.get("Susp").and_then(BlockData::points).unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points["CHAS_UppFor_L"], [100.0, 200.0, 50.0]);
    assert_eq!(points["CHAS_UppFor_R"], [100.0, -200.0, 50.0]);
}

#[test]
fn test_reference_distance_scenario() {
    let wb = Workbook::from_sheets(vec![
        Sheet::new("Front Suspension", vec![vec![t("Susp"), t("Point Name")]]),
        Sheet::new(
            "Setup",
            vec![
                vec![E, E, E, E],
                vec![E, E, t("Reference distance"), n(1600.0)],
            ],
        ),
    ]);
    let setup = parse_reference_distance(&wb);
    assert_eq!(setup.reference_distance, Some(1600.0));
    assert_eq!(
        serde_json::to_string(&setup).unwrap(),
        r#"{"Reference distance":1600.0}"#
    );
}

#[test]
fn test_setup_sheets_take_priority() {
    let wb = Workbook::from_sheets(vec![
        Sheet::new("Notes", vec![vec![t("reference distance"), n(1.0)]]),
        Sheet::new("Vehicle Setup", vec![vec![t("Reference distance [mm]"), n(1530.0)]]),
    ]);
    assert_eq!(parse_reference_distance(&wb).reference_distance, Some(1530.0));
}

#[test]
fn test_reference_distance_falls_back_to_any_sheet() {
    let wb = Workbook::from_sheets(vec![
        Sheet::new("Setup", vec![vec![t("Mass"), n(250.0)]]),
        Sheet::new("Other", vec![vec![E, t("REFERENCE DISTANCE"), t("1600")]]),
    ]);
    assert_eq!(parse_reference_distance(&wb).reference_distance, Some(1600.0));
}

#[test]
fn test_reference_distance_absent() {
    let wb = Workbook::from_sheets(vec![Sheet::new("Setup", vec![vec![t("Mass"), n(1.0)]])]);
    assert_eq!(parse_reference_distance(&wb).reference_distance, None);
}

// ── Layout behaviour ─────────────────────────────────────────────────────

#[test]
fn test_data_start_depends_on_subheader() {
    let with_sub: Vec<Row> = vec![
        vec![t("B"), t("Point Name"), t("Left")],
        vec![E, t("P"), t("X"), t("Y"), t("Z")],
        vec![E, t("Q"), n(1.0), n(2.0), n(3.0)],
    ];
    let points = parse_points_block(&with_sub);
    // Row 1 is consumed as a subheader, so "P" is not a point.
    assert!(!points.contains_key("P_L"));
    assert_eq!(points["Q_L"], [1.0, 2.0, 3.0]);

    let without_sub: Vec<Row> = vec![
        vec![t("B"), t("Point Name"), t("Left")],
        vec![E, t("P"), E, n(4.0), n(5.0), n(6.0)],
    ];
    let points = parse_points_block(&without_sub);
    assert_eq!(points["P_L"], [4.0, 5.0, 6.0]);
}

#[test]
fn test_right_column_present_but_empty_is_zero_not_mirrored() {
    let rows: Vec<Row> = vec![
        vec![t("B"), t("Point Name"), t("Left"), E, E, t("Right"), E, E],
        vec![E, E, t("X"), t("Y"), t("Z"), t("X"), t("Y"), t("Z")],
        vec![E, t("P"), n(1.0), n(2.0), n(3.0), n(1.0), E, n(3.0)],
    ];
    let points = parse_points_block(&rows);
    assert_eq!(points["P_R"], [1.0, 0.0, 3.0]);
}

#[test]
fn test_non_point_blocks_are_ignored() {
    let rows: Vec<Row> = vec![
        vec![t("Comments"), t("anything")],
        vec![E, n(1.0)],
        vec![t("Susp"), t("Point Name"), t("Left")],
        vec![E, t("P"), E, n(1.0), n(2.0), n(3.0)],
    ];
    let schema = extract_sheet(&rows);
    assert_eq!(schema.len(), 1);
    assert!(schema.get("Comments").is_none());
}

#[test]
fn test_wheels_precedence_over_points() {
    let rows: Vec<Row> = vec![
        vec![t("Wheels"), t("Point Name"), t("Left"), E, E, E, t("Right")],
        vec![E, t("Tire Diameter"), n(520.0), E, E, E, n(520.0)],
    ];
    let schema = extract_sheet(&rows);
    let wheels = schema.wheels().unwrap();
    assert_eq!(wheels["Tire Diameter"].right, n(520.0));
}

#[test]
fn test_extract_workbook_covers_every_sheet() {
    let wb = Workbook::from_json(
        r#"{"sheets": [
            {"name": "Front Suspension", "rows": [
                ["Double A-Arm", "Point Name", "Left"],
                [null, "CHAS_LowFor", null, 1, 2, 3]
            ]},
            {"name": "Setup", "rows": [["Reference distance", 1600]]}
        ]}"#,
    )
    .unwrap();
    let all = extract_workbook(&wb);
    assert_eq!(all.len(), 2);
    let front = &all["Front Suspension"];
    assert_eq!(front.find_point("CHAS_LowFor_R"), Some([1.0, 2.0, 3.0]));
    assert!(all["Setup"].is_empty());
}

// ── Properties ───────────────────────────────────────────────────────────

fn arb_cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Empty),
        (-1000.0f64..1000.0).prop_map(CellValue::Number),
        "[A-Za-z ]{0,6}".prop_map(CellValue::Text),
        Just(CellValue::text("Point Name")),
        Just(CellValue::text("Left")),
        Just(CellValue::text("Right")),
        Just(CellValue::text("X")),
        Just(CellValue::text("Y")),
        Just(CellValue::text("Z")),
    ]
}

fn arb_grid() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(prop::collection::vec(arb_cell(), 0..9), 0..12)
}

proptest! {
    #[test]
    fn block_count_equals_label_rows(grid in arb_grid()) {
        let labels = grid
            .iter()
            .filter(|row| row.first().is_some_and(CellValue::is_label))
            .count();
        prop_assert_eq!(find_blocks(&grid).len(), labels);
    }

    #[test]
    fn extraction_is_idempotent(grid in arb_grid()) {
        prop_assert_eq!(extract_sheet(&grid), extract_sheet(&grid));
    }

    #[test]
    fn stored_coordinates_are_always_finite(grid in arb_grid()) {
        let schema = extract_sheet(&grid);
        for (_, _, xyz) in schema.points() {
            prop_assert!(xyz.iter().all(|c| c.is_finite()));
        }
    }

    #[test]
    fn right_mirrors_left_without_right_header(
        coords in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0, -500.0f64..500.0), 1..6),
    ) {
        let mut rows: Vec<Row> = vec![vec![t("Susp"), t("Point Name"), t("Left")]];
        for (i, (x, y, z)) in coords.iter().enumerate() {
            rows.push(vec![E, t(&format!("P{i}")), E, n(*x), n(*y), n(*z)]);
        }
        let points = parse_points_block(&rows);
        for i in 0..coords.len() {
            prop_assert_eq!(points[&format!("P{i}_L")], points[&format!("P{i}_R")]);
        }
    }
}
