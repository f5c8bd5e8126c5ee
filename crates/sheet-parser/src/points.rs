use susp_types::{cell_at, CellValue, PointTable, Row};
use tracing::debug;

use crate::columns::{Axis, AxisColumns, HeaderFrame, PointLayout};

/// Parse a point table into `<name>_L` / `<name>_R` coordinate entries.
///
/// Missing or non-numeric coordinates become `0.0`. When the right side
/// has no column for an axis, that axis mirrors the left value.
pub fn parse_points_block(rows: &[Row]) -> PointTable {
    let frame = HeaderFrame::from_rows(rows);
    let layout = PointLayout::infer(&frame);
    debug!(?layout, "inferred point table layout");

    let mut points = PointTable::new();
    for row in rows.iter().skip(layout.data_start) {
        if row.iter().all(CellValue::is_empty) {
            continue;
        }
        let Some(name) = cell_at(row, layout.name).as_label() else {
            debug!(?row, "skipping row without a point name");
            continue;
        };

        let left = read_side(row, &layout.left, [None; 3]);
        let right = read_side(row, &layout.right, left);

        points.insert(format!("{name}_L"), normalize(left));
        points.insert(format!("{name}_R"), normalize(right));
    }
    points
}

/// Read one side's coordinates. Axes whose column is unresolved or beyond
/// the end of the row take the matching `fallback` value instead.
fn read_side(row: &[CellValue], columns: &AxisColumns, fallback: [Option<f64>; 3]) -> [Option<f64>; 3] {
    [Axis::X, Axis::Y, Axis::Z].map(|axis| {
        match columns.get(axis).and_then(|idx| row.get(idx)) {
            Some(cell) => cell.as_f64(),
            None => fallback[axis.offset()],
        }
    })
}

fn normalize(coords: [Option<f64>; 3]) -> [f64; 3] {
    coords.map(|c| c.unwrap_or(0.0))
}
