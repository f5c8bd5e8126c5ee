use susp_types::{cell_at, CellValue, Row, SideValues, WheelTable};
use tracing::debug;

use crate::columns::HeaderFrame;

/// Positional fallbacks for the known wheels layout, used when the header
/// labels are absent.
pub const DEFAULT_NAME_COLUMN: usize = 1;
pub const DEFAULT_LEFT_COLUMN: usize = 2;
pub const DEFAULT_RIGHT_COLUMN: usize = 6;

/// Parse a wheels parameter table into `name -> {left, right}`.
///
/// Values are kept exactly as read; numeric interpretation happens when the
/// wheels are built.
pub fn parse_wheels_block(rows: &[Row]) -> WheelTable {
    let frame = HeaderFrame::from_rows(rows);
    let name_idx = frame.position("Point Name").unwrap_or(DEFAULT_NAME_COLUMN);
    let left_idx = frame.position("Left").unwrap_or(DEFAULT_LEFT_COLUMN);
    let right_idx = frame.position("Right").unwrap_or(DEFAULT_RIGHT_COLUMN);

    let mut params = WheelTable::new();
    for row in rows.iter().skip(1) {
        if row.iter().all(CellValue::is_empty) {
            continue;
        }
        let Some(name) = cell_at(row, name_idx).as_label() else {
            debug!(?row, "skipping wheels row without a parameter name");
            continue;
        };
        params.insert(
            name.to_string(),
            SideValues::new(cell_at(row, left_idx).clone(), cell_at(row, right_idx).clone()),
        );
    }
    params
}
