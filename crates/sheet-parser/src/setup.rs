use susp_types::{CellValue, Sheet, VehicleSetup};
use tracing::{info, instrument, warn};

use crate::workbook::{is_setup_sheet, Workbook};

const REFERENCE_DISTANCE: &str = "reference distance";

/// Find the vehicle's reference distance (wheelbase).
///
/// Setup sheets are searched first, then every sheet. The value is the cell
/// to the right of the first "Reference distance" label; a neighbour that is
/// not numeric yields `None`. No label at all also yields `None`.
#[instrument(skip(workbook), fields(sheets = workbook.sheets().len()))]
pub fn parse_reference_distance(workbook: &Workbook) -> VehicleSetup {
    let setup_sheets = workbook.sheets().iter().filter(|s| is_setup_sheet(&s.name));
    let found = setup_sheets
        .chain(workbook.sheets().iter())
        .find_map(|sheet| find_in_sheet(sheet).map(|value| (sheet.name.as_str(), value)));

    match found {
        Some((sheet, value)) => {
            info!(sheet, ?value, "found reference distance");
            VehicleSetup::new(value)
        }
        None => {
            warn!("no reference distance in workbook");
            VehicleSetup::default()
        }
    }
}

/// `Some(value)` for the first labelled cell that has a right-hand
/// neighbour, where `value` is the neighbour's numeric cast.
fn find_in_sheet(sheet: &Sheet) -> Option<Option<f64>> {
    sheet.rows.iter().find_map(|row| {
        row.iter().enumerate().find_map(|(i, cell)| match cell {
            CellValue::Text(s) if s.to_lowercase().contains(REFERENCE_DISTANCE) => {
                row.get(i + 1).map(CellValue::as_f64)
            }
            _ => None,
        })
    })
}
