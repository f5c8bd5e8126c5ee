use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sheet_parser::is_setup_sheet;
use susp_types::{VehicleSetup, WorkbookSchema};
use tracing::{debug, info, instrument};

use crate::errors::SaveError;

pub const VEHICLE_SETUP_FILE: &str = "Vehicle_Setup.json";

/// File name for a sheet's document: spaces become underscores.
pub fn sheet_file_name(sheet: &str) -> String {
    format!("{}.json", sheet.replace(' ', "_"))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), SaveError> {
    let text =
        serde_json::to_string_pretty(value).map_err(|e| SaveError::Serialize(e.to_string()))?;
    fs::write(path, text).map_err(|e| SaveError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<(), SaveError> {
    fs::create_dir_all(dir).map_err(|e| SaveError::WriteFailed {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write one pretty-printed JSON file per sheet into `dir`, creating it if
/// needed. Setup sheets are skipped. Returns the number of files written.
#[instrument(skip(schema), fields(sheets = schema.len()))]
pub fn save_sheets(dir: &Path, schema: &WorkbookSchema) -> Result<usize, SaveError> {
    ensure_dir(dir)?;
    let mut written = 0;
    for (sheet, data) in schema {
        if is_setup_sheet(sheet) {
            debug!(%sheet, "setup sheet not written");
            continue;
        }
        let path = dir.join(sheet_file_name(sheet));
        write_json(&path, data)?;
        debug!(path = %path.display(), blocks = data.len(), "sheet written");
        written += 1;
    }
    info!(written, "saved sheet documents");
    Ok(written)
}

/// Write `Vehicle_Setup.json` into `dir` and return its path.
pub fn save_vehicle_setup(dir: &Path, setup: &VehicleSetup) -> Result<PathBuf, SaveError> {
    ensure_dir(dir)?;
    let path = dir.join(VEHICLE_SETUP_FILE);
    write_json(&path, setup)?;
    info!(path = %path.display(), "saved vehicle setup");
    Ok(path)
}
