use calamine::{open_workbook_auto, Data, Range, Reader};
use serde::Deserialize;
use std::path::Path;
use susp_types::{BlockData, CellValue, RawGrid, Row, Sheet, SheetSchema, WorkbookSchema};
use tracing::{debug, info, instrument};

use crate::blocks::{find_blocks, BlockKind};
use crate::error::WorkbookError;
use crate::points::parse_points_block;
use crate::wheels::parse_wheels_block;

/// An opened workbook: every sheet's grid, held in memory for one
/// extraction pass.
///
/// Rows are padded to the sheet's widest row so that every row has the same
/// number of cells, matching what spreadsheet readers hand out.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

/// On-disk grid document: `{"sheets": [{"name": ..., "rows": [[...]]}]}`.
#[derive(Debug, Deserialize)]
struct GridDocument {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn from_sheets(sheets: Vec<Sheet>) -> Self {
        Self {
            sheets: sheets.into_iter().map(pad_sheet).collect(),
        }
    }

    /// Parse a grid document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, WorkbookError> {
        let doc: GridDocument =
            serde_json::from_str(json).map_err(|e| WorkbookError::ParseError(e.to_string()))?;
        Ok(Self::from_sheets(doc.sheets))
    }

    /// Open a workbook from disk. `.json` files are read as grid documents,
    /// anything else (xlsx, xlsm, xls, ods) through the spreadsheet reader.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WorkbookError> {
        let path = path.as_ref();
        let is_grid_document = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let workbook = if is_grid_document {
            let json = std::fs::read_to_string(path).map_err(|e| read_error(path, e))?;
            Self::from_json(&json)?
        } else {
            Self::from_spreadsheet(path)?
        };
        info!(path = %path.display(), sheets = workbook.sheets.len(), "opened workbook");
        Ok(workbook)
    }

    /// Read every worksheet of a spreadsheet file in tab order. Formula
    /// cells yield their cached values.
    pub fn from_spreadsheet(path: &Path) -> Result<Self, WorkbookError> {
        let mut book = open_workbook_auto(path).map_err(|e| read_error(path, e))?;
        let mut sheets = Vec::new();
        for name in book.sheet_names() {
            let range = book
                .worksheet_range(&name)
                .map_err(|e| WorkbookError::Sheet {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            debug!(sheet = %name, rows = range.height(), "read worksheet");
            sheets.push(Sheet::new(name, grid_from_range(&range)));
        }
        Ok(Self::from_sheets(sheets))
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

fn read_error(path: &Path, e: impl std::fmt::Display) -> WorkbookError {
    WorkbookError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Lay a worksheet range out on the sheet's own coordinates. The reader
/// trims leading empty rows and columns; they are restored so column
/// indices match the spreadsheet.
fn grid_from_range(range: &Range<Data>) -> RawGrid {
    let Some((first_row, first_col)) = range.start() else {
        return RawGrid::new();
    };
    let mut grid: RawGrid = (0..first_row).map(|_| Row::new()).collect();
    grid.extend(range.rows().map(|cells| {
        let mut row = vec![CellValue::Empty; first_col as usize];
        row.extend(cells.iter().map(cell_from_data));
        row
    }));
    grid
}

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::Empty => CellValue::Empty,
        // error cells (#DIV/0!, #REF!) and ISO strings carry no usable value
        _ => CellValue::Empty,
    }
}

fn pad_sheet(mut sheet: Sheet) -> Sheet {
    let width = sheet.rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut sheet.rows {
        row.resize(width, CellValue::Empty);
    }
    sheet
}

/// Setup sheets carry vehicle-level values rather than point tables.
pub fn is_setup_sheet(name: &str) -> bool {
    name.to_lowercase().contains("setup")
}

/// Extract the normalized schema of one sheet.
#[instrument(skip(grid), fields(rows = grid.len()))]
pub fn extract_sheet(grid: &RawGrid) -> SheetSchema {
    let mut schema = SheetSchema::new();
    for block in find_blocks(grid) {
        let data = match block.kind() {
            BlockKind::Wheels => BlockData::Parameters(parse_wheels_block(block.rows)),
            BlockKind::Points => BlockData::Points(parse_points_block(block.rows)),
            BlockKind::Ignored => {
                debug!(block = %block.name, start = block.start, "ignoring block without point names");
                continue;
            }
        };
        debug!(block = %block.name, entries = data.len(), "parsed block");
        schema.insert(block.name, data);
    }
    schema
}

/// Extract every sheet of the workbook, keyed by sheet name.
#[instrument(skip(workbook))]
pub fn extract_workbook(workbook: &Workbook) -> WorkbookSchema {
    let schemas: WorkbookSchema = workbook
        .sheets()
        .iter()
        .map(|sheet| (sheet.name.clone(), extract_sheet(&sheet.rows)))
        .collect();
    info!(sheets = schemas.len(), "extracted workbook");
    schemas
}
