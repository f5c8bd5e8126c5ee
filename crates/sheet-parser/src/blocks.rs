use susp_types::{cell_at, Row};

/// Header label marking a table of named points or parameters.
pub const POINT_NAME: &str = "Point Name";

/// A labelled run of rows within a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Block<'a> {
    /// Trimmed text of the label cell.
    pub name: String,
    /// Row index of the label row within the sheet.
    pub start: usize,
    /// The block's rows, label row first.
    pub rows: &'a [Row],
}

/// How a block's content is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Wheel parameter table (`left`/`right` values per parameter).
    Wheels,
    /// Point coordinate table.
    Points,
    /// Anything else. Not part of the normalized schema.
    Ignored,
}

impl Block<'_> {
    /// Trimmed header texts of the block's first row.
    pub fn header(&self) -> Vec<String> {
        header_texts(self.rows.first().map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Classify the block. Wheels takes precedence over generic points.
    pub fn kind(&self) -> BlockKind {
        let has_point_name = self.header().iter().any(|h| h == POINT_NAME);
        if !has_point_name {
            BlockKind::Ignored
        } else if self.name.to_lowercase().starts_with("wheels") {
            BlockKind::Wheels
        } else {
            BlockKind::Points
        }
    }
}

/// Trimmed header texts of a row.
pub fn header_texts(row: &[susp_types::CellValue]) -> Vec<String> {
    row.iter().map(|c| c.header_text()).collect()
}

/// Split a sheet into blocks in a single pass.
///
/// A block starts at every row whose column-0 cell is non-empty text and
/// runs until the next such row. Rows before the first label are dropped.
pub fn find_blocks(rows: &[Row]) -> Vec<Block<'_>> {
    let starts: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| cell_at(row, 0).is_label())
        .map(|(idx, _)| idx)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(rows.len());
            Block {
                name: cell_at(&rows[start], 0).header_text(),
                start,
                rows: &rows[start..end],
            }
        })
        .collect()
}
