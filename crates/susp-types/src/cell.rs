use serde::{Deserialize, Serialize};

/// A single spreadsheet cell as delivered by the workbook reader.
///
/// Serialized untagged: numbers as JSON numbers, text as strings and empty
/// cells as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// True for non-empty text. Numbers are never labels, and neither is an
    /// empty string.
    pub fn is_label(&self) -> bool {
        matches!(self, CellValue::Text(s) if !s.is_empty())
    }

    /// The cell's text when it is a non-empty string.
    pub fn as_label(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Lenient float conversion. Numbers pass through, text is parsed after
    /// trimming, everything else is missing. Non-finite results are missing
    /// too.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            CellValue::Empty => None,
        };
        value.filter(|v| v.is_finite())
    }

    /// Trimmed textual rendering used for header matching. Empty cells
    /// render as "".
    pub fn header_text(&self) -> String {
        match self {
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

/// One row of cells. Rows may be ragged; missing trailing cells read as empty.
pub type Row = Vec<CellValue>;

/// The full 2D grid of one sheet.
pub type RawGrid = Vec<Row>;

/// Read a cell by column, treating out-of-range columns as empty.
pub fn cell_at(row: &[CellValue], col: usize) -> &CellValue {
    static EMPTY: CellValue = CellValue::Empty;
    row.get(col).unwrap_or(&EMPTY)
}

/// A named sheet and its grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: RawGrid,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: RawGrid) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_json_shapes() {
        let row: Row = serde_json::from_str(r#"[1.5, "CHAS", null, 18]"#).unwrap();
        assert_eq!(
            row,
            vec![
                CellValue::Number(1.5),
                CellValue::text("CHAS"),
                CellValue::Empty,
                CellValue::Number(18.0),
            ]
        );
        assert_eq!(serde_json::to_string(&CellValue::Empty).unwrap(), "null");
    }

    #[test]
    fn test_numeric_cast_policy() {
        assert_eq!(CellValue::Number(2.0).as_f64(), Some(2.0));
        assert_eq!(CellValue::text(" 12.5 ").as_f64(), Some(12.5));
        assert_eq!(CellValue::text("abc").as_f64(), None);
        assert_eq!(CellValue::Empty.as_f64(), None);
        assert_eq!(CellValue::text("nan").as_f64(), None);
        assert_eq!(CellValue::text("inf").as_f64(), None);
    }

    #[test]
    fn test_labels() {
        assert!(CellValue::text("Wheels").is_label());
        assert!(CellValue::text("123").is_label());
        assert!(!CellValue::text("").is_label());
        assert!(!CellValue::Number(3.0).is_label());
        assert!(!CellValue::Empty.is_label());
    }

    #[test]
    fn test_header_text() {
        assert_eq!(CellValue::text("  Left ").header_text(), "Left");
        assert_eq!(CellValue::Number(18.0).header_text(), "18");
        assert_eq!(CellValue::Empty.header_text(), "");
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let row = vec![CellValue::Number(1.0)];
        assert_eq!(cell_at(&row, 0), &CellValue::Number(1.0));
        assert!(cell_at(&row, 5).is_empty());
    }
}
