/// Errors while opening a workbook. Cell content never produces an error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WorkbookError {
    #[error("failed to read workbook {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("failed to read worksheet {name}: {reason}")]
    Sheet { name: String, reason: String },

    #[error("failed to parse workbook grid: {0}")]
    ParseError(String),
}
