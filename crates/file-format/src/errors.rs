use std::path::PathBuf;

/// Errors while reading the suspension documents.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("required file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("failed to read {}: {reason}", path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to parse {}: {reason}", path.display())]
    ParseError { path: PathBuf, reason: String },
}

/// Errors while writing extracted documents.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveError {
    #[error("failed to write {}: {reason}", path.display())]
    WriteFailed { path: PathBuf, reason: String },

    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// Errors during STEP export.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    #[error("kernel error: {0}")]
    Kernel(#[from] solid_kernel::KernelError),

    #[error("STEP export failed: {0}")]
    StepExportFailed(String),

    #[error("no solid available for export")]
    NoSolid,

    #[error("failed to write {}: {reason}", path.display())]
    WriteFailed { path: PathBuf, reason: String },
}
