use serde::{Deserialize, Serialize};

/// Opaque handle to a solid in the geometry kernel.
/// NEVER persisted. Valid only for the current kernel session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KernelSolidHandle(pub(crate) u64);

impl KernelSolidHandle {
    pub(crate) fn id(&self) -> u64 {
        self.0
    }
}

/// Errors from kernel operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("primitive construction failed: {reason}")]
    PrimitiveFailed { reason: String },

    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    #[error("solid not found: {id}")]
    SolidNotFound { id: u64 },

    #[error("STEP export failed: {reason}")]
    StepExportFailed { reason: String },
}

impl KernelError {
    pub(crate) fn not_found(handle: &KernelSolidHandle) -> Self {
        KernelError::SolidNotFound { id: handle.id() }
    }
}

/// RGB color, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Check that a dimension is strictly positive and finite.
pub(crate) fn require_positive(what: &str, value: f64) -> Result<(), KernelError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(KernelError::InvalidParameter {
            reason: format!("{what} must be positive, got {value}"),
        })
    }
}

/// Validate tube dimensions: both radii positive, bore strictly inside.
pub(crate) fn require_tube(outer: f64, inner: f64, height: f64) -> Result<(), KernelError> {
    require_positive("outer radius", outer)?;
    require_positive("inner radius", inner)?;
    require_positive("height", height)?;
    if inner >= outer {
        return Err(KernelError::InvalidParameter {
            reason: format!("bore radius {inner} must be smaller than outer radius {outer}"),
        });
    }
    Ok(())
}
