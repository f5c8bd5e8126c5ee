use solid_kernel::KernelError;
use susp_types::Side;

/// Errors from building suspension geometry.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GeometryError {
    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),

    #[error("wheel parameter '{name}' is missing on the {side} side")]
    MissingWheelParameter { name: String, side: Side },

    #[error("wheel parameter '{name}' on the {side} side is not a number: {value}")]
    InvalidWheelParameter {
        name: String,
        side: Side,
        value: String,
    },
}
