use crate::placement::Placement;
use crate::types::*;

/// Core solid-modeling trait: primitive construction and rigid transforms.
/// Implemented by TruckKernel (wraps real truck) and MockKernel (recording
/// test double).
///
/// Transform operations never modify their input; they return a handle to a
/// new, transformed solid.
pub trait Kernel {
    /// Sphere centered at the origin.
    fn make_sphere(&mut self, radius: f64) -> Result<KernelSolidHandle, KernelError>;

    /// Solid cylinder along +Z, centered at the origin (spans
    /// `-height/2..height/2`).
    fn make_cylinder(&mut self, radius: f64, height: f64)
        -> Result<KernelSolidHandle, KernelError>;

    /// Hollow cylinder along +Z, centered at the origin, with a bore of
    /// `inner_radius`.
    fn make_tube(
        &mut self,
        outer_radius: f64,
        inner_radius: f64,
        height: f64,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Rotate a solid by `angle` radians about an axis.
    fn rotate(
        &mut self,
        solid: &KernelSolidHandle,
        axis_origin: [f64; 3],
        axis_direction: [f64; 3],
        angle: f64,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Translate a solid by `offset`.
    fn translate(
        &mut self,
        solid: &KernelSolidHandle,
        offset: [f64; 3],
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Apply a full rigid placement to a solid.
    fn place(
        &mut self,
        solid: &KernelSolidHandle,
        placement: &Placement,
    ) -> Result<KernelSolidHandle, KernelError>;
}

/// Export of solids to a STEP exchange file.
pub trait StepExport {
    /// Write the given solids into a single STEP document.
    fn export_step(
        &self,
        solids: &[KernelSolidHandle],
        file_name: &str,
    ) -> Result<String, KernelError>;
}
