//! TruckKernel: real geometry kernel wrapping truck's API.

use crate::placement::Placement;
use crate::primitives;
use crate::traits::{Kernel, StepExport};
use crate::types::*;
use std::collections::HashMap;
use tracing::{debug, info};

// Import truck types selectively to avoid shadowing std::result::Result
use truck_modeling::builder;
use truck_modeling::topology::Solid;
use truck_modeling::{InnerSpace, Matrix4, Point3, Rad, Vector3};
use truck_stepio::out::{CompleteStepDisplay, StepHeaderDescriptor, StepModels};

/// Real geometry kernel backed by the truck BREP library.
pub struct TruckKernel {
    next_handle: u64,
    solids: HashMap<u64, Solid>,
}

impl TruckKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            solids: HashMap::new(),
        }
    }

    fn alloc_handle(&mut self) -> KernelSolidHandle {
        let h = KernelSolidHandle(self.next_handle);
        self.next_handle += 1;
        h
    }

    pub(crate) fn store_solid(&mut self, solid: Solid) -> KernelSolidHandle {
        let handle = self.alloc_handle();
        self.solids.insert(handle.id(), solid);
        handle
    }

    pub fn get_solid(&self, handle: &KernelSolidHandle) -> Option<&Solid> {
        self.solids.get(&handle.id())
    }

    fn solid(&self, handle: &KernelSolidHandle) -> Result<&Solid, KernelError> {
        self.get_solid(handle)
            .ok_or_else(|| KernelError::not_found(handle))
    }

    /// Number of solids held by this session.
    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }
}

impl Default for TruckKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for TruckKernel {
    fn make_sphere(&mut self, radius: f64) -> Result<KernelSolidHandle, KernelError> {
        require_positive("sphere radius", radius)?;
        let solid = primitives::make_sphere(radius)?;
        Ok(self.store_solid(solid))
    }

    fn make_cylinder(
        &mut self,
        radius: f64,
        height: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        require_positive("cylinder radius", radius)?;
        require_positive("cylinder height", height)?;
        let solid = primitives::make_cylinder(radius, height)?;
        Ok(self.store_solid(solid))
    }

    fn make_tube(
        &mut self,
        outer_radius: f64,
        inner_radius: f64,
        height: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        require_tube(outer_radius, inner_radius, height)?;
        let solid = primitives::make_tube(outer_radius, inner_radius, height)?;
        Ok(self.store_solid(solid))
    }

    fn rotate(
        &mut self,
        solid: &KernelSolidHandle,
        axis_origin: [f64; 3],
        axis_direction: [f64; 3],
        angle: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        let axis = Vector3::new(axis_direction[0], axis_direction[1], axis_direction[2]);
        if axis.magnitude() < 1e-12 {
            return Err(KernelError::InvalidParameter {
                reason: "rotation axis has zero length".to_string(),
            });
        }
        let origin = Point3::new(axis_origin[0], axis_origin[1], axis_origin[2]);
        let rotated = builder::rotated(self.solid(solid)?, origin, axis.normalize(), Rad(angle));
        Ok(self.store_solid(rotated))
    }

    fn translate(
        &mut self,
        solid: &KernelSolidHandle,
        offset: [f64; 3],
    ) -> Result<KernelSolidHandle, KernelError> {
        let vector = Vector3::new(offset[0], offset[1], offset[2]);
        let moved = builder::translated(self.solid(solid)?, vector);
        Ok(self.store_solid(moved))
    }

    fn place(
        &mut self,
        solid: &KernelSolidHandle,
        placement: &Placement,
    ) -> Result<KernelSolidHandle, KernelError> {
        let c = placement.columns();
        #[rustfmt::skip]
        let mat = Matrix4::new(
            c[0][0], c[0][1], c[0][2], c[0][3],
            c[1][0], c[1][1], c[1][2], c[1][3],
            c[2][0], c[2][1], c[2][2], c[2][3],
            c[3][0], c[3][1], c[3][2], c[3][3],
        );
        let placed = builder::transformed(self.solid(solid)?, mat);
        Ok(self.store_solid(placed))
    }
}

impl StepExport for TruckKernel {
    fn export_step(
        &self,
        solids: &[KernelSolidHandle],
        file_name: &str,
    ) -> Result<String, KernelError> {
        if solids.is_empty() {
            return Err(KernelError::StepExportFailed {
                reason: "no solids to export".to_string(),
            });
        }
        let compressed = solids
            .iter()
            .map(|h| self.solid(h).map(Solid::compress))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(solids = compressed.len(), "compressed solids for STEP export");

        let models: StepModels<_, _, _> = compressed.iter().collect();
        let header = StepHeaderDescriptor {
            file_name: file_name.to_owned(),
            ..Default::default()
        };
        let step = CompleteStepDisplay::new(models, header).to_string();
        info!(file_name, bytes = step.len(), "exported STEP");
        Ok(step)
    }
}
