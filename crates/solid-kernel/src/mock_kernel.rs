//! MockKernel: recording test double implementing Kernel + StepExport.
//!
//! Keeps a description of every solid (primitive kind, dimensions and the
//! accumulated placement) instead of real BREP topology, and logs every call
//! in order. Used by suspension-geometry and file-format for unit testing.

use crate::placement::Placement;
use crate::traits::{Kernel, StepExport};
use crate::types::*;
use std::collections::HashMap;

/// Primitive a mock solid was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockShape {
    Sphere {
        radius: f64,
    },
    Cylinder {
        radius: f64,
        height: f64,
    },
    Tube {
        outer_radius: f64,
        inner_radius: f64,
        height: f64,
    },
}

/// A synthetic solid: its primitive and where it has been moved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockSolid {
    pub shape: MockShape,
    pub placement: Placement,
}

impl MockSolid {
    /// World position of the primitive's center.
    pub fn center(&self) -> [f64; 3] {
        self.placement.transform_point([0.0; 3])
    }

    /// World direction of the primitive's build axis (+Z).
    pub fn axis(&self) -> [f64; 3] {
        self.placement.transform_vector([0.0, 0.0, 1.0])
    }
}

/// One recorded kernel call.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelCall {
    MakeSphere {
        radius: f64,
    },
    MakeCylinder {
        radius: f64,
        height: f64,
    },
    MakeTube {
        outer_radius: f64,
        inner_radius: f64,
        height: f64,
    },
    Rotate {
        axis_origin: [f64; 3],
        axis_direction: [f64; 3],
        angle: f64,
    },
    Translate {
        offset: [f64; 3],
    },
    Place {
        placement: Placement,
    },
}

/// Deterministic test double for the geometry kernel.
pub struct MockKernel {
    next_handle: u64,
    solids: HashMap<u64, MockSolid>,
    calls: Vec<KernelCall>,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            solids: HashMap::new(),
            calls: Vec::new(),
        }
    }

    fn alloc_handle(&mut self) -> KernelSolidHandle {
        let h = KernelSolidHandle(self.next_handle);
        self.next_handle += 1;
        h
    }

    fn store(&mut self, solid: MockSolid) -> KernelSolidHandle {
        let handle = self.alloc_handle();
        self.solids.insert(handle.id(), solid);
        handle
    }

    fn create(&mut self, shape: MockShape) -> KernelSolidHandle {
        self.store(MockSolid {
            shape,
            placement: Placement::identity(),
        })
    }

    /// Apply `op` after the solid's current placement, as a new solid.
    fn transform(
        &mut self,
        handle: &KernelSolidHandle,
        op: &Placement,
    ) -> Result<KernelSolidHandle, KernelError> {
        let solid = *self
            .solids
            .get(&handle.id())
            .ok_or_else(|| KernelError::not_found(handle))?;
        Ok(self.store(MockSolid {
            shape: solid.shape,
            placement: solid.placement.then(op),
        }))
    }

    /// The recorded description of a solid.
    pub fn solid(&self, handle: &KernelSolidHandle) -> Option<&MockSolid> {
        self.solids.get(&handle.id())
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> &[KernelCall] {
        &self.calls
    }

    /// Number of solids created, including intermediate transform results.
    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }

    /// Number of primitive constructions (spheres, cylinders, tubes).
    pub fn primitive_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    KernelCall::MakeSphere { .. }
                        | KernelCall::MakeCylinder { .. }
                        | KernelCall::MakeTube { .. }
                )
            })
            .count()
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for MockKernel {
    fn make_sphere(&mut self, radius: f64) -> Result<KernelSolidHandle, KernelError> {
        self.calls.push(KernelCall::MakeSphere { radius });
        require_positive("sphere radius", radius)?;
        Ok(self.create(MockShape::Sphere { radius }))
    }

    fn make_cylinder(
        &mut self,
        radius: f64,
        height: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        self.calls.push(KernelCall::MakeCylinder { radius, height });
        require_positive("cylinder radius", radius)?;
        require_positive("cylinder height", height)?;
        Ok(self.create(MockShape::Cylinder { radius, height }))
    }

    fn make_tube(
        &mut self,
        outer_radius: f64,
        inner_radius: f64,
        height: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        self.calls.push(KernelCall::MakeTube {
            outer_radius,
            inner_radius,
            height,
        });
        require_tube(outer_radius, inner_radius, height)?;
        Ok(self.create(MockShape::Tube {
            outer_radius,
            inner_radius,
            height,
        }))
    }

    fn rotate(
        &mut self,
        solid: &KernelSolidHandle,
        axis_origin: [f64; 3],
        axis_direction: [f64; 3],
        angle: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        self.calls.push(KernelCall::Rotate {
            axis_origin,
            axis_direction,
            angle,
        });
        let op = Placement::rotation_about(axis_origin, axis_direction, angle)?;
        self.transform(solid, &op)
    }

    fn translate(
        &mut self,
        solid: &KernelSolidHandle,
        offset: [f64; 3],
    ) -> Result<KernelSolidHandle, KernelError> {
        self.calls.push(KernelCall::Translate { offset });
        self.transform(solid, &Placement::from_translation(offset))
    }

    fn place(
        &mut self,
        solid: &KernelSolidHandle,
        placement: &Placement,
    ) -> Result<KernelSolidHandle, KernelError> {
        self.calls.push(KernelCall::Place {
            placement: *placement,
        });
        self.transform(solid, placement)
    }
}

impl StepExport for MockKernel {
    /// Emits one line per solid instead of real STEP entities.
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
        let mut out = format!("MOCK-STEP;{file_name}\n");
        for handle in solids {
            let solid = self
                .solid(handle)
                .ok_or_else(|| KernelError::not_found(handle))?;
            let c = solid.center();
            out.push_str(&format!(
                "{:?} @ ({:.3}, {:.3}, {:.3})\n",
                solid.shape, c[0], c[1], c[2]
            ));
        }
        Ok(out)
    }
}
