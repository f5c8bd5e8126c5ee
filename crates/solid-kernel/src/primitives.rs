//! Higher-level primitive builders on top of truck's sweep API.
//!
//! truck has no built-in cylinder or sphere, everything is successive sweeps.

use std::f64::consts::PI;
use truck_modeling::builder;
use truck_modeling::topology::{Solid, Wire};
use truck_modeling::{EuclideanSpace, Point3, Rad, Vector3};

use crate::types::KernelError;

fn attach_failed(e: impl std::fmt::Display) -> KernelError {
    KernelError::PrimitiveFailed {
        reason: format!("failed to attach planar face: {}", e),
    }
}

/// Full circle of `radius` in the plane `z`, centered on the Z axis.
fn circle_wire(radius: f64, z: f64) -> Wire {
    let v = builder::vertex(Point3::new(radius, 0.0, z));
    builder::rsweep(&v, Point3::new(0.0, 0.0, z), Vector3::unit_z(), Rad(2.0 * PI))
}

/// Create a cylinder solid: circle wire → face → translational sweep.
/// Centered at origin, axis along Z.
pub fn make_cylinder(radius: f64, height: f64) -> Result<Solid, KernelError> {
    let wire = circle_wire(radius, -height / 2.0);
    let face = builder::try_attach_plane(&[wire]).map_err(attach_failed)?;
    Ok(builder::tsweep(&face, Vector3::new(0.0, 0.0, height)))
}

/// Create a hollow cylinder: outer circle plus reversed inner circle → annular
/// face → translational sweep. Centered at origin, axis along Z.
pub fn make_tube(outer_radius: f64, inner_radius: f64, height: f64) -> Result<Solid, KernelError> {
    let outer = circle_wire(outer_radius, -height / 2.0);
    let mut inner = circle_wire(inner_radius, -height / 2.0);
    inner.invert();
    let face = builder::try_attach_plane(&[outer, inner]).map_err(attach_failed)?;
    Ok(builder::tsweep(&face, Vector3::new(0.0, 0.0, height)))
}

/// Create a sphere solid: a pole-to-pole semicircle swept into a cone shell
/// about Z, so both poles collapse to single vertices. Centered at origin.
pub fn make_sphere(radius: f64) -> Result<Solid, KernelError> {
    let north = builder::vertex(Point3::new(0.0, 0.0, radius));
    let meridian: Wire = builder::rsweep(&north, Point3::origin(), Vector3::unit_x(), Rad(PI));
    let shell = builder::cone(&meridian, Vector3::unit_z(), Rad(2.0 * PI));
    Solid::try_new(vec![shell]).map_err(|e| KernelError::PrimitiveFailed {
        reason: format!("sphere shell is not a closed manifold: {}", e),
    })
}

/// Axis-aligned bounding box of a solid's vertices as `(min, max)`.
#[cfg(test)]
pub(crate) fn vertex_bounds(solid: &Solid) -> ([f64; 3], [f64; 3]) {
    let mut min = [f64::MAX; 3];
    let mut max = [f64::MIN; 3];
    for shell in solid.boundaries() {
        for v in shell.vertex_iter() {
            let p = v.point();
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
    }
    (min, max)
}
