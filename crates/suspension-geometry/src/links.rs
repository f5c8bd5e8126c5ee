//! Cylinders drawn between pairs of hardpoints.

use std::f64::consts::PI;

use nalgebra::Vector3;
use solid_kernel::{Kernel, KernelSolidHandle};
use susp_types::{SheetSchema, Side};
use tracing::debug;

use crate::assembly::Diagnostics;
use crate::config::BuildConfig;
use crate::error::GeometryError;
use crate::scene::SceneNode;

/// Below this, the link direction is treated as parallel to the build axis.
const PARALLEL_EPS: f64 = 1e-12;

/// How to pose a Z-aligned cylinder so it spans two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkGeometry {
    pub length: f64,
    pub midpoint: [f64; 3],
    /// Rotation taking +Z onto the link direction as `(axis, radians)`;
    /// `None` when already aligned.
    pub rotation: Option<([f64; 3], f64)>,
}

/// Placement of a link from `p1` to `p2`, or `None` when the points are
/// within `tolerance` of each other.
pub fn link_geometry(p1: [f64; 3], p2: [f64; 3], tolerance: f64) -> Option<LinkGeometry> {
    let a = Vector3::from(p1);
    let b = Vector3::from(p2);
    let d = b - a;
    let length = d.norm();
    if length <= tolerance {
        return None;
    }

    let dir = d / length;
    let z = Vector3::z();
    let cross = z.cross(&dir);
    let sin = cross.norm();
    let cos = z.dot(&dir);

    let rotation = if sin < PARALLEL_EPS {
        if cos > 0.0 {
            None
        } else {
            Some(([1.0, 0.0, 0.0], PI))
        }
    } else {
        let axis = cross / sin;
        Some(([axis.x, axis.y, axis.z], sin.atan2(cos)))
    };

    let mid = (a + b) / 2.0;
    Some(LinkGeometry {
        length,
        midpoint: [mid.x, mid.y, mid.z],
        rotation,
    })
}

/// Build a link cylinder, or `None` for a degenerate pair.
pub fn draw_link(
    kernel: &mut dyn Kernel,
    p1: [f64; 3],
    p2: [f64; 3],
    config: &BuildConfig,
) -> Result<Option<KernelSolidHandle>, GeometryError> {
    let Some(geom) = link_geometry(p1, p2, config.link_tolerance) else {
        return Ok(None);
    };
    let mut solid = kernel.make_cylinder(config.link_radius, geom.length)?;
    if let Some((axis, angle)) = geom.rotation {
        solid = kernel.rotate(&solid, [0.0; 3], axis, angle)?;
    }
    Ok(Some(kernel.translate(&solid, geom.midpoint)?))
}

/// Draw every configured link on both sides. Links with a missing or
/// coincident endpoint are skipped and noted in `diagnostics`.
pub fn draw_links(
    kernel: &mut dyn Kernel,
    schema: &SheetSchema,
    config: &BuildConfig,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<SceneNode>, GeometryError> {
    let mut nodes = Vec::new();
    for link in &config.links {
        for side in Side::BOTH {
            let name = format!("Link_{}_{}", link.name, side);
            let from = format!("{}{}", link.from, side.suffix());
            let to = format!("{}{}", link.to, side.suffix());

            let (Some(p1), Some(p2)) = (schema.find_point(&from), schema.find_point(&to)) else {
                debug!(%name, %from, %to, "link endpoint missing");
                diagnostics
                    .warnings
                    .push(format!("{name}: endpoint {from} or {to} not found"));
                continue;
            };

            match draw_link(kernel, p1, p2, config)? {
                Some(handle) => {
                    nodes.push(SceneNode::solid(name, handle).with_color(config.link_color));
                }
                None => {
                    debug!(%name, "degenerate link skipped");
                    diagnostics
                        .warnings
                        .push(format!("{name}: endpoints coincide"));
                }
            }
        }
    }
    Ok(nodes)
}
