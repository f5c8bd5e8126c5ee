use solid_kernel::{Kernel, Placement};
use susp_types::{SheetSchema, VehicleSetup};
use tracing::{info, instrument, warn};

use crate::config::BuildConfig;
use crate::error::GeometryError;
use crate::links::draw_links;
use crate::points::draw_points;
use crate::scene::SceneNode;
use crate::wheels::draw_wheels;

pub const CAR_ASSEMBLY: &str = "Car Assembly";
pub const FRONT_SUSPENSION: &str = "Front Suspension";
pub const REAR_SUSPENSION: &str = "Rear Suspension";

/// Non-fatal findings from a build.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    pub warnings: Vec<String>,
}

/// A built scene and everything that was skipped on the way.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub root: SceneNode,
    pub diagnostics: Diagnostics,
}

/// Build one suspension group: hardpoint markers, wheels and links.
///
/// A sheet without a wheels block still builds; the wheels are skipped with a
/// warning. A wheels block with a missing or non-numeric parameter fails the
/// build.
#[instrument(skip(kernel, schema, config))]
pub fn build_suspension(
    kernel: &mut dyn Kernel,
    schema: &SheetSchema,
    name: &str,
    config: &BuildConfig,
) -> Result<BuildResult, GeometryError> {
    let mut diagnostics = Diagnostics::default();
    let mut children = draw_points(kernel, schema, config)?;
    let markers = children.len();

    match schema.wheels() {
        Some(table) => children.extend(draw_wheels(kernel, table, config)?),
        None => {
            warn!(suspension = name, "no wheels block, wheels skipped");
            diagnostics
                .warnings
                .push(format!("{name}: no wheels block"));
        }
    }

    let links = draw_links(kernel, schema, config, &mut diagnostics)?;
    info!(
        markers,
        links = links.len(),
        solids = children.len() + links.len(),
        "suspension built"
    );
    children.extend(links);

    Ok(BuildResult {
        root: SceneNode::group(name, children),
        diagnostics,
    })
}

/// Build the whole car: front suspension at the origin, rear suspension
/// shifted back along X by the reference distance (0 when unknown).
#[instrument(skip_all)]
pub fn build_car(
    kernel: &mut dyn Kernel,
    front: &SheetSchema,
    rear: &SheetSchema,
    setup: &VehicleSetup,
    config: &BuildConfig,
) -> Result<BuildResult, GeometryError> {
    let front = build_suspension(kernel, front, FRONT_SUSPENSION, config)?;
    let rear = build_suspension(kernel, rear, REAR_SUSPENSION, config)?;

    if setup.reference_distance.is_none() {
        warn!("reference distance unknown, rear suspension left at the origin");
    }
    let offset = setup.rear_offset();
    let rear_node = rear
        .root
        .with_placement(Placement::from_translation([-offset, 0.0, 0.0]));

    let mut diagnostics = front.diagnostics;
    diagnostics.warnings.extend(rear.diagnostics.warnings);

    let root = SceneNode::group(CAR_ASSEMBLY, vec![front.root, rear_node]);
    info!(
        solids = root.solid_count(),
        reference_distance = offset,
        "car assembly built"
    );
    Ok(BuildResult { root, diagnostics })
}
