use solid_kernel::{Color, Kernel, Placement};
use susp_types::SheetSchema;
use tracing::debug;

use crate::config::BuildConfig;
use crate::error::GeometryError;
use crate::scene::SceneNode;

/// Marker color for a composite `<block>_<point>` name. First match wins.
pub fn marker_color(name: &str) -> Color {
    if name.contains("CHAS") {
        Color::RED
    } else if name.contains("UPRI") {
        Color::GREEN
    } else if name.contains("ROCK") {
        Color::BLUE
    } else {
        Color::YELLOW
    }
}

/// Emit a marker sphere and an indicator sphere for every hardpoint.
///
/// Both spheres are built once and shared by every node; each node only
/// carries its own translation.
pub fn draw_points(
    kernel: &mut dyn Kernel,
    schema: &SheetSchema,
    config: &BuildConfig,
) -> Result<Vec<SceneNode>, GeometryError> {
    let mut nodes = Vec::new();
    let mut points = schema.points().peekable();
    if points.peek().is_none() {
        return Ok(nodes);
    }

    let marker = kernel.make_sphere(config.marker_radius)?;
    let indicator = kernel.make_sphere(config.indicator_radius())?;

    for (block, point, xyz) in points {
        let name = format!("{block}_{point}");
        let at = Placement::from_translation(xyz);
        debug!(%name, ?xyz, "point marker");

        nodes.push(
            SceneNode::solid(format!("{name}_sphere"), marker.clone())
                .with_placement(at)
                .with_color(marker_color(&name)),
        );
        nodes.push(
            SceneNode::solid(format!("{name}_sketchpoint"), indicator.clone())
                .with_placement(at)
                .with_color(config.indicator_color),
        );
    }
    Ok(nodes)
}
