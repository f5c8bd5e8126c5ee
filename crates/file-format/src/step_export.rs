use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use solid_kernel::{Color, Kernel, StepExport};
use suspension_geometry::SceneNode;
use tracing::{debug, info, instrument};

use crate::errors::ExportError;

/// Export every solid in a scene to one STEP document.
///
/// Node placements are composed down the tree and baked into the solids
/// before export. The STEP writer carries geometry only; colors go to a
/// separate table, see [`write_color_table`].
#[instrument(skip(kernel, scene), fields(root = %scene.name))]
pub fn export_step<K: Kernel + StepExport>(
    kernel: &mut K,
    scene: &SceneNode,
    file_name: &str,
) -> Result<String, ExportError> {
    let placed = scene.world_solids();
    if placed.is_empty() {
        return Err(ExportError::NoSolid);
    }

    let mut handles = Vec::with_capacity(placed.len());
    for solid in &placed {
        let handle = if solid.placement.is_identity(1e-12) {
            solid.handle.clone()
        } else {
            kernel.place(&solid.handle, &solid.placement)?
        };
        debug!(path = %solid.path, "solid baked");
        handles.push(handle);
    }

    let step = kernel
        .export_step(&handles, file_name)
        .map_err(|e| ExportError::StepExportFailed(e.to_string()))?;
    info!(solids = handles.len(), "scene exported");
    Ok(step)
}

/// Write an exported STEP string to `path`.
pub fn write_step(path: &Path, step: &str) -> Result<(), ExportError> {
    fs::write(path, step).map_err(|e| ExportError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Effective color of every colored solid, keyed by its scene path.
pub fn color_table(scene: &SceneNode) -> BTreeMap<String, Color> {
    scene
        .world_solids()
        .into_iter()
        .filter_map(|solid| solid.color.map(|color| (solid.path, color)))
        .collect()
}

/// Color table file written next to a STEP file:
/// `Car_Assembly.step` → `Car_Assembly.colors.json`.
pub fn color_table_path(step_path: &Path) -> PathBuf {
    step_path.with_extension("colors.json")
}

/// Write the scene's color table as pretty JSON. Returns the number of
/// entries written.
pub fn write_color_table(path: &Path, scene: &SceneNode) -> Result<usize, ExportError> {
    let table = color_table(scene);
    let json = serde_json::to_string_pretty(&table).map_err(|e| ExportError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    fs::write(path, json).map_err(|e| ExportError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), entries = table.len(), "color table written");
    Ok(table.len())
}
