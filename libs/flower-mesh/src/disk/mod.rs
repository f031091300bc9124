//! Flower disk construction.

use glam::DVec3;
use log::debug;

use config::constants::DISK_LIFT;

use crate::editor::scope::CreationScope;
use crate::editor::{MeshEditor, MeshHandle};
use crate::error::FlowerResult;
use crate::flower::FlowerType;


/// Creates the central flower disk and lifts it above the petal plane.
///
/// The disk is a short cylinder whose radial subdivision equals the base
/// petal count, so its facet boundaries line up with the petal positions
/// around it. Dimension validation is left to the editor.
///
/// # Arguments
/// * `petal_count` - Base-layer petal count, used as the radial segment count.
///
/// # Returns
/// The disk handle, already registered with the rollback scope.
pub fn build_disk<E: MeshEditor>(
    editor: &mut E,
    scope: &mut CreationScope,
    flower_type: &FlowerType,
    petal_count: u32,
) -> FlowerResult<MeshHandle> {
    let disk = scope.track(editor.create_cylinder(
        flower_type.disk_radius,
        flower_type.height,
        petal_count,
        DVec3::Y,
    )?);
    editor.translate(disk, DVec3::new(0.0, flower_type.height + DISK_LIFT, 0.0))?;
    debug!("placed flower disk {disk} with {petal_count} radial segments");
    Ok(disk)
}
