//! Petal sculpting.
//!
//! A petal starts life as a flat subdivided box. A small table of
//! hand-tuned offsets is applied progressively from the petal's base to its
//! tip, pulling the edge vertices into a tapering teardrop profile without
//! any parametric curve evaluation. The right side uses the same table with
//! Z negated, giving the petal its mirror symmetry.

use glam::DVec3;
use log::debug;

use crate::editor::scope::CreationScope;
use crate::editor::{MeshEditor, MeshHandle, VertexTopology};
use crate::error::FlowerResult;
use crate::flower::FlowerType;


/// Hand-tuned vertex displacements, ordered from petal base to tip.
///
/// Applied cyclically over each side of the box: entry `i % 6` displaces
/// the `i`-th vertex of a side.
pub const PETAL_VERTEX_OFFSETS: [DVec3; 6] = [
    DVec3::new(0.1, 0.13, 0.18),
    DVec3::new(0.2, 0.15, 0.21),
    DVec3::new(0.4, 0.17, 0.23),
    DVec3::new(0.6, 0.15, 0.24),
    DVec3::new(0.8, 0.16, 0.18),
    DVec3::new(1.0, 0.2, 0.0),
];

/// Creates and sculpts one petal template.
///
/// The box's vertex index range is split into two contiguous halves with
/// [`VertexTopology::split`]; each left-half vertex is displaced by its
/// table entry and each right-half vertex by the same entry mirrored across
/// the petal's longitudinal axis. The sculpt is deterministic: identical
/// inputs produce identical meshes.
///
/// # Returns
/// The sculpted template handle, registered with the rollback scope. The
/// template is transient; the ring arranger deletes it after duplication.
pub fn sculpt_petal<E: MeshEditor>(
    editor: &mut E,
    scope: &mut CreationScope,
    flower_type: &FlowerType,
) -> FlowerResult<MeshHandle> {
    let template = scope.track(editor.create_box(
        flower_type.width,
        flower_type.height,
        flower_type.depth,
        flower_type.subdivisions_x,
        flower_type.subdivisions_y,
    )?);

    let vertex_count = editor.vertex_count(template)?;
    let topology = VertexTopology::split(vertex_count)?;
    debug!(
        "sculpting petal {template}: {} vertices per side",
        topology.side_len()
    );

    for (i, vertex) in topology.left.clone().enumerate() {
        let offset = PETAL_VERTEX_OFFSETS[i % PETAL_VERTEX_OFFSETS.len()];
        editor.move_vertex(template, vertex, offset)?;
    }
    for (i, vertex) in topology.right.clone().enumerate() {
        let offset = PETAL_VERTEX_OFFSETS[i % PETAL_VERTEX_OFFSETS.len()];
        editor.move_vertex(template, vertex, DVec3::new(offset.x, offset.y, -offset.z))?;
    }

    Ok(template)
}
