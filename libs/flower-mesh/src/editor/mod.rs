//! Mesh-editing capability interface.
//!
//! Every geometry operation in this crate goes through the [`MeshEditor`]
//! trait, keeping the generation pipeline independent of whichever scene
//! graph actually owns the meshes. The bundled [`scene::SceneEditor`] is a
//! complete in-memory implementation; a host integration supplies its own.

pub mod scene;
pub mod scope;

use std::fmt;
use std::ops::Range;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{FlowerError, FlowerResult};

// =============================================================================
// MESH HANDLE
// =============================================================================

/// Opaque identifier for a mesh owned by the editor's scene graph.
///
/// Handles are cheap to copy and carry no lifetime: the scene graph owns the
/// geometry, and a handle is only meaningful to the editor that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshHandle(u64);

impl MeshHandle {
    /// Wraps a raw editor-assigned identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier, for editor implementations.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MeshHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mesh#{}", self.0)
    }
}

// =============================================================================
// EDITOR TRAIT
// =============================================================================

/// Narrow capability interface onto an external mesh-editing collaborator.
///
/// All angles are in degrees and all vertex displacements are relative,
/// matching the semantics the sculptor and arranger rely on. Implementations
/// report their own failures as [`FlowerError::ExternalApi`].
pub trait MeshEditor {
    /// Creates a cylinder primitive centered at the origin.
    ///
    /// # Arguments
    /// * `radius` - Cylinder radius (must be positive).
    /// * `height` - Cylinder height along `axis` (must be positive).
    /// * `radial_segments` - Number of radial subdivisions (at least 3).
    /// * `axis` - Direction of the cylinder's long axis.
    fn create_cylinder(
        &mut self,
        radius: f64,
        height: f64,
        radial_segments: u32,
        axis: DVec3,
    ) -> FlowerResult<MeshHandle>;

    /// Creates a box primitive centered at the origin with the given
    /// subdivision counts along X and Y.
    fn create_box(
        &mut self,
        width: f64,
        height: f64,
        depth: f64,
        x_subdivisions: u32,
        y_subdivisions: u32,
    ) -> FlowerResult<MeshHandle>;

    /// Returns the total number of vertices in the mesh.
    fn vertex_count(&self, mesh: MeshHandle) -> FlowerResult<usize>;

    /// Displaces a single vertex by `offset`, relative to its current
    /// position.
    fn move_vertex(&mut self, mesh: MeshHandle, vertex: usize, offset: DVec3) -> FlowerResult<()>;

    /// Translates the whole mesh by `offset`.
    fn translate(&mut self, mesh: MeshHandle, offset: DVec3) -> FlowerResult<()>;

    /// Rotates the mesh by the given per-axis angles, in degrees.
    fn rotate(&mut self, mesh: MeshHandle, degrees: DVec3) -> FlowerResult<()>;

    /// Scales the mesh by the given per-axis factors.
    fn scale(&mut self, mesh: MeshHandle, factors: DVec3) -> FlowerResult<()>;

    /// Duplicates the mesh into a new independent instance.
    fn duplicate(&mut self, mesh: MeshHandle) -> FlowerResult<MeshHandle>;

    /// Deletes the mesh from the scene.
    fn delete(&mut self, mesh: MeshHandle) -> FlowerResult<()>;

    /// Clears any active selection state in the host scene.
    fn clear_selection(&mut self) -> FlowerResult<()>;
}

// =============================================================================
// VERTEX TOPOLOGY
// =============================================================================

/// Explicit left/right split of a box primitive's vertex index range.
///
/// The petal sculptor assumes the box primitive lays out its vertices as two
/// contiguous halves, one per longitudinal side. That structural assumption
/// is captured here as a named mapping and validated once per sculpt instead
/// of being silently relied upon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexTopology {
    /// Index range of the left-side vertices.
    pub left: Range<usize>,
    /// Index range of the right-side vertices.
    pub right: Range<usize>,
}

impl VertexTopology {
    /// Splits a box primitive's vertex count into contiguous halves.
    ///
    /// # Errors
    /// Returns [`FlowerError::InvalidArgument`] when the count is zero or
    /// odd, since the halves could not mirror each other vertex for vertex.
    pub fn split(vertex_count: usize) -> FlowerResult<Self> {
        if vertex_count == 0 {
            return Err(FlowerError::invalid_argument(
                "box primitive reported zero vertices",
            ));
        }
        if vertex_count % 2 != 0 {
            return Err(FlowerError::invalid_argument(format!(
                "box primitive vertex count must be even, got {vertex_count}"
            )));
        }
        let half = vertex_count / 2;
        Ok(Self {
            left: 0..half,
            right: half..vertex_count,
        })
    }

    /// Number of vertices on each side.
    pub fn side_len(&self) -> usize {
        self.left.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_gives_contiguous_halves() {
        let topology = VertexTopology::split(36).expect("even count splits");
        assert_eq!(topology.left, 0..18);
        assert_eq!(topology.right, 18..36);
        assert_eq!(topology.side_len(), 18);
    }

    #[test]
    fn split_rejects_zero_and_odd_counts() {
        assert!(matches!(
            VertexTopology::split(0),
            Err(FlowerError::InvalidArgument { .. })
        ));
        assert!(matches!(
            VertexTopology::split(35),
            Err(FlowerError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn handle_display_names_raw_id() {
        assert_eq!(MeshHandle::new(3).to_string(), "mesh#3");
        assert_eq!(MeshHandle::new(3).raw(), 3);
    }
}
