//! In-memory scene editor.
//!
//! [`SceneEditor`] is a complete [`MeshEditor`] implementation backed by
//! plain vertex buffers, so the whole pipeline can run headless and tests
//! can inspect exactly what the generator asked for. It validates geometry
//! parameters the way a host scene graph would and reports every failure as
//! [`FlowerError::ExternalApi`].

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use glam::DVec3;

use config::constants::MIN_RADIAL_SEGMENTS;

use crate::editor::{MeshEditor, MeshHandle};
use crate::error::{FlowerError, FlowerResult};

#[cfg(test)]
mod tests;

/// One mesh in the scene: its vertex buffer plus accumulated transforms.
///
/// Transforms are kept separate from the vertex buffer so tests can assert
/// on placement (translation, rotation) independently of sculpting
/// (per-vertex displacement).
#[derive(Debug, Clone)]
struct SceneMesh {
    vertices: Vec<DVec3>,
    translation: DVec3,
    rotation_degrees: DVec3,
    scale_factors: DVec3,
    radial_segments: Option<u32>,
}

impl SceneMesh {
    fn new(vertices: Vec<DVec3>, radial_segments: Option<u32>) -> Self {
        Self {
            vertices,
            translation: DVec3::ZERO,
            rotation_degrees: DVec3::ZERO,
            scale_factors: DVec3::ONE,
            radial_segments,
        }
    }
}

/// In-memory mesh editor and scene graph.
///
/// ## Example
///
/// ```rust
/// use flower_mesh::{MeshEditor, SceneEditor};
/// use glam::DVec3;
///
/// let mut editor = SceneEditor::new();
/// let disk = editor.create_cylinder(0.8, 0.05, 21, DVec3::Y).unwrap();
/// assert_eq!(editor.vertex_count(disk).unwrap(), 2 * 21 + 2);
/// ```
#[derive(Debug, Default)]
pub struct SceneEditor {
    meshes: BTreeMap<u64, SceneMesh>,
    selection: Vec<MeshHandle>,
    next_id: u64,
}

impl SceneEditor {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of meshes currently in the scene.
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Whether the handle still refers to a live mesh.
    pub fn contains(&self, mesh: MeshHandle) -> bool {
        self.meshes.contains_key(&mesh.raw())
    }

    /// Currently selected meshes, in selection order.
    pub fn selection(&self) -> &[MeshHandle] {
        &self.selection
    }

    /// The mesh's vertex positions, in index order.
    pub fn vertices(&self, mesh: MeshHandle) -> FlowerResult<&[DVec3]> {
        Ok(&self.mesh(mesh, "vertices")?.vertices)
    }

    /// Accumulated translation applied to the mesh.
    pub fn translation(&self, mesh: MeshHandle) -> FlowerResult<DVec3> {
        Ok(self.mesh(mesh, "translation")?.translation)
    }

    /// Accumulated per-axis rotation, in degrees.
    pub fn rotation_degrees(&self, mesh: MeshHandle) -> FlowerResult<DVec3> {
        Ok(self.mesh(mesh, "rotation_degrees")?.rotation_degrees)
    }

    /// Accumulated per-axis scale factors.
    pub fn scale_factors(&self, mesh: MeshHandle) -> FlowerResult<DVec3> {
        Ok(self.mesh(mesh, "scale_factors")?.scale_factors)
    }

    /// Radial segment count recorded at creation, for cylinder meshes.
    pub fn radial_segments(&self, mesh: MeshHandle) -> FlowerResult<Option<u32>> {
        Ok(self.mesh(mesh, "radial_segments")?.radial_segments)
    }

    fn mesh(&self, mesh: MeshHandle, operation: &str) -> FlowerResult<&SceneMesh> {
        self.meshes
            .get(&mesh.raw())
            .ok_or_else(|| FlowerError::external(operation, format!("unknown {mesh}")))
    }

    fn mesh_mut(&mut self, mesh: MeshHandle, operation: &str) -> FlowerResult<&mut SceneMesh> {
        self.meshes
            .get_mut(&mesh.raw())
            .ok_or_else(|| FlowerError::external(operation, format!("unknown {mesh}")))
    }

    fn insert(&mut self, mesh: SceneMesh) -> MeshHandle {
        let handle = MeshHandle::new(self.next_id);
        self.next_id += 1;
        self.meshes.insert(handle.raw(), mesh);
        // Creation selects the new mesh, like a host scene graph would.
        self.selection = vec![handle];
        handle
    }
}

impl MeshEditor for SceneEditor {
    fn create_cylinder(
        &mut self,
        radius: f64,
        height: f64,
        radial_segments: u32,
        axis: DVec3,
    ) -> FlowerResult<MeshHandle> {
        if radius <= 0.0 {
            return Err(FlowerError::external(
                "create_cylinder",
                format!("radius must be positive: {radius}"),
            ));
        }
        if height <= 0.0 {
            return Err(FlowerError::external(
                "create_cylinder",
                format!("height must be positive: {height}"),
            ));
        }
        if radial_segments < MIN_RADIAL_SEGMENTS {
            return Err(FlowerError::external(
                "create_cylinder",
                format!("radial segments must be at least {MIN_RADIAL_SEGMENTS}: {radial_segments}"),
            ));
        }
        let axis = axis.try_normalize().ok_or_else(|| {
            FlowerError::external("create_cylinder", "axis must be a non-zero vector")
        })?;

        // Two rings of `radial_segments` vertices plus the two cap centers.
        let (u, v) = axis.any_orthonormal_pair();
        let step_angle = TAU / f64::from(radial_segments);
        let half = axis * (height / 2.0);
        let mut vertices = Vec::with_capacity(2 * radial_segments as usize + 2);
        for ring_center in [-half, half] {
            for i in 0..radial_segments {
                let (sin, cos) = (f64::from(i) * step_angle).sin_cos();
                vertices.push(ring_center + u * (radius * cos) + v * (radius * sin));
            }
        }
        vertices.push(-half);
        vertices.push(half);

        Ok(self.insert(SceneMesh::new(vertices, Some(radial_segments))))
    }

    fn create_box(
        &mut self,
        width: f64,
        height: f64,
        depth: f64,
        x_subdivisions: u32,
        y_subdivisions: u32,
    ) -> FlowerResult<MeshHandle> {
        if width <= 0.0 || height <= 0.0 || depth <= 0.0 {
            return Err(FlowerError::external(
                "create_box",
                format!("dimensions must be positive: {width} x {height} x {depth}"),
            ));
        }
        if x_subdivisions < 1 || y_subdivisions < 1 {
            return Err(FlowerError::external(
                "create_box",
                format!(
                    "subdivisions must be at least 1: {x_subdivisions} x {y_subdivisions}"
                ),
            ));
        }

        // Side-major vertex ordering: the full +Z side grid first, then the
        // -Z side grid. The first half of the index range is therefore one
        // longitudinal side of the box, which is the contiguous-halves
        // layout the petal sculptor validates with `VertexTopology::split`.
        let xs = x_subdivisions as usize;
        let ys = y_subdivisions as usize;
        let mut vertices = Vec::with_capacity(2 * (xs + 1) * (ys + 1));
        for side_z in [depth / 2.0, -depth / 2.0] {
            for yi in 0..=ys {
                for xi in 0..=xs {
                    vertices.push(DVec3::new(
                        -width / 2.0 + width * xi as f64 / xs as f64,
                        -height / 2.0 + height * yi as f64 / ys as f64,
                        side_z,
                    ));
                }
            }
        }

        Ok(self.insert(SceneMesh::new(vertices, None)))
    }

    fn vertex_count(&self, mesh: MeshHandle) -> FlowerResult<usize> {
        Ok(self.mesh(mesh, "vertex_count")?.vertices.len())
    }

    fn move_vertex(&mut self, mesh: MeshHandle, vertex: usize, offset: DVec3) -> FlowerResult<()> {
        let scene_mesh = self.mesh_mut(mesh, "move_vertex")?;
        let position = scene_mesh.vertices.get_mut(vertex).ok_or_else(|| {
            FlowerError::external("move_vertex", format!("vertex {vertex} out of range"))
        })?;
        *position += offset;
        Ok(())
    }

    fn translate(&mut self, mesh: MeshHandle, offset: DVec3) -> FlowerResult<()> {
        self.mesh_mut(mesh, "translate")?.translation += offset;
        Ok(())
    }

    fn rotate(&mut self, mesh: MeshHandle, degrees: DVec3) -> FlowerResult<()> {
        self.mesh_mut(mesh, "rotate")?.rotation_degrees += degrees;
        Ok(())
    }

    fn scale(&mut self, mesh: MeshHandle, factors: DVec3) -> FlowerResult<()> {
        self.mesh_mut(mesh, "scale")?.scale_factors *= factors;
        Ok(())
    }

    fn duplicate(&mut self, mesh: MeshHandle) -> FlowerResult<MeshHandle> {
        let copy = self.mesh(mesh, "duplicate")?.clone();
        Ok(self.insert(copy))
    }

    fn delete(&mut self, mesh: MeshHandle) -> FlowerResult<()> {
        if self.meshes.remove(&mesh.raw()).is_none() {
            return Err(FlowerError::external("delete", format!("unknown {mesh}")));
        }
        self.selection.retain(|selected| *selected != mesh);
        Ok(())
    }

    fn clear_selection(&mut self) -> FlowerResult<()> {
        self.selection.clear();
        Ok(())
    }
}
