//! Rollback scope for partially created geometry.
//!
//! Flower construction creates many meshes before the result is complete. A
//! [`CreationScope`] registers each handle as soon as it exists so that a
//! mid-sequence failure can delete everything created so far instead of
//! leaving orphaned geometry in the host scene.

use log::warn;

use crate::editor::{MeshEditor, MeshHandle};

#[cfg(test)]
mod tests;

/// Tracks meshes created during one build so a failure can roll them back.
#[derive(Debug, Default)]
pub struct CreationScope {
    created: Vec<MeshHandle>,
}

impl CreationScope {
    /// Creates an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a freshly created mesh and hands the handle back, so
    /// creation calls can be wrapped in place.
    pub fn track(&mut self, mesh: MeshHandle) -> MeshHandle {
        self.created.push(mesh);
        mesh
    }

    /// Forgets a mesh that was legitimately deleted mid-build, such as a
    /// petal template after its ring has been arranged.
    pub fn untrack(&mut self, mesh: MeshHandle) {
        self.created.retain(|tracked| *tracked != mesh);
    }

    /// Number of meshes currently tracked.
    pub fn tracked(&self) -> usize {
        self.created.len()
    }

    /// Deletes every tracked mesh, newest first.
    ///
    /// Individual delete failures are logged and skipped: rollback runs on
    /// an editor that already failed once, and the original error must not
    /// be displaced by cleanup noise.
    pub fn rollback<E: MeshEditor>(mut self, editor: &mut E) {
        for mesh in self.created.drain(..).rev() {
            if let Err(error) = editor.delete(mesh) {
                warn!("rollback could not delete {mesh}: {error}");
            }
        }
    }
}
