//! The per-frame command buffer handed to the backend

use slotmap::SlotMap;

use crate::commands::list::RenderCommandList;
use crate::resources::{DynamicMesh, DynamicMeshId};

/// A fully compiled frame: a fixed, index-addressed sequence of command
/// lists plus ownership of the per-frame dynamic mesh data those lists
/// reference
///
/// Created once per frame by the compiler and consumed (then dropped) by
/// the backend after submission. The number of lists is fixed at creation;
/// index order is the required execution order.
#[derive(Debug)]
pub struct RenderCommandBuffer {
    lists: Vec<RenderCommandList>,
    dynamic_meshes: SlotMap<DynamicMeshId, DynamicMesh>,
}

impl RenderCommandBuffer {
    /// Assemble a buffer from its populated lists and the frame's dynamic
    /// meshes
    pub(crate) fn new(
        lists: Vec<RenderCommandList>,
        dynamic_meshes: SlotMap<DynamicMeshId, DynamicMesh>,
    ) -> Self {
        Self {
            lists,
            dynamic_meshes,
        }
    }

    /// The command lists, in execution order
    pub fn lists(&self) -> &[RenderCommandList] {
        &self.lists
    }

    /// The command list at the given index
    pub fn list(&self, index: usize) -> &RenderCommandList {
        &self.lists[index]
    }

    /// Number of command lists in the buffer
    pub fn num_lists(&self) -> usize {
        self.lists.len()
    }

    /// Resolve a dynamic mesh referenced by an apply-dynamic-mesh command
    pub fn dynamic_mesh(&self, id: DynamicMeshId) -> Option<&DynamicMesh> {
        self.dynamic_meshes.get(id)
    }

    /// All dynamic meshes owned by this buffer
    pub fn dynamic_meshes(&self) -> &SlotMap<DynamicMeshId, DynamicMesh> {
        &self.dynamic_meshes
    }
}
