//! Render passes and the drawable instances they contain

use crate::foundation::math::Mat4;
use crate::resources::{DynamicMeshId, MaterialId, MeshId};
use crate::scene::lighting::RenderPassLight;

/// The geometry a pass object draws
///
/// Static meshes live in the long-lived mesh cache; dynamic meshes are
/// per-frame geometry owned by the command buffer. The two kinds are
/// coalesced independently by the pass compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassObjectMesh {
    /// A mesh from the long-lived mesh cache
    Static(MeshId),

    /// A per-frame dynamic mesh
    Dynamic(DynamicMeshId),
}

/// One drawable instance within a render pass
///
/// Immutable for the duration of the frame. Material and mesh are
/// non-owning references into resource caches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPassObject {
    /// Material the instance is drawn with
    pub material: MaterialId,

    /// Geometry the instance draws
    pub mesh: PassObjectMesh,

    /// World transform of the instance
    pub world_matrix: Mat4,
}

impl RenderPassObject {
    /// Create a pass object drawing a static mesh
    pub fn static_mesh(material: MaterialId, mesh: MeshId, world_matrix: Mat4) -> Self {
        Self {
            material,
            mesh: PassObjectMesh::Static(mesh),
            world_matrix,
        }
    }

    /// Create a pass object drawing a dynamic mesh
    pub fn dynamic_mesh(material: MaterialId, mesh: DynamicMeshId, world_matrix: Mat4) -> Self {
        Self {
            material,
            mesh: PassObjectMesh::Dynamic(mesh),
            world_matrix,
        }
    }
}

/// A batch of drawable objects sharing one lighting configuration
///
/// Objects are pre-sorted by the upstream sort predicates (material, then
/// mesh) to minimize state changes; the compiler never re-sorts them.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    /// The light applied to every object in the pass
    pub light: RenderPassLight,

    /// Drawable objects, in draw order
    pub objects: Vec<RenderPassObject>,
}

impl RenderPass {
    /// Create a render pass
    pub fn new(light: RenderPassLight, objects: Vec<RenderPassObject>) -> Self {
        Self { light, objects }
    }

    /// Whether the pass has anything to draw
    pub fn has_objects(&self) -> bool {
        !self.objects.is_empty()
    }
}
