//! Resource identity and per-frame transient resources
//!
//! The compiler never owns long-lived GPU resources; materials, meshes and
//! textures live in caches maintained by the resource system. Commands refer
//! to them through the stable, copyable keys defined here, and state-change
//! coalescing compares those keys for equality. The only resource data this
//! crate ever owns is per-frame [`DynamicMesh`] geometry, which the command
//! buffer keeps alive until the backend has consumed it.

slotmap::new_key_type! {
    /// Stable identity of a material in the long-lived material cache
    pub struct MaterialId;

    /// Stable identity of a static mesh in the long-lived mesh cache
    pub struct MeshId;

    /// Stable identity of a texture in the long-lived texture cache
    pub struct TextureId;

    /// Stable identity of an offscreen render target group
    pub struct TargetGroupId;

    /// Identity of a per-frame dynamic mesh owned by a command buffer
    pub struct DynamicMeshId;
}

/// Geometry generated for a single frame
///
/// Dynamic meshes (sprite batches, UI quads, debug lines) are rebuilt every
/// frame by upstream systems and must stay alive until the backend has
/// uploaded them. Ownership of the whole per-frame collection transfers to
/// the [`RenderCommandBuffer`](crate::commands::RenderCommandBuffer) at
/// compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicMesh {
    vertex_data: Vec<u8>,
    index_data: Vec<u8>,
    index_count: u32,
}

impl DynamicMesh {
    /// Create a dynamic mesh from raw vertex and index data
    pub fn new(vertex_data: Vec<u8>, index_data: Vec<u8>, index_count: u32) -> Self {
        Self {
            vertex_data,
            index_data,
            index_count,
        }
    }

    /// Raw vertex data for upload
    pub fn vertex_data(&self) -> &[u8] {
        &self.vertex_data
    }

    /// Raw index data for upload
    pub fn index_data(&self) -> &[u8] {
        &self.index_data
    }

    /// Number of indices to draw
    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

/// Description of an offscreen render target group
///
/// Pairs the target's identity with the textures backing it. A target used
/// as a shadow map must carry a depth texture; the pass compiler asserts
/// this when a directional light references the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTargetGroup {
    /// Identity of the target group, carried by begin-with-target commands
    pub id: TargetGroupId,

    /// Colour texture the target renders into, if any
    pub colour_texture: Option<TextureId>,

    /// Depth texture the target renders into, if any
    pub depth_texture: Option<TextureId>,
}

impl RenderTargetGroup {
    /// Create a target group description
    pub fn new(
        id: TargetGroupId,
        colour_texture: Option<TextureId>,
        depth_texture: Option<TextureId>,
    ) -> Self {
        Self {
            id,
            colour_texture,
            depth_texture,
        }
    }

    /// Create a depth-only target group, as used for shadow maps
    pub fn depth_only(id: TargetGroupId, depth_texture: TextureId) -> Self {
        Self::new(id, None, Some(depth_texture))
    }
}
