//! Per-pass command compilation
//!
//! Converts one render pass into a minimal sequence of state-change and
//! draw commands. Each invocation runs as an independent task and writes
//! only into its own command list; the coalescing trackers are local, so
//! concurrent pass compilations share no mutable state.

use crate::commands::RenderCommandList;
use crate::foundation::math::Colour;
use crate::resources::{DynamicMeshId, MaterialId, MeshId, TextureId};
use crate::scene::{PassObjectMesh, RenderPass, RenderPassLight};

/// Compile the commands for a single render pass into the given list
///
/// The pass must contain at least one object; the orchestrator never
/// schedules empty passes.
pub(crate) fn compile_pass(pass: &RenderPass, list: &mut RenderCommandList) {
    debug_assert!(
        pass.has_objects(),
        "cannot compile a render pass with no objects"
    );

    add_apply_light_command(&pass.light, list);

    // Greedy coalescing over the pre-sorted object sequence. Identity is
    // compared by resource key; the compiler never re-sorts, it only
    // collapses consecutive redundant state.
    let mut current_material: Option<MaterialId> = None;
    let mut current_static_mesh: Option<MeshId> = None;
    let mut current_dynamic_mesh: Option<DynamicMeshId> = None;

    for object in &pass.objects {
        if current_material != Some(object.material) {
            current_material = Some(object.material);
            // A material change interleaves other state changes, so any
            // previously bound mesh can no longer be assumed bound.
            current_static_mesh = None;
            current_dynamic_mesh = None;

            list.add_apply_material(object.material);
        }

        match object.mesh {
            PassObjectMesh::Static(mesh) => {
                if current_static_mesh != Some(mesh) {
                    current_static_mesh = Some(mesh);
                    current_dynamic_mesh = None;

                    list.add_apply_mesh(mesh);
                }
            }
            PassObjectMesh::Dynamic(mesh) => {
                if current_dynamic_mesh != Some(mesh) {
                    current_static_mesh = None;
                    current_dynamic_mesh = Some(mesh);

                    list.add_apply_dynamic_mesh(mesh);
                }
            }
        }

        list.add_render_instance(object.world_matrix);
    }
}

/// Emit the light-application command for the pass's lighting configuration
///
/// A pass with no light still emits ambient black: the backend always
/// receives an explicit light state, never an implicit carry-over from a
/// previous pass.
fn add_apply_light_command(light: &RenderPassLight, list: &mut RenderCommandList) {
    match light {
        RenderPassLight::None => list.add_apply_ambient_light(Colour::BLACK),
        RenderPassLight::Ambient(ambient) => list.add_apply_ambient_light(ambient.colour),
        RenderPassLight::Directional(directional) => {
            let shadow_map_texture: Option<TextureId> =
                directional.shadow_map_target.as_ref().and_then(|target| {
                    debug_assert!(
                        target.depth_texture.is_some(),
                        "shadow map target must have a depth texture"
                    );
                    target.depth_texture
                });

            list.add_apply_directional_light(
                directional.colour,
                directional.direction,
                directional.light_view_projection(),
                directional.shadow_tolerance,
                shadow_map_texture,
            );
        }
        RenderPassLight::Point(point) => {
            list.add_apply_point_light(point.colour, point.position, point.attenuation);
        }
    }
}
