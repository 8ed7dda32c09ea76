//! Ordered lists of low-level render commands

use crate::foundation::math::{Colour, Mat4, Vec3};
use crate::resources::{DynamicMeshId, MaterialId, MeshId, TargetGroupId, TextureId};
use crate::scene::Attenuation;

/// One low-level command consumable by a render backend
///
/// Each record is self-contained; commands never reference each other or
/// the scene description they were compiled from.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Begin rendering to the default target
    Begin {
        /// Target resolution in pixels
        resolution: (u32, u32),
        /// Colour the target is cleared to
        clear_colour: Colour,
    },

    /// Begin rendering to an offscreen target group
    BeginWithTarget {
        /// The target group to render into
        target: TargetGroupId,
        /// Colour the target is cleared to
        clear_colour: Colour,
    },

    /// Apply camera state; persists until the next apply-camera
    ApplyCamera {
        /// World-space camera position
        position: Vec3,
        /// Combined view-projection matrix
        view_projection: Mat4,
    },

    /// Apply flat ambient lighting
    ApplyAmbientLight {
        /// Ambient colour; black means no light contribution
        colour: Colour,
    },

    /// Apply a directional light
    ApplyDirectionalLight {
        /// Light colour
        colour: Colour,
        /// Normalized light direction in world space
        direction: Vec3,
        /// Combined view-projection matrix of the light's shadow frustum
        light_view_projection: Mat4,
        /// Depth comparison tolerance for shadow sampling
        shadow_tolerance: f32,
        /// Shadow map depth texture, if the light casts shadows
        shadow_map_texture: Option<TextureId>,
    },

    /// Apply a point light
    ApplyPointLight {
        /// Light colour
        colour: Colour,
        /// World-space light position
        position: Vec3,
        /// Distance attenuation coefficients
        attenuation: Attenuation,
    },

    /// Bind a material
    ApplyMaterial {
        /// The material to bind
        material: MaterialId,
    },

    /// Bind a static mesh
    ApplyMesh {
        /// The mesh to bind
        mesh: MeshId,
    },

    /// Bind a per-frame dynamic mesh
    ApplyDynamicMesh {
        /// The dynamic mesh to bind; owned by the enclosing buffer
        mesh: DynamicMeshId,
    },

    /// Draw one instance of the currently bound material and mesh
    RenderInstance {
        /// World transform of the instance
        world_matrix: Mat4,
    },

    /// Finish rendering to the current target
    End,
}

/// An ordered, append-only sequence of render commands
///
/// List order is the execution contract: the backend runs commands front to
/// back with no reordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderCommandList {
    commands: Vec<RenderCommand>,
}

impl RenderCommandList {
    /// Create an empty command list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a begin command for the default target
    pub fn add_begin(&mut self, resolution: (u32, u32), clear_colour: Colour) {
        self.commands.push(RenderCommand::Begin {
            resolution,
            clear_colour,
        });
    }

    /// Append a begin command for an offscreen target group
    pub fn add_begin_with_target(&mut self, target: TargetGroupId, clear_colour: Colour) {
        self.commands.push(RenderCommand::BeginWithTarget {
            target,
            clear_colour,
        });
    }

    /// Append an apply-camera command
    pub fn add_apply_camera(&mut self, position: Vec3, view_projection: Mat4) {
        self.commands.push(RenderCommand::ApplyCamera {
            position,
            view_projection,
        });
    }

    /// Append an apply-ambient-light command
    pub fn add_apply_ambient_light(&mut self, colour: Colour) {
        self.commands
            .push(RenderCommand::ApplyAmbientLight { colour });
    }

    /// Append an apply-directional-light command
    pub fn add_apply_directional_light(
        &mut self,
        colour: Colour,
        direction: Vec3,
        light_view_projection: Mat4,
        shadow_tolerance: f32,
        shadow_map_texture: Option<TextureId>,
    ) {
        self.commands.push(RenderCommand::ApplyDirectionalLight {
            colour,
            direction,
            light_view_projection,
            shadow_tolerance,
            shadow_map_texture,
        });
    }

    /// Append an apply-point-light command
    pub fn add_apply_point_light(&mut self, colour: Colour, position: Vec3, attenuation: Attenuation) {
        self.commands.push(RenderCommand::ApplyPointLight {
            colour,
            position,
            attenuation,
        });
    }

    /// Append an apply-material command
    pub fn add_apply_material(&mut self, material: MaterialId) {
        self.commands.push(RenderCommand::ApplyMaterial { material });
    }

    /// Append an apply-mesh command for a static mesh
    pub fn add_apply_mesh(&mut self, mesh: MeshId) {
        self.commands.push(RenderCommand::ApplyMesh { mesh });
    }

    /// Append an apply-dynamic-mesh command
    pub fn add_apply_dynamic_mesh(&mut self, mesh: DynamicMeshId) {
        self.commands.push(RenderCommand::ApplyDynamicMesh { mesh });
    }

    /// Append a render-instance command
    pub fn add_render_instance(&mut self, world_matrix: Mat4) {
        self.commands
            .push(RenderCommand::RenderInstance { world_matrix });
    }

    /// Append an end command
    pub fn add_end(&mut self) {
        self.commands.push(RenderCommand::End);
    }

    /// The commands in execution order
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of commands in the list
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the list contains no commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over the commands in execution order
    pub fn iter(&self) -> std::slice::Iter<'_, RenderCommand> {
        self.commands.iter()
    }
}

impl<'a> IntoIterator for &'a RenderCommandList {
    type Item = &'a RenderCommand;
    type IntoIter = std::slice::Iter<'a, RenderCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_preserve_append_order() {
        let mut list = RenderCommandList::new();
        assert!(list.is_empty());

        list.add_begin((1920, 1080), Colour::BLACK);
        list.add_apply_ambient_light(Colour::WHITE);
        list.add_render_instance(Mat4::identity());
        list.add_end();

        assert_eq!(list.len(), 4);
        assert!(matches!(list.commands()[0], RenderCommand::Begin { .. }));
        assert!(matches!(
            list.commands()[1],
            RenderCommand::ApplyAmbientLight { .. }
        ));
        assert!(matches!(
            list.commands()[2],
            RenderCommand::RenderInstance { .. }
        ));
        assert_eq!(list.commands()[3], RenderCommand::End);
    }
}
