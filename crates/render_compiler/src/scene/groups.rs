//! Camera and target groupings of render passes

use crate::foundation::math::Colour;
use crate::resources::RenderTargetGroup;
use crate::scene::camera::RenderCamera;
use crate::scene::pass::RenderPass;

/// A camera and the ordered render passes drawn with it
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRenderPassGroup {
    /// Camera state applied before the group's passes
    pub camera: RenderCamera,

    /// Render passes, in draw order
    pub passes: Vec<RenderPass>,
}

impl CameraRenderPassGroup {
    /// Create a camera group
    pub fn new(camera: RenderCamera, passes: Vec<RenderPass>) -> Self {
        Self { camera, passes }
    }

    /// Whether the group contains any drawable work
    ///
    /// A group with no objects in any pass contributes nothing to the
    /// compiled output, not even an apply-camera command.
    pub fn has_pass_objects(&self) -> bool {
        self.passes.iter().any(RenderPass::has_objects)
    }
}

/// One begin-target .. end-target unit of work
///
/// Renders either into an offscreen target group or, when `target` is
/// absent, into the default target at the given resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetRenderPassGroup {
    /// Offscreen target to render into, or `None` for the default target
    pub target: Option<RenderTargetGroup>,

    /// Resolution in pixels, used when rendering to the default target
    pub resolution: (u32, u32),

    /// Colour the target is cleared to
    pub clear_colour: Colour,

    /// Camera groups drawn into this target, in order
    pub camera_groups: Vec<CameraRenderPassGroup>,
}

impl TargetRenderPassGroup {
    /// Create a group rendering to the default target
    pub fn onscreen(
        resolution: (u32, u32),
        clear_colour: Colour,
        camera_groups: Vec<CameraRenderPassGroup>,
    ) -> Self {
        Self {
            target: None,
            resolution,
            clear_colour,
            camera_groups,
        }
    }

    /// Create a group rendering to an offscreen target
    pub fn offscreen(
        target: RenderTargetGroup,
        resolution: (u32, u32),
        clear_colour: Colour,
        camera_groups: Vec<CameraRenderPassGroup>,
    ) -> Self {
        Self {
            target: Some(target),
            resolution,
            clear_colour,
            camera_groups,
        }
    }
}
