//! List-count planning
//!
//! The command buffer is allocated with its final list count before any
//! command is written: pass compilations run concurrently against stable
//! slot indices, so lists must never be relocated mid-compilation. This
//! module computes that count, with no side effects.

use crate::commands::RenderCommandList;
use crate::scene::TargetRenderPassGroup;

/// Calculate the number of command lists a frame requires
///
/// One list for the pre-render commands if there are any, then per target
/// group one list for the begin framing, one per render pass that has at
/// least one object, and one for the end framing, then one list for the
/// post-render commands if there are any.
pub fn calc_num_render_command_lists(
    target_groups: &[TargetRenderPassGroup],
    pre_render_commands: &RenderCommandList,
    post_render_commands: &RenderCommandList,
) -> usize {
    let mut count = 0;

    if !pre_render_commands.is_empty() {
        count += 1;
    }

    for target_group in target_groups {
        count += 1; // target setup

        for camera_group in &target_group.camera_groups {
            count += camera_group
                .passes
                .iter()
                .filter(|pass| pass.has_objects())
                .count();
        }

        count += 1; // target cleanup
    }

    if !post_render_commands.is_empty() {
        count += 1;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Colour, Mat4};
    use crate::resources::{MaterialId, MeshId};
    use crate::scene::{
        CameraRenderPassGroup, RenderCamera, RenderPass, RenderPassLight, RenderPassObject,
    };
    use slotmap::SlotMap;

    fn object() -> RenderPassObject {
        let mut materials: SlotMap<MaterialId, ()> = SlotMap::with_key();
        let mut meshes: SlotMap<MeshId, ()> = SlotMap::with_key();
        RenderPassObject::static_mesh(materials.insert(()), meshes.insert(()), Mat4::identity())
    }

    fn camera_group(pass_object_counts: &[usize]) -> CameraRenderPassGroup {
        let passes = pass_object_counts
            .iter()
            .map(|&n| RenderPass::new(RenderPassLight::None, (0..n).map(|_| object()).collect()))
            .collect();
        CameraRenderPassGroup::new(RenderCamera::new(Mat4::identity(), Mat4::identity()), passes)
    }

    fn onscreen_group(camera_groups: Vec<CameraRenderPassGroup>) -> TargetRenderPassGroup {
        TargetRenderPassGroup::onscreen((1280, 720), Colour::BLACK, camera_groups)
    }

    #[test]
    fn test_empty_frame_needs_no_lists() {
        let count = calc_num_render_command_lists(
            &[],
            &RenderCommandList::new(),
            &RenderCommandList::new(),
        );
        assert_eq!(count, 0);
    }

    #[test]
    fn test_target_group_framing_costs_two_lists() {
        let groups = vec![onscreen_group(vec![])];
        let count = calc_num_render_command_lists(
            &groups,
            &RenderCommandList::new(),
            &RenderCommandList::new(),
        );
        assert_eq!(count, 2);
    }

    #[test]
    fn test_only_passes_with_objects_count() {
        // Two non-empty passes in one camera group, an all-empty camera
        // group, and a second target group with a single non-empty pass.
        let groups = vec![
            onscreen_group(vec![camera_group(&[2, 0, 1]), camera_group(&[0, 0])]),
            onscreen_group(vec![camera_group(&[5])]),
        ];
        let count = calc_num_render_command_lists(
            &groups,
            &RenderCommandList::new(),
            &RenderCommandList::new(),
        );
        assert_eq!(count, 2 + 2 + 2 + 1);
    }

    #[test]
    fn test_framing_lists_count_only_when_non_empty() {
        let mut pre = RenderCommandList::new();
        pre.add_end();
        let empty = RenderCommandList::new();

        let groups = vec![onscreen_group(vec![camera_group(&[1])])];
        assert_eq!(calc_num_render_command_lists(&groups, &pre, &empty), 4);
        assert_eq!(calc_num_render_command_lists(&groups, &empty, &pre), 4);
        assert_eq!(calc_num_render_command_lists(&groups, &pre, &pre), 5);
        assert_eq!(calc_num_render_command_lists(&groups, &empty, &empty), 3);
    }
}
