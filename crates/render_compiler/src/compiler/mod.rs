//! Frame compilation
//!
//! Turns a frame's scene description into a [`RenderCommandBuffer`]. The
//! orchestrator walks the target/camera/pass hierarchy sequentially,
//! assigning every list its slot and writing the framing commands, then
//! fans the per-pass compilations out as parallel tasks and joins once
//! before handing the buffer to the caller:
//!
//! ```text
//! plan list count -> allocate lists -> assign slots + framing commands
//!                 -> fan out pass compilations -> join -> buffer
//! ```
//!
//! Slot assignment happens before any task runs, so the buffer's list
//! order is deterministic regardless of task completion order.

pub mod planner;
mod pass_compiler;

use slotmap::SlotMap;

use crate::commands::{RenderCommandBuffer, RenderCommandList};
use crate::resources::{DynamicMesh, DynamicMeshId};
use crate::scene::{RenderPass, TargetRenderPassGroup};
use crate::tasks::{Task, TaskScheduler};

/// Compile a frame's scene description into a command buffer
///
/// Takes the frame's ordered target groups, the per-frame dynamic meshes to
/// keep alive for the buffer's lifetime, and optional pre/post command
/// lists that are moved verbatim into the first/last slot when non-empty.
/// Blocks until every pass compilation has finished; the returned buffer is
/// fully populated and ready for the backend.
///
/// This function does not fail: it performs no I/O, and malformed scene
/// descriptions are programmer errors caught by debug assertions.
pub fn compile_render_commands(
    scheduler: &dyn TaskScheduler,
    target_groups: &[TargetRenderPassGroup],
    dynamic_meshes: SlotMap<DynamicMeshId, DynamicMesh>,
    pre_render_commands: RenderCommandList,
    post_render_commands: RenderCommandList,
) -> RenderCommandBuffer {
    let num_lists = planner::calc_num_render_command_lists(
        target_groups,
        &pre_render_commands,
        &post_render_commands,
    );

    let mut lists = vec![RenderCommandList::new(); num_lists];
    let mut pass_jobs: Vec<Option<&RenderPass>> = vec![None; num_lists];
    let mut cursor = 0;

    if !pre_render_commands.is_empty() {
        lists[cursor] = pre_render_commands;
        cursor += 1;
    }

    for target_group in target_groups {
        add_begin_command(target_group, &mut lists[cursor]);
        cursor += 1;

        for camera_group in &target_group.camera_groups {
            if camera_group.has_pass_objects() {
                // The camera command is prefixed into whichever list holds
                // the group's first non-empty pass; camera state persists
                // across the remaining lists of the group.
                let camera = &camera_group.camera;
                lists[cursor].add_apply_camera(camera.position(), camera.view_projection);

                for pass in &camera_group.passes {
                    if pass.has_objects() {
                        pass_jobs[cursor] = Some(pass);
                        cursor += 1;
                    }
                }
            }
        }

        lists[cursor].add_end();
        cursor += 1;
    }

    if !post_render_commands.is_empty() {
        lists[cursor] = post_render_commands;
        cursor += 1;
    }

    debug_assert_eq!(
        cursor, num_lists,
        "planned list count must match populated list count"
    );

    // Each task gets exclusive mutable access to its own slot; the zip
    // keeps the borrows disjoint. The block scope ends those borrows
    // before the lists move into the buffer.
    {
        let tasks: Vec<Task<'_>> = lists
            .iter_mut()
            .zip(pass_jobs.iter().copied())
            .filter_map(|(list, job)| {
                job.map(|pass| {
                    Box::new(move || pass_compiler::compile_pass(pass, list)) as Task<'_>
                })
            })
            .collect();

        if !tasks.is_empty() {
            log::trace!(
                "Dispatching {} pass compilations across {} command lists",
                tasks.len(),
                num_lists
            );
            scheduler.process_tasks(tasks);
        }
    }

    RenderCommandBuffer::new(lists, dynamic_meshes)
}

/// Write the begin framing command for a target group
fn add_begin_command(target_group: &TargetRenderPassGroup, list: &mut RenderCommandList) {
    match &target_group.target {
        Some(target) => list.add_begin_with_target(target.id, target_group.clear_colour),
        None => list.add_begin(target_group.resolution, target_group.clear_colour),
    }
}
