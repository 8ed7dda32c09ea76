//! End-to-end frame compilation tests
//!
//! Builds small but complete scene descriptions and checks the structure
//! of the compiled command buffers: list counts, framing placement, camera
//! injection, coalescing, and independence from task completion order.

use render_compiler::compiler::planner::calc_num_render_command_lists;
use render_compiler::foundation::logging;
use render_compiler::prelude::*;
use slotmap::SlotMap;

/// External resource caches standing in for the engine's long-lived
/// material/mesh/texture systems. The compiler only ever sees the keys.
struct ResourceCaches {
    materials: SlotMap<MaterialId, ()>,
    meshes: SlotMap<MeshId, ()>,
    textures: SlotMap<TextureId, ()>,
    targets: SlotMap<TargetGroupId, ()>,
}

impl ResourceCaches {
    fn new() -> Self {
        Self {
            materials: SlotMap::with_key(),
            meshes: SlotMap::with_key(),
            textures: SlotMap::with_key(),
            targets: SlotMap::with_key(),
        }
    }

    fn material(&mut self) -> MaterialId {
        self.materials.insert(())
    }

    fn mesh(&mut self) -> MeshId {
        self.meshes.insert(())
    }

    fn texture(&mut self) -> TextureId {
        self.textures.insert(())
    }

    fn target(&mut self) -> TargetGroupId {
        self.targets.insert(())
    }
}

fn camera_at(x: f32) -> RenderCamera {
    RenderCamera::new(
        Mat4::new_translation(&Vec3::new(x, 0.0, 5.0)),
        Mat4::new_perspective(16.0 / 9.0, 1.2, 0.1, 100.0),
    )
}

fn pass_with_objects(caches: &mut ResourceCaches, n: usize) -> RenderPass {
    let material = caches.material();
    let mesh = caches.mesh();
    let objects = (0..n)
        .map(|i| {
            RenderPassObject::static_mesh(
                material,
                mesh,
                Mat4::new_translation(&Vec3::new(i as f32, 0.0, 0.0)),
            )
        })
        .collect();
    RenderPass::new(RenderPassLight::None, objects)
}

/// A frame with two target groups: an offscreen shadow-style target with a
/// single pass, and an onscreen target with two camera groups (one of them
/// empty) and three non-empty passes.
fn build_frame(caches: &mut ResourceCaches) -> Vec<TargetRenderPassGroup> {
    let offscreen_target = RenderTargetGroup::depth_only(caches.target(), caches.texture());
    let offscreen = TargetRenderPassGroup::offscreen(
        offscreen_target,
        (1024, 1024),
        Colour::WHITE,
        vec![CameraRenderPassGroup::new(
            camera_at(0.0),
            vec![pass_with_objects(caches, 2)],
        )],
    );

    let empty_camera_group = CameraRenderPassGroup::new(
        camera_at(1.0),
        vec![
            RenderPass::new(RenderPassLight::None, vec![]),
            RenderPass::new(RenderPassLight::None, vec![]),
        ],
    );
    let main_camera_group = CameraRenderPassGroup::new(
        camera_at(2.0),
        vec![
            pass_with_objects(caches, 3),
            RenderPass::new(RenderPassLight::None, vec![]),
            pass_with_objects(caches, 1),
            pass_with_objects(caches, 4),
        ],
    );
    let onscreen = TargetRenderPassGroup::onscreen(
        (1920, 1080),
        Colour::BLACK,
        vec![empty_camera_group, main_camera_group],
    );

    vec![offscreen, onscreen]
}

fn compile(
    scheduler: &dyn TaskScheduler,
    target_groups: &[TargetRenderPassGroup],
) -> RenderCommandBuffer {
    compile_render_commands(
        scheduler,
        target_groups,
        SlotMap::with_key(),
        RenderCommandList::new(),
        RenderCommandList::new(),
    )
}

#[test]
fn planner_count_matches_populated_lists() {
    logging::init_for_tests();
    let mut caches = ResourceCaches::new();
    let frame = build_frame(&mut caches);

    let planned =
        calc_num_render_command_lists(&frame, &RenderCommandList::new(), &RenderCommandList::new());
    let buffer = compile(&SerialScheduler, &frame);

    // offscreen: begin + 1 pass + end; onscreen: begin + 3 passes + end
    assert_eq!(planned, 3 + 5);
    assert_eq!(buffer.num_lists(), planned);
    assert!(buffer.lists().iter().all(|list| !list.is_empty()));
}

#[test]
fn empty_frame_compiles_to_empty_buffer() {
    let buffer = compile(&SerialScheduler, &[]);
    assert_eq!(buffer.num_lists(), 0);
}

#[test]
fn framing_commands_bracket_each_target_group() {
    let mut caches = ResourceCaches::new();
    let frame = build_frame(&mut caches);
    let buffer = compile(&SerialScheduler, &frame);

    // Offscreen group: lists 0..=2.
    match buffer.list(0).commands() {
        [RenderCommand::BeginWithTarget { target, clear_colour }] => {
            assert_eq!(*target, frame[0].target.unwrap().id);
            assert_eq!(*clear_colour, Colour::WHITE);
        }
        other => panic!("expected begin-with-target, got {other:?}"),
    }
    assert_eq!(buffer.list(2).commands(), [RenderCommand::End]);

    // Onscreen group: lists 3..=7.
    match buffer.list(3).commands() {
        [RenderCommand::Begin { resolution, clear_colour }] => {
            assert_eq!(*resolution, (1920, 1080));
            assert_eq!(*clear_colour, Colour::BLACK);
        }
        other => panic!("expected begin, got {other:?}"),
    }
    assert_eq!(buffer.list(7).commands(), [RenderCommand::End]);
}

#[test]
fn camera_is_applied_once_per_group_in_first_populated_pass() {
    let mut caches = ResourceCaches::new();
    let frame = build_frame(&mut caches);
    let buffer = compile(&SerialScheduler, &frame);

    // The onscreen camera group owns lists 4, 5 and 6; only list 4 carries
    // the apply-camera prefix. Camera state persists across the rest.
    let expected_camera = &frame[1].camera_groups[1].camera;
    match &buffer.list(4).commands()[0] {
        RenderCommand::ApplyCamera {
            position,
            view_projection,
        } => {
            assert_eq!(*position, expected_camera.position());
            assert_eq!(*view_projection, expected_camera.view_projection);
        }
        other => panic!("expected apply-camera, got {other:?}"),
    }

    for index in [5, 6] {
        assert!(
            !buffer
                .list(index)
                .iter()
                .any(|c| matches!(c, RenderCommand::ApplyCamera { .. })),
            "list {index} must not re-apply the camera"
        );
    }

    // The empty camera group contributes nothing at all: exactly one
    // apply-camera per populated camera group across the whole buffer.
    let camera_commands = buffer
        .lists()
        .iter()
        .flat_map(RenderCommandList::iter)
        .filter(|c| matches!(c, RenderCommand::ApplyCamera { .. }))
        .count();
    assert_eq!(camera_commands, 2);
}

#[test]
fn every_pass_list_starts_with_a_light_command() {
    let mut caches = ResourceCaches::new();
    let frame = build_frame(&mut caches);
    let buffer = compile(&SerialScheduler, &frame);

    // Pass lists are 1 (offscreen) and 4, 5, 6 (onscreen); list 4 carries
    // the apply-camera prefix first. The light for a pass with no light is
    // an explicit ambient black, never absent.
    for (index, light_pos) in [(1, 0), (4, 1), (5, 0), (6, 0)] {
        assert_eq!(
            buffer.list(index).commands()[light_pos],
            RenderCommand::ApplyAmbientLight {
                colour: Colour::BLACK
            },
            "list {index} must start its pass commands with the light"
        );
    }
}

#[test]
fn pre_list_lands_verbatim_in_slot_zero() {
    let mut caches = ResourceCaches::new();
    let frame = build_frame(&mut caches);

    let mut pre = RenderCommandList::new();
    pre.add_apply_ambient_light(Colour::rgb(0.1, 0.2, 0.3));
    pre.add_render_instance(Mat4::identity());
    let expected = pre.clone();

    let buffer = compile_render_commands(
        &SerialScheduler,
        &frame,
        SlotMap::with_key(),
        pre,
        RenderCommandList::new(),
    );

    assert_eq!(buffer.list(0), &expected);
    // No slot is reserved for the empty post-list.
    assert_eq!(buffer.num_lists(), 1 + 8);
    assert_eq!(
        buffer.list(buffer.num_lists() - 1).commands(),
        [RenderCommand::End]
    );
}

#[test]
fn post_list_lands_in_final_slot() {
    let mut caches = ResourceCaches::new();
    let frame = build_frame(&mut caches);

    let mut post = RenderCommandList::new();
    post.add_end();
    let expected = post.clone();

    let buffer = compile_render_commands(
        &SerialScheduler,
        &frame,
        SlotMap::with_key(),
        RenderCommandList::new(),
        post,
    );

    assert_eq!(buffer.num_lists(), 8 + 1);
    assert_eq!(buffer.list(8), &expected);
}

#[test]
fn compilation_is_idempotent() {
    let mut caches = ResourceCaches::new();
    let frame = build_frame(&mut caches);

    let first = compile(&SerialScheduler, &frame);
    let second = compile(&SerialScheduler, &frame);
    assert_eq!(first.lists(), second.lists());
}

#[test]
fn output_is_independent_of_task_completion_order() {
    logging::init_for_tests();
    let mut caches = ResourceCaches::new();
    let frame = build_frame(&mut caches);

    let serial = compile(&SerialScheduler, &frame);
    let reversed = compile(&render_compiler::tasks::ReversedScheduler, &frame);
    assert_eq!(serial.lists(), reversed.lists());

    let pool = WorkerPool::from_num_threads(Some(4)).expect("worker pool");
    for _ in 0..16 {
        let parallel = compile(&pool, &frame);
        assert_eq!(serial.lists(), parallel.lists());
    }
}

#[test]
fn dynamic_meshes_stay_alive_in_the_buffer() {
    let mut caches = ResourceCaches::new();
    let material = caches.material();

    let mut dynamic_meshes: SlotMap<DynamicMeshId, DynamicMesh> = SlotMap::with_key();
    let quad = dynamic_meshes.insert(DynamicMesh::new(vec![1u8; 64], vec![2u8; 12], 6));

    let frame = vec![TargetRenderPassGroup::onscreen(
        (640, 480),
        Colour::BLACK,
        vec![CameraRenderPassGroup::new(
            camera_at(0.0),
            vec![RenderPass::new(
                RenderPassLight::None,
                vec![RenderPassObject::dynamic_mesh(
                    material,
                    quad,
                    Mat4::identity(),
                )],
            )],
        )],
    )];

    let buffer = compile_render_commands(
        &SerialScheduler,
        &frame,
        dynamic_meshes,
        RenderCommandList::new(),
        RenderCommandList::new(),
    );

    // The pass list references the dynamic mesh and the buffer can resolve
    // that reference for upload.
    let bind = buffer
        .list(1)
        .iter()
        .find_map(|c| match c {
            RenderCommand::ApplyDynamicMesh { mesh } => Some(*mesh),
            _ => None,
        })
        .expect("pass must bind the dynamic mesh");
    assert_eq!(bind, quad);

    let mesh = buffer.dynamic_mesh(quad).expect("mesh must stay alive");
    assert_eq!(mesh.index_count(), 6);
}
