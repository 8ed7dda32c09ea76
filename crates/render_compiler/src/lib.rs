//! # Render Compiler
//!
//! Compiles a frame's scene description (targets, cameras, render passes,
//! lights, drawable objects) into an ordered, backend-agnostic sequence of
//! low-level render commands, parallelizing the per-pass work across a
//! worker pool while preserving strict command ordering.
//!
//! ## Pipeline
//!
//! ```text
//! scene description --> planner (list count) --> command buffer allocation
//!                   --> orchestrator (slots + framing) --> per-pass tasks
//!                   --> join --> RenderCommandBuffer --> render backend
//! ```
//!
//! The scene description is produced upstream (scene graph, culling,
//! sorting) and consumed read-only here; the resulting
//! [`RenderCommandBuffer`](commands::RenderCommandBuffer) is handed to a
//! render backend that executes its lists strictly in index order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use render_compiler::prelude::*;
//! use slotmap::SlotMap;
//!
//! # fn build_target_groups() -> Vec<TargetRenderPassGroup> { Vec::new() }
//! let pool = WorkerPool::new().expect("worker pool");
//! let target_groups = build_target_groups();
//!
//! let buffer = compile_render_commands(
//!     &pool,
//!     &target_groups,
//!     SlotMap::with_key(),          // this frame's dynamic meshes
//!     RenderCommandList::new(),     // pre-render commands
//!     RenderCommandList::new(),     // post-render commands
//! );
//!
//! for list in buffer.lists() {
//!     for _command in list {
//!         // submit to the backend
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod commands;
pub mod compiler;
pub mod config;
pub mod foundation;
pub mod resources;
pub mod scene;
pub mod tasks;

pub use compiler::compile_render_commands;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        commands::{RenderCommand, RenderCommandBuffer, RenderCommandList},
        compile_render_commands,
        config::{CompilerConfig, ConfigError},
        foundation::math::{Colour, Mat4, Vec3},
        resources::{
            DynamicMesh, DynamicMeshId, MaterialId, MeshId, RenderTargetGroup, TargetGroupId,
            TextureId,
        },
        scene::{
            AmbientRenderLight, Attenuation, CameraRenderPassGroup, DirectionalRenderLight,
            PassObjectMesh, PointRenderLight, RenderCamera, RenderPass, RenderPassLight,
            RenderPassObject, TargetRenderPassGroup,
        },
        tasks::{SchedulerError, SerialScheduler, TaskScheduler, WorkerPool},
    };
}
