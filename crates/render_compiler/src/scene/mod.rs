//! Per-frame scene description
//!
//! The types here are produced by the upstream scene/render-graph builder
//! once per frame and consumed read-only by the compiler:
//!
//! ```text
//! TargetRenderPassGroup        one begin-target .. end-target unit
//!   └── CameraRenderPassGroup  one camera and its passes
//!         └── RenderPass       one lighting configuration
//!               └── RenderPassObject  one drawable instance
//! ```
//!
//! Everything is plain data. Objects within a pass arrive pre-sorted by the
//! upstream sort predicates (material then mesh) so that the pass compiler
//! only has to coalesce adjacent duplicates.

mod camera;
mod groups;
mod lighting;
mod pass;

pub use camera::RenderCamera;
pub use groups::{CameraRenderPassGroup, TargetRenderPassGroup};
pub use lighting::{
    AmbientRenderLight, Attenuation, DirectionalRenderLight, PointRenderLight, RenderPassLight,
};
pub use pass::{PassObjectMesh, RenderPass, RenderPassObject};
