//! Camera description for a frame

use crate::foundation::math::{self, Mat4, Vec3};

/// The camera state a group of render passes is drawn with
///
/// Both matrices are computed upstream by the camera component; the compiler
/// only forwards them into apply-camera commands.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCamera {
    /// World transform of the camera
    pub world_matrix: Mat4,

    /// Combined view-projection matrix
    pub view_projection: Mat4,
}

impl RenderCamera {
    /// Create a camera description
    pub fn new(world_matrix: Mat4, view_projection: Mat4) -> Self {
        Self {
            world_matrix,
            view_projection,
        }
    }

    /// World-space position of the camera
    pub fn position(&self) -> Vec3 {
        math::translation(&self.world_matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_position_from_world_matrix() {
        let camera = RenderCamera::new(
            Mat4::new_translation(&Vec3::new(0.0, 5.0, -10.0)),
            Mat4::identity(),
        );
        assert_eq!(camera.position(), Vec3::new(0.0, 5.0, -10.0));
    }
}
