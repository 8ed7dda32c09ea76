//! Per-pass lighting configuration
//!
//! Each render pass is lit by at most one light. The light kind and its
//! payload travel together as a sum type so the pass compiler can match
//! exhaustively; a pass with no light still produces a concrete ambient
//! black command rather than being skipped.

use crate::foundation::math::{Colour, Mat4, Vec3};
use crate::resources::RenderTargetGroup;

/// The lighting configuration of a render pass
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPassLight {
    /// No light contribution; compiles to ambient black
    None,

    /// Flat ambient lighting
    Ambient(AmbientRenderLight),

    /// Directional light, optionally casting shadows
    Directional(DirectionalRenderLight),

    /// Point light with distance attenuation
    Point(PointRenderLight),
}

/// Ambient light payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientRenderLight {
    /// Light colour, pre-multiplied by intensity upstream
    pub colour: Colour,
}

impl AmbientRenderLight {
    /// Create an ambient light
    pub fn new(colour: Colour) -> Self {
        Self { colour }
    }
}

/// Directional light payload
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalRenderLight {
    /// Light colour, pre-multiplied by intensity upstream
    pub colour: Colour,

    /// Normalized light direction in world space
    pub direction: Vec3,

    /// World transform of the light, used to derive the shadow view matrix
    pub light_world_matrix: Mat4,

    /// Projection matrix of the light's shadow frustum
    pub light_projection_matrix: Mat4,

    /// Depth comparison tolerance used during shadow sampling
    pub shadow_tolerance: f32,

    /// Target the shadow map was rendered into. Present iff this light
    /// casts shadows; the target must carry a depth texture.
    pub shadow_map_target: Option<RenderTargetGroup>,
}

impl DirectionalRenderLight {
    /// Create a directional light
    pub fn new(
        colour: Colour,
        direction: Vec3,
        light_world_matrix: Mat4,
        light_projection_matrix: Mat4,
        shadow_tolerance: f32,
        shadow_map_target: Option<RenderTargetGroup>,
    ) -> Self {
        Self {
            colour,
            direction,
            light_world_matrix,
            light_projection_matrix,
            shadow_tolerance,
            shadow_map_target,
        }
    }

    /// Combined view-projection matrix of the light
    ///
    /// Derived as inverse(light world matrix) * light projection matrix.
    /// World transforms are rigid, so the inverse always exists.
    pub fn light_view_projection(&self) -> Mat4 {
        let view = self
            .light_world_matrix
            .try_inverse()
            .unwrap_or_else(Mat4::identity);
        view * self.light_projection_matrix
    }
}

/// Point light payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRenderLight {
    /// Light colour, pre-multiplied by intensity upstream
    pub colour: Colour,

    /// World-space position of the light
    pub position: Vec3,

    /// Distance attenuation coefficients
    pub attenuation: Attenuation,
}

impl PointRenderLight {
    /// Create a point light
    pub fn new(colour: Colour, position: Vec3, attenuation: Attenuation) -> Self {
        Self {
            colour,
            position,
            attenuation,
        }
    }
}

/// Quadratic distance attenuation coefficients for a point light
///
/// Intensity at distance d is 1 / (constant + linear*d + quadratic*d*d).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    /// Constant coefficient
    pub constant: f32,

    /// Linear coefficient
    pub linear: f32,

    /// Quadratic coefficient
    pub quadratic: f32,
}

impl Attenuation {
    /// Create attenuation from explicit coefficients
    pub fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    /// Derive attenuation from a radius of influence
    ///
    /// Chooses coefficients such that intensity falls to roughly
    /// `min_intensity` at `radius`.
    pub fn from_radius(radius: f32, min_intensity: f32) -> Self {
        debug_assert!(radius > 0.0, "attenuation radius must be positive");
        debug_assert!(min_intensity > 0.0, "minimum intensity must be positive");
        Self {
            constant: 1.0,
            linear: 2.0 / radius,
            quadratic: (1.0 / min_intensity) / (radius * radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_light_view_projection_inverts_world_matrix() {
        let world = Mat4::new_translation(&Vec3::new(0.0, 10.0, 0.0));
        let projection = Mat4::new_orthographic(-5.0, 5.0, -5.0, 5.0, 0.1, 50.0);
        let light = DirectionalRenderLight::new(
            Colour::WHITE,
            Vec3::new(0.0, -1.0, 0.0),
            world,
            projection,
            0.005,
            None,
        );

        let expected = world.try_inverse().unwrap() * projection;
        assert_relative_eq!(light.light_view_projection(), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_attenuation_from_radius_reaches_min_intensity() {
        let radius = 8.0;
        let min_intensity = 0.02;
        let att = Attenuation::from_radius(radius, min_intensity);

        let denom = att.constant + att.linear * radius + att.quadratic * radius * radius;
        let intensity_at_radius = 1.0 / denom;
        assert!(intensity_at_radius <= min_intensity);
    }
}
