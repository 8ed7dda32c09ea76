//! Math utilities and types
//!
//! Provides fundamental math types for 3D graphics. These are treated as
//! opaque value types by the compiler; no math beyond matrix inversion and
//! multiplication happens in this crate.

pub use nalgebra::{Matrix3, Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// An RGBA colour with floating point channels in the [0, 1] range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    /// Red channel
    pub r: f32,

    /// Green channel
    pub g: f32,

    /// Blue channel
    pub b: f32,

    /// Alpha channel
    pub a: f32,
}

impl Colour {
    /// Opaque black. Used as the "no light contribution" sentinel by the
    /// pass compiler.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a colour from individual channels
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque colour from RGB channels
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Extract the translation component of a world transform
pub fn translation(world_matrix: &Mat4) -> Vec3 {
    Vec3::new(
        world_matrix[(0, 3)],
        world_matrix[(1, 3)],
        world_matrix[(2, 3)],
    )
}
