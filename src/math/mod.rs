//! Vector and matrix types for 2D and 3D transform pipelines.
//!
//! All types are small `Copy` values with `f32` components, laid out so they
//! can be written straight into GPU buffers (e.g., for use with WGPU/WGSL).
//!
//! # Module Organization
//!
//! - [`vec`] contains `Vector2`, `Vector3` and `Vector4` (re-exported here)
//! - [`mat`] contains `Matrix2x2`, `Matrix3x3` and `Matrix4x4` (re-exported here)
//! - [`error`] holds [`MathError`], returned when a matrix cannot be inverted
//! - Angle conversions are provided at this level; every rotation API takes radians

mod approx_eq;
pub mod error;
pub mod mat;
pub mod vec;

pub use error::MathError;
pub use mat::{Matrix2x2, Matrix3x3, Matrix4x4};
pub use vec::{Vector2, Vector3, Vector4};

/// Converts degrees to radians.
///
/// The input is first wrapped into `(-360, 360)` with `%`, so whole turns are dropped.
///
/// # Example
/// ```
/// use linmath::math::deg_to_rad;
///
/// assert!((deg_to_rad(180.0) - std::f32::consts::PI).abs() < 1e-6);
/// assert!((deg_to_rad(540.0) - std::f32::consts::PI).abs() < 1e-6);
/// ```
pub fn deg_to_rad(degrees: f32) -> f32 {
    (degrees % 360.0) * (std::f32::consts::PI / 180.0)
}

/// Converts radians to degrees, wrapping whole turns like [`deg_to_rad`].
///
/// # Example
/// ```
/// use linmath::math::rad_to_deg;
///
/// assert!((rad_to_deg(std::f32::consts::PI) - 180.0).abs() < 1e-4);
/// assert!((rad_to_deg(3.0 * std::f32::consts::PI) - 180.0).abs() < 1e-3);
/// ```
pub fn rad_to_deg(radians: f32) -> f32 {
    (radians % (2.0 * std::f32::consts::PI)) * (180.0 / std::f32::consts::PI)
}
