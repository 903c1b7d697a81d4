//! Vector types in two, three and four dimensions.
//!
//! Every type is a `#[repr(C)]` aggregate of `f32` fields that derives
//! `bytemuck::Pod`, so values can be cast to `[f32; N]` or raw bytes without
//! copying. Equality is exact and componentwise; use the `approx` traits for
//! tolerant comparisons.
//!
//! Normalizing a zero-length vector is a precondition violation and panics.

mod vector2;
mod vector3;
mod vector4;

pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;
