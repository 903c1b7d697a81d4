//! linmath - small-dimension linear algebra for real-time graphics
//!
//! Fixed-size `f32` vectors (2, 3 and 4 components) and square matrices
//! (2×2, 3×3 and 4×4) with the operations a renderer needs to build and
//! combine model, view and projection transforms.
//!
//! # Features
//! - **Vectors**: arithmetic operators, dot/cross products, normalization, interpolation
//! - **Matrices**: products, determinants, adjoints, inverses, transposes
//! - **Transforms**: translation, scaling, axis rotations, perspective and orthographic projections
//! - **Benchmarks**: timing of transform construction, reported through `log`
//!   (only with the `profiling` cargo feature)
//!
//! # Conventions
//! Matrices are stored row-major (`m[row * N + col]`) and act on column
//! vectors (`M · v`), so translation lives in the last column. Rotation
//! angles are radians, rotations are counter-clockwise about positive axes
//! and projections target a right-handed view space looking down `-Z`.
//!
//! # Example
//! ```
//! use linmath::{Matrix4x4, Vector3, Vector4};
//!
//! let model = Matrix4x4::transform(
//!     &Vector3::new(1.0, 0.0, 0.0),
//!     &Vector3::splat(2.0),
//!     0.0,
//!     0.0,
//!     0.0,
//! );
//! let origin = model * Vector4::new(0.0, 0.0, 0.0, 1.0);
//! assert_eq!(origin, Vector4::new(1.0, 0.0, 0.0, 1.0));
//! ```

#![warn(missing_docs)]
#[cfg(feature = "profiling")]
pub mod benchmarks;
pub mod math;

pub use math::{MathError, Matrix2x2, Matrix3x3, Matrix4x4, Vector2, Vector3, Vector4};
