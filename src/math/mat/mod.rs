//! Square matrices in row-major storage.
//!
//! All three types share the same conventions:
//! - element `(row, col)` of an N×N matrix is `m[row * N + col]`
//! - `multiply` and `*` compute `self · other`, and matrices act on column vectors
//! - inversion fails only when the determinant is exactly `0.0`; the boolean
//!   `get_inverse`/`invert` forms leave their destination untouched in that case
//!
//! `Matrix3x3` and `Matrix4x4` build 2D and 3D affine transforms respectively;
//! `Matrix4x4` also builds perspective and orthographic projections.

mod matrix2;
mod matrix3;
mod matrix4;

pub use matrix2::Matrix2x2;
pub use matrix3::Matrix3x3;
pub use matrix4::Matrix4x4;
