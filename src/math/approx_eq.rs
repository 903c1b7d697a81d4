//! Tolerant comparisons through the `approx` traits.
//!
//! `==` on every type stays exact; these impls back `assert_relative_eq!`,
//! `assert_abs_diff_eq!` and the matching `relative_eq!`/`abs_diff_eq!` checks.

use approx::{AbsDiffEq, RelativeEq};

use super::mat::{Matrix2x2, Matrix3x3, Matrix4x4};
use super::vec::{Vector2, Vector3, Vector4};

macro_rules! impl_approx_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AbsDiffEq for $ty {
                type Epsilon = f32;

                fn default_epsilon() -> f32 {
                    f32::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                    self.as_array()
                        .iter()
                        .zip(other.as_array())
                        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
                }
            }

            impl RelativeEq for $ty {
                fn default_max_relative() -> f32 {
                    f32::default_max_relative()
                }

                fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                    self.as_array()
                        .iter()
                        .zip(other.as_array())
                        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
                }
            }
        )*
    };
}

impl_approx_eq!(Vector2, Vector3, Vector4, Matrix2x2, Matrix3x3, Matrix4x4);
