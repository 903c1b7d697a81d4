use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign,
};

use crate::math::error::MathError;
use crate::math::vec::Vector2;

/// A 2×2 matrix stored row-major: element `(row, col)` is `m[row * 2 + col]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Matrix2x2 {
    /// Row-major elements
    pub m: [f32; 4],
}

impl Matrix2x2 {
    /// The identity matrix.
    pub const IDENTITY: Matrix2x2 = Matrix2x2::new([1.0, 0.0, 0.0, 1.0]);

    /// Wraps four row-major elements.
    pub const fn new(m: [f32; 4]) -> Self {
        Matrix2x2 { m }
    }

    /// Every element set to `value`.
    pub const fn splat(value: f32) -> Self {
        Matrix2x2::new([value; 4])
    }

    /// Builds a matrix whose rows are `a` and `b`.
    pub const fn from_rows(a: Vector2, b: Vector2) -> Self {
        Matrix2x2::new([a.x, a.y, b.x, b.y])
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Row-by-column product `self · other`.
    pub fn multiply(&self, other: &Self) -> Self {
        let m = &self.m;
        let o = &other.m;
        Matrix2x2::new([
            m[0] * o[0] + m[1] * o[2],
            m[0] * o[1] + m[1] * o[3],
            m[2] * o[0] + m[3] * o[2],
            m[2] * o[1] + m[3] * o[3],
        ])
    }

    /// `m0 * m3 - m1 * m2`
    pub fn determinant(&self) -> f32 {
        self.m[0] * self.m[3] - self.m[1] * self.m[2]
    }

    /// Adjugate: the diagonal entries swapped and the off-diagonal entries negated.
    ///
    /// Unlike the 3×3 and 4×4 variants this already includes the transpose, so
    /// the inverse is `adjoint() / determinant()` directly.
    pub fn adjoint(&self) -> Self {
        Matrix2x2::new([self.m[3], -self.m[1], -self.m[2], self.m[0]])
    }

    /// Inverse of `self`, or `MathError::SingularMatrix` if the determinant is exactly zero.
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        let determinant = self.determinant();
        if determinant == 0.0 {
            log::debug!("rejecting inverse of singular 2x2 matrix {:?}", self.m);
            return Err(MathError::SingularMatrix(2));
        }
        Ok(self.adjoint() / determinant)
    }

    /// Writes the inverse into `out` and returns `true`, or returns `false` and
    /// leaves `out` untouched when the matrix is singular.
    pub fn get_inverse(&self, out: &mut Self) -> bool {
        match self.try_inverse() {
            Ok(inverse) => {
                *out = inverse;
                true
            }
            Err(_) => false,
        }
    }

    /// Inverts in place. Returns `false` and leaves `self` unchanged when singular.
    pub fn invert(&mut self) -> bool {
        let source = *self;
        source.get_inverse(self)
    }

    /// Swaps the off-diagonal pair.
    pub fn transpose(&self) -> Self {
        Matrix2x2::new([self.m[0], self.m[2], self.m[1], self.m[3]])
    }

    /// Row `index` (zero-based).
    ///
    /// # Panics
    /// If `index >= 2`.
    pub fn row(&self, index: usize) -> Vector2 {
        assert!(index < 2, "row index {} out of range for 2x2 matrix", index);
        Vector2::new(self.m[index * 2], self.m[index * 2 + 1])
    }

    /// Column `index` (zero-based).
    ///
    /// # Panics
    /// If `index >= 2`.
    pub fn column(&self, index: usize) -> Vector2 {
        assert!(index < 2, "column index {} out of range for 2x2 matrix", index);
        Vector2::new(self.m[index], self.m[2 + index])
    }

    /// Applies the matrix to a column vector.
    pub fn transform_vector(&self, v: &Vector2) -> Vector2 {
        Vector2::new(
            self.m[0] * v.x + self.m[1] * v.y,
            self.m[2] * v.x + self.m[3] * v.y,
        )
    }

    /// Views the elements as a flat row-major array.
    pub fn as_array(&self) -> &[f32; 4] {
        &self.m
    }
}

impl From<[f32; 4]> for Matrix2x2 {
    fn from(values: [f32; 4]) -> Self {
        Matrix2x2::new(values)
    }
}

impl From<Matrix2x2> for [f32; 4] {
    fn from(matrix: Matrix2x2) -> Self {
        matrix.m
    }
}

impl Index<(usize, usize)> for Matrix2x2 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(
            row < 2 && col < 2,
            "index ({}, {}) out of range for 2x2 matrix",
            row,
            col
        );
        &self.m[row * 2 + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix2x2 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(
            row < 2 && col < 2,
            "index ({}, {}) out of range for 2x2 matrix",
            row,
            col
        );
        &mut self.m[row * 2 + col]
    }
}

impl Mul for Matrix2x2 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.multiply(&other)
    }
}

impl Mul<Vector2> for Matrix2x2 {
    type Output = Vector2;

    fn mul(self, v: Vector2) -> Vector2 {
        self.transform_vector(&v)
    }
}

impl Add for Matrix2x2 {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Add<f32> for Matrix2x2 {
    type Output = Self;

    fn add(mut self, value: f32) -> Self {
        self += value;
        self
    }
}

impl AddAssign for Matrix2x2 {
    fn add_assign(&mut self, other: Self) {
        for (a, b) in self.m.iter_mut().zip(other.m) {
            *a += b;
        }
    }
}

impl AddAssign<f32> for Matrix2x2 {
    fn add_assign(&mut self, value: f32) {
        self.m.iter_mut().for_each(|a| *a += value);
    }
}

impl Sub for Matrix2x2 {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl Sub<f32> for Matrix2x2 {
    type Output = Self;

    fn sub(mut self, value: f32) -> Self {
        self -= value;
        self
    }
}

impl SubAssign for Matrix2x2 {
    fn sub_assign(&mut self, other: Self) {
        for (a, b) in self.m.iter_mut().zip(other.m) {
            *a -= b;
        }
    }
}

impl SubAssign<f32> for Matrix2x2 {
    fn sub_assign(&mut self, value: f32) {
        self.m.iter_mut().for_each(|a| *a -= value);
    }
}

impl Mul<f32> for Matrix2x2 {
    type Output = Self;

    fn mul(mut self, value: f32) -> Self {
        self *= value;
        self
    }
}

impl MulAssign<f32> for Matrix2x2 {
    fn mul_assign(&mut self, value: f32) {
        self.m.iter_mut().for_each(|a| *a *= value);
    }
}

impl Div<f32> for Matrix2x2 {
    type Output = Self;

    fn div(mut self, value: f32) -> Self {
        self /= value;
        self
    }
}

impl DivAssign<f32> for Matrix2x2 {
    fn div_assign(&mut self, value: f32) {
        self.m.iter_mut().for_each(|a| *a /= value);
    }
}
