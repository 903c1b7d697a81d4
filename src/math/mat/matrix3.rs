use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign,
};

use crate::math::error::MathError;
use crate::math::vec::{Vector2, Vector3};

/// A 3×3 matrix stored row-major: element `(row, col)` is `m[row * 3 + col]`.
///
/// Doubles as a 2D affine transform in homogeneous coordinates, with the
/// translation in the last column.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Matrix3x3 {
    /// Row-major elements
    pub m: [f32; 9],
}

impl Matrix3x3 {
    /// The identity matrix.
    pub const IDENTITY: Matrix3x3 = Matrix3x3::new([
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0,
    ]);

    /// Wraps nine row-major elements.
    pub const fn new(m: [f32; 9]) -> Self {
        Matrix3x3 { m }
    }

    /// Every element set to `value`.
    pub const fn splat(value: f32) -> Self {
        Matrix3x3::new([value; 9])
    }

    /// Builds a matrix whose rows are `a`, `b` and `c`.
    pub const fn from_rows(a: Vector3, b: Vector3, c: Vector3) -> Self {
        Matrix3x3::new([a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z])
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Row-by-column product `self · other`.
    pub fn multiply(&self, other: &Self) -> Self {
        let m = &self.m;
        let o = &other.m;
        Matrix3x3::new([
            m[0] * o[0] + m[1] * o[3] + m[2] * o[6],
            m[0] * o[1] + m[1] * o[4] + m[2] * o[7],
            m[0] * o[2] + m[1] * o[5] + m[2] * o[8],
            m[3] * o[0] + m[4] * o[3] + m[5] * o[6],
            m[3] * o[1] + m[4] * o[4] + m[5] * o[7],
            m[3] * o[2] + m[4] * o[5] + m[5] * o[8],
            m[6] * o[0] + m[7] * o[3] + m[8] * o[6],
            m[6] * o[1] + m[7] * o[4] + m[8] * o[7],
            m[6] * o[2] + m[7] * o[5] + m[8] * o[8],
        ])
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
            + m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    /// Matrix of signed cofactors.
    ///
    /// ```text
    /// | + - + |
    /// | - + - |
    /// | + - + |
    /// ```
    ///
    /// The inverse is `adjoint().transpose() / determinant()`.
    pub fn adjoint(&self) -> Self {
        let m = &self.m;
        Matrix3x3::new([
            m[4] * m[8] - m[7] * m[5],
            -(m[3] * m[8] - m[6] * m[5]),
            m[3] * m[7] - m[6] * m[4],
            -(m[1] * m[8] - m[7] * m[2]),
            m[0] * m[8] - m[6] * m[2],
            -(m[0] * m[7] - m[6] * m[1]),
            m[1] * m[5] - m[4] * m[2],
            -(m[0] * m[5] - m[3] * m[2]),
            m[0] * m[4] - m[3] * m[1],
        ])
    }

    /// Inverse of `self`, or `MathError::SingularMatrix` if the determinant is exactly zero.
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        let determinant = self.determinant();
        if determinant == 0.0 {
            log::debug!("rejecting inverse of singular 3x3 matrix {:?}", self.m);
            return Err(MathError::SingularMatrix(3));
        }
        Ok(self.adjoint().transpose() / determinant)
    }

    /// Writes the inverse into `out` and returns `true`. On a singular matrix
    /// returns `false` without touching `out`.
    pub fn get_inverse(&self, out: &mut Self) -> bool {
        match self.try_inverse() {
            Ok(inverse) => {
                *out = inverse;
                true
            }
            Err(_) => false,
        }
    }

    /// Inverts in place; see [`Matrix3x3::get_inverse`].
    pub fn invert(&mut self) -> bool {
        let source = *self;
        source.get_inverse(self)
    }

    /// Mirrors the matrix across its main diagonal.
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Matrix3x3::new([m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8]])
    }

    /// 2D translation by `offset`.
    pub fn translation(offset: &Vector2) -> Self {
        Self::translation_xy(offset.x, offset.y)
    }

    /// 2D translation by `(x, y)`.
    pub fn translation_xy(x: f32, y: f32) -> Self {
        Matrix3x3::new([
            1.0, 0.0, x, //
            0.0, 1.0, y, //
            0.0, 0.0, 1.0,
        ])
    }

    /// Row `index` (zero-based).
    ///
    /// # Panics
    /// If `index >= 3`.
    pub fn row(&self, index: usize) -> Vector3 {
        assert!(index < 3, "row index {} out of range for 3x3 matrix", index);
        let start = index * 3;
        Vector3::new(self.m[start], self.m[start + 1], self.m[start + 2])
    }

    /// Column `index` (zero-based).
    ///
    /// # Panics
    /// If `index >= 3`.
    pub fn column(&self, index: usize) -> Vector3 {
        assert!(index < 3, "column index {} out of range for 3x3 matrix", index);
        Vector3::new(self.m[index], self.m[3 + index], self.m[6 + index])
    }

    /// Applies the matrix to a column vector.
    pub fn transform_vector(&self, v: &Vector3) -> Vector3 {
        Vector3::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
        )
    }

    /// Transforms a 2D point, treating it as `(x, y, 1)`.
    pub fn transform_point(&self, point: &Vector2) -> Vector2 {
        let p = self.transform_vector(&Vector3::new(point.x, point.y, 1.0));
        Vector2::new(p.x, p.y)
    }

    /// Views the elements as a flat row-major array.
    pub fn as_array(&self) -> &[f32; 9] {
        &self.m
    }
}

impl From<[f32; 9]> for Matrix3x3 {
    fn from(values: [f32; 9]) -> Self {
        Matrix3x3::new(values)
    }
}

impl From<Matrix3x3> for [f32; 9] {
    fn from(matrix: Matrix3x3) -> Self {
        matrix.m
    }
}

impl Index<(usize, usize)> for Matrix3x3 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(
            row < 3 && col < 3,
            "index ({}, {}) out of range for 3x3 matrix",
            row,
            col
        );
        &self.m[row * 3 + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix3x3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(
            row < 3 && col < 3,
            "index ({}, {}) out of range for 3x3 matrix",
            row,
            col
        );
        &mut self.m[row * 3 + col]
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.multiply(&other)
    }
}

impl Mul<Vector3> for Matrix3x3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.transform_vector(&v)
    }
}

impl Add for Matrix3x3 {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Add<f32> for Matrix3x3 {
    type Output = Self;

    fn add(mut self, value: f32) -> Self {
        self += value;
        self
    }
}

impl AddAssign for Matrix3x3 {
    fn add_assign(&mut self, other: Self) {
        for (a, b) in self.m.iter_mut().zip(other.m) {
            *a += b;
        }
    }
}

impl AddAssign<f32> for Matrix3x3 {
    fn add_assign(&mut self, value: f32) {
        self.m.iter_mut().for_each(|a| *a += value);
    }
}

impl Sub for Matrix3x3 {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl Sub<f32> for Matrix3x3 {
    type Output = Self;

    fn sub(mut self, value: f32) -> Self {
        self -= value;
        self
    }
}

impl SubAssign for Matrix3x3 {
    fn sub_assign(&mut self, other: Self) {
        for (a, b) in self.m.iter_mut().zip(other.m) {
            *a -= b;
        }
    }
}

impl SubAssign<f32> for Matrix3x3 {
    fn sub_assign(&mut self, value: f32) {
        self.m.iter_mut().for_each(|a| *a -= value);
    }
}

impl Mul<f32> for Matrix3x3 {
    type Output = Self;

    fn mul(mut self, value: f32) -> Self {
        self *= value;
        self
    }
}

impl MulAssign<f32> for Matrix3x3 {
    fn mul_assign(&mut self, value: f32) {
        self.m.iter_mut().for_each(|a| *a *= value);
    }
}

impl Div<f32> for Matrix3x3 {
    type Output = Self;

    fn div(mut self, value: f32) -> Self {
        self /= value;
        self
    }
}

impl DivAssign<f32> for Matrix3x3 {
    fn div_assign(&mut self, value: f32) {
        self.m.iter_mut().for_each(|a| *a /= value);
    }
}
