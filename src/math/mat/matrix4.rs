use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign,
};

use crate::math::error::MathError;
use crate::math::vec::{Vector3, Vector4};

/// A 4×4 matrix stored row-major: element `(row, col)` is `m[row * 4 + col]`.
///
/// Transforms act on column vectors (`M · v`), so translations live in the last
/// column and a chain `A · B · C` applies `C` first.
///
/// ```text
/// | m[0]   m[1]   m[2]   m[3]  |
/// | m[4]   m[5]   m[6]   m[7]  |
/// | m[8]   m[9]   m[10]  m[11] |
/// | m[12]  m[13]  m[14]  m[15] |
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Matrix4x4 {
    /// Row-major elements
    pub m: [f32; 16],
}

/// Determinant of a 3×3 minor given row by row.
#[inline]
#[allow(clippy::too_many_arguments)]
fn minor(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32, g: f32, h: f32, i: f32) -> f32 {
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

impl Matrix4x4 {
    /// The identity matrix.
    pub const IDENTITY: Matrix4x4 = Matrix4x4::new([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Wraps sixteen row-major elements.
    pub const fn new(m: [f32; 16]) -> Self {
        Matrix4x4 { m }
    }

    /// Every element set to `value`.
    pub const fn splat(value: f32) -> Self {
        Matrix4x4::new([value; 16])
    }

    /// Builds a matrix whose rows are `a`, `b`, `c` and `d`.
    pub const fn from_rows(a: Vector4, b: Vector4, c: Vector4, d: Vector4) -> Self {
        Matrix4x4::new([
            a.x, a.y, a.z, a.w, //
            b.x, b.y, b.z, b.w, //
            c.x, c.y, c.z, c.w, //
            d.x, d.y, d.z, d.w,
        ])
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Row-by-column product `self · other`.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut out = [0.0; 16];
        for (i, cell) in out.iter_mut().enumerate() {
            let (row, col) = (i / 4, i % 4);
            *cell = (0..4).map(|k| self.m[row * 4 + k] * other.m[k * 4 + col]).sum();
        }
        Matrix4x4::new(out)
    }

    /// Cofactor expansion down the first column.
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        let c00 = minor(m[5], m[6], m[7], m[9], m[10], m[11], m[13], m[14], m[15]);
        let c10 = -minor(m[1], m[2], m[3], m[9], m[10], m[11], m[13], m[14], m[15]);
        let c20 = minor(m[1], m[2], m[3], m[5], m[6], m[7], m[13], m[14], m[15]);
        let c30 = -minor(m[1], m[2], m[3], m[5], m[6], m[7], m[9], m[10], m[11]);
        m[0] * c00 + m[4] * c10 + m[8] * c20 + m[12] * c30
    }

    /// Matrix of signed cofactors; the sign of `(row, col)` follows `row + col` parity.
    ///
    /// The inverse is `adjoint().transpose() / determinant()`.
    pub fn adjoint(&self) -> Self {
        let m = &self.m;
        Matrix4x4::new([
            // row 0
            minor(m[5], m[6], m[7], m[9], m[10], m[11], m[13], m[14], m[15]),
            -minor(m[4], m[6], m[7], m[8], m[10], m[11], m[12], m[14], m[15]),
            minor(m[4], m[5], m[7], m[8], m[9], m[11], m[12], m[13], m[15]),
            -minor(m[4], m[5], m[6], m[8], m[9], m[10], m[12], m[13], m[14]),
            // row 1
            -minor(m[1], m[2], m[3], m[9], m[10], m[11], m[13], m[14], m[15]),
            minor(m[0], m[2], m[3], m[8], m[10], m[11], m[12], m[14], m[15]),
            -minor(m[0], m[1], m[3], m[8], m[9], m[11], m[12], m[13], m[15]),
            minor(m[0], m[1], m[2], m[8], m[9], m[10], m[12], m[13], m[14]),
            // row 2
            minor(m[1], m[2], m[3], m[5], m[6], m[7], m[13], m[14], m[15]),
            -minor(m[0], m[2], m[3], m[4], m[6], m[7], m[12], m[14], m[15]),
            minor(m[0], m[1], m[3], m[4], m[5], m[7], m[12], m[13], m[15]),
            -minor(m[0], m[1], m[2], m[4], m[5], m[6], m[12], m[13], m[14]),
            // row 3
            -minor(m[1], m[2], m[3], m[5], m[6], m[7], m[9], m[10], m[11]),
            minor(m[0], m[2], m[3], m[4], m[6], m[7], m[8], m[10], m[11]),
            -minor(m[0], m[1], m[3], m[4], m[5], m[7], m[8], m[9], m[11]),
            minor(m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10]),
        ])
    }

    /// Inverse of `self`, or `MathError::SingularMatrix` if the determinant is exactly zero.
    ///
    /// There is no epsilon: a nearly singular matrix still inverts, possibly to
    /// very large values.
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        let determinant = self.determinant();
        if determinant == 0.0 {
            log::debug!("rejecting inverse of singular 4x4 matrix {:?}", self.m);
            return Err(MathError::SingularMatrix(4));
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

    /// Inverts in place; see [`Matrix4x4::get_inverse`].
    pub fn invert(&mut self) -> bool {
        let source = *self;
        source.get_inverse(self)
    }

    /// Mirrors the matrix across its main diagonal.
    pub fn transpose(&self) -> Self {
        Matrix4x4::new(std::array::from_fn(|i| self.m[(i % 4) * 4 + i / 4]))
    }

    /// Translation by `offset`.
    pub fn translation(offset: &Vector3) -> Self {
        Self::translation_xyz(offset.x, offset.y, offset.z)
    }

    /// Translation by `(tx, ty, tz)`.
    pub fn translation_xyz(tx: f32, ty: f32, tz: f32) -> Self {
        Matrix4x4::new([
            1.0, 0.0, 0.0, tx, //
            0.0, 1.0, 0.0, ty, //
            0.0, 0.0, 1.0, tz, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Per-axis scale by `factors`.
    pub fn scaling(factors: &Vector3) -> Self {
        Self::scaling_xyz(factors.x, factors.y, factors.z)
    }

    /// Per-axis scale by `(sx, sy, sz)`.
    pub fn scaling_xyz(sx: f32, sy: f32, sz: f32) -> Self {
        Matrix4x4::new([
            sx, 0.0, 0.0, 0.0, //
            0.0, sy, 0.0, 0.0, //
            0.0, 0.0, sz, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed rotation about the X axis.
    pub fn rotation_x(angle_in_radians: f32) -> Self {
        let (s, c) = angle_in_radians.sin_cos();
        Matrix4x4::new([
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, -s, 0.0, //
            0.0, s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed rotation about the Y axis.
    pub fn rotation_y(angle_in_radians: f32) -> Self {
        let (s, c) = angle_in_radians.sin_cos();
        Matrix4x4::new([
            c, 0.0, s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed rotation about the Z axis.
    pub fn rotation_z(angle_in_radians: f32) -> Self {
        let (s, c) = angle_in_radians.sin_cos();
        Matrix4x4::new([
            c, -s, 0.0, 0.0, //
            s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Model transform built as `Identity · T · Rx · Ry · Rz · S`.
    ///
    /// This multiplication order is fixed: applied to a column vector, the
    /// point is scaled first, then rotated about Z, Y and X, then translated.
    pub fn transform(
        translate: &Vector3,
        scale: &Vector3,
        rotate_x: f32,
        rotate_y: f32,
        rotate_z: f32,
    ) -> Self {
        Self::IDENTITY
            .multiply(&Self::translation(translate))
            .multiply(&Self::rotation_x(rotate_x))
            .multiply(&Self::rotation_y(rotate_y))
            .multiply(&Self::rotation_z(rotate_z))
            .multiply(&Self::scaling(scale))
    }

    /// [`Matrix4x4::transform`] taking every component as a separate value.
    #[allow(clippy::too_many_arguments)]
    pub fn transform_from_components(
        trans_x: f32,
        trans_y: f32,
        trans_z: f32,
        scale_x: f32,
        scale_y: f32,
        scale_z: f32,
        rotate_x: f32,
        rotate_y: f32,
        rotate_z: f32,
    ) -> Self {
        Self::transform(
            &Vector3::new(trans_x, trans_y, trans_z),
            &Vector3::new(scale_x, scale_y, scale_z),
            rotate_x,
            rotate_y,
            rotate_z,
        )
    }

    /// OpenGL-style perspective projection (clip-space depth in `[-1, 1]`).
    ///
    /// `field_of_view_y_in_radians` is the full vertical angle.
    pub fn perspective(
        field_of_view_y_in_radians: f32,
        aspect: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let tan_half = (field_of_view_y_in_radians * 0.5).tan();
        let range = z_far - z_near;

        let mut out = Matrix4x4::splat(0.0);
        out.m[0] = 1.0 / (aspect * tan_half);
        out.m[5] = 1.0 / tan_half;
        out.m[10] = -(z_far + z_near) / range;
        out.m[11] = -(2.0 * z_far * z_near) / range;
        out.m[14] = -1.0;
        out
    }

    /// Orthographic projection. Note the argument order: `right` comes before `left`
    /// and `top` before `bottom`.
    pub fn ortho(right: f32, left: f32, top: f32, bottom: f32, z_near: f32, z_far: f32) -> Self {
        let mut out = Matrix4x4::splat(0.0);
        out.m[0] = 2.0 / (right - left);
        out.m[3] = -(right + left) / (right - left);
        out.m[5] = 2.0 / (top - bottom);
        out.m[7] = -(top + bottom) / (top - bottom);
        out.m[10] = -2.0 / (z_far - z_near);
        out.m[11] = -(z_far + z_near) / (z_far - z_near);
        out.m[15] = 1.0;
        out
    }

    /// Row `index` (zero-based).
    ///
    /// # Panics
    /// If `index >= 4`.
    pub fn row(&self, index: usize) -> Vector4 {
        assert!(index < 4, "row index {} out of range for 4x4 matrix", index);
        let start = index * 4;
        Vector4::new(
            self.m[start],
            self.m[start + 1],
            self.m[start + 2],
            self.m[start + 3],
        )
    }

    /// Column `index` (zero-based).
    ///
    /// # Panics
    /// If `index >= 4`.
    pub fn column(&self, index: usize) -> Vector4 {
        assert!(index < 4, "column index {} out of range for 4x4 matrix", index);
        Vector4::new(
            self.m[index],
            self.m[4 + index],
            self.m[8 + index],
            self.m[12 + index],
        )
    }

    /// Applies the matrix to a homogeneous column vector.
    pub fn transform_vector(&self, v: &Vector4) -> Vector4 {
        Vector4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }

    /// Transforms a point (`w = 1`) and returns its `xyz` without a perspective divide.
    pub fn transform_point(&self, point: &Vector3) -> Vector3 {
        self.transform_vector(&Vector4::from_vector3(*point, 1.0)).xyz()
    }

    /// Views the elements as a flat row-major array, ready for a uniform buffer.
    pub fn as_array(&self) -> &[f32; 16] {
        &self.m
    }
}

impl From<[f32; 16]> for Matrix4x4 {
    fn from(values: [f32; 16]) -> Self {
        Matrix4x4::new(values)
    }
}

impl From<Matrix4x4> for [f32; 16] {
    fn from(matrix: Matrix4x4) -> Self {
        matrix.m
    }
}

// Nested row arrays, as used by uniform structs.
impl From<[[f32; 4]; 4]> for Matrix4x4 {
    fn from(rows: [[f32; 4]; 4]) -> Self {
        Matrix4x4::new(bytemuck::cast(rows))
    }
}

impl From<Matrix4x4> for [[f32; 4]; 4] {
    fn from(matrix: Matrix4x4) -> Self {
        bytemuck::cast(matrix.m)
    }
}

impl Index<(usize, usize)> for Matrix4x4 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(
            row < 4 && col < 4,
            "index ({}, {}) out of range for 4x4 matrix",
            row,
            col
        );
        &self.m[row * 4 + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix4x4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(
            row < 4 && col < 4,
            "index ({}, {}) out of range for 4x4 matrix",
            row,
            col
        );
        &mut self.m[row * 4 + col]
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.multiply(&other)
    }
}

impl Mul<Vector4> for Matrix4x4 {
    type Output = Vector4;

    fn mul(self, v: Vector4) -> Vector4 {
        self.transform_vector(&v)
    }
}

impl Add for Matrix4x4 {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Add<f32> for Matrix4x4 {
    type Output = Self;

    fn add(mut self, value: f32) -> Self {
        self += value;
        self
    }
}

impl AddAssign for Matrix4x4 {
    fn add_assign(&mut self, other: Self) {
        for (a, b) in self.m.iter_mut().zip(other.m) {
            *a += b;
        }
    }
}

impl AddAssign<f32> for Matrix4x4 {
    fn add_assign(&mut self, value: f32) {
        self.m.iter_mut().for_each(|a| *a += value);
    }
}

impl Sub for Matrix4x4 {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl Sub<f32> for Matrix4x4 {
    type Output = Self;

    fn sub(mut self, value: f32) -> Self {
        self -= value;
        self
    }
}

impl SubAssign for Matrix4x4 {
    fn sub_assign(&mut self, other: Self) {
        for (a, b) in self.m.iter_mut().zip(other.m) {
            *a -= b;
        }
    }
}

impl SubAssign<f32> for Matrix4x4 {
    fn sub_assign(&mut self, value: f32) {
        self.m.iter_mut().for_each(|a| *a -= value);
    }
}

impl Mul<f32> for Matrix4x4 {
    type Output = Self;

    fn mul(mut self, value: f32) -> Self {
        self *= value;
        self
    }
}

impl MulAssign<f32> for Matrix4x4 {
    fn mul_assign(&mut self, value: f32) {
        self.m.iter_mut().for_each(|a| *a *= value);
    }
}

impl Div<f32> for Matrix4x4 {
    type Output = Self;

    fn div(mut self, value: f32) -> Self {
        self /= value;
        self
    }
}

impl DivAssign<f32> for Matrix4x4 {
    fn div_assign(&mut self, value: f32) {
        self.m.iter_mut().for_each(|a| *a /= value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn identity_determinant_is_exactly_one() {
        assert_eq!(Matrix4x4::IDENTITY.determinant(), 1.0);
    }

    #[test]
    fn determinant_matches_hand_computed_value() {
        let m = Matrix4x4::new([
            1.0, 0.0, 2.0, -1.0, //
            3.0, 0.0, 0.0, 5.0, //
            2.0, 1.0, 4.0, -3.0, //
            1.0, 0.0, 5.0, 0.0,
        ]);
        assert_eq!(m.determinant(), 30.0);
    }

    #[test]
    fn adjoint_of_diagonal() {
        let m = Matrix4x4::scaling_xyz(2.0, 3.0, 4.0);
        let adj = m.adjoint();
        assert_eq!(adj.m[0], 12.0);
        assert_eq!(adj.m[5], 8.0);
        assert_eq!(adj.m[10], 6.0);
        assert_eq!(adj.m[15], 24.0);
        assert_eq!(adj.m[1], 0.0);
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = Matrix4x4::new(std::array::from_fn(|i| i as f32));
        let t = m.transpose();
        for i in 0..4 {
            assert_eq!(t.row(i), m.column(i));
        }
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn translation_sits_in_last_column() {
        let t = Matrix4x4::translation_xyz(1.0, 2.0, 3.0);
        assert_eq!(t.column(3), Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(t.row(3), Vector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn rotation_y_turns_forward_into_right() {
        let r = Matrix4x4::rotation_y(std::f32::consts::FRAC_PI_2);
        assert_abs_diff_eq!(r.transform_point(&Vector3::FORWARD), Vector3::RIGHT, epsilon = 1e-6);
    }

    #[test]
    fn nested_array_round_trip() {
        let rows: [[f32; 4]; 4] = Matrix4x4::translation_xyz(5.0, 6.0, 7.0).into();
        assert_eq!(rows[0][3], 5.0);
        assert_eq!(Matrix4x4::from(rows), Matrix4x4::translation_xyz(5.0, 6.0, 7.0));
    }
}
