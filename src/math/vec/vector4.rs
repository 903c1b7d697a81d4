use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::Vector3;

/// A 4D vector, usually a homogeneous point or direction.
///
/// Matches the layout of a WGSL `vec4<f32>`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector4 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W component
    pub w: f32,
}

impl Vector4 {
    /// `(0, 0, 0, 0)`
    pub const ZERO: Vector4 = Vector4::splat(0.0);
    /// `(1, 1, 1, 1)`
    pub const ONE: Vector4 = Vector4::splat(1.0);

    /// Creates a vector from its components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Vector4 { x, y, z, w }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: f32) -> Self {
        Vector4::new(value, value, value, value)
    }

    /// Extends a 3D vector with a `w` component.
    ///
    /// `w = 1.0` gives a homogeneous point, `w = 0.0` a direction.
    pub const fn from_vector3(v: Vector3, w: f32) -> Self {
        Vector4::new(v.x, v.y, v.z, w)
    }

    /// Views the components as `[x, y, z, w]`.
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f32 {
        self.sqr_magnitude().sqrt()
    }

    /// Squared length.
    pub fn sqr_magnitude(&self) -> f32 {
        self.dot(self)
    }

    /// # Panics
    /// If the magnitude is exactly zero.
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// # Panics
    /// If the magnitude is exactly zero.
    pub fn normalized(&self) -> Self {
        let magnitude = self.magnitude();
        assert!(magnitude != 0.0, "Magnitude is 0");
        *self * (1.0 / magnitude)
    }

    /// Componentwise multiply in place.
    pub fn scale(&mut self, other: &Self) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
        self.w *= other.w;
        self
    }

    /// Sum of the componentwise products.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Distance between two points.
    pub fn distance(a: &Self, b: &Self) -> f32 {
        (*b - *a).magnitude()
    }

    /// Linear interpolation with `t` clamped to `[0, 1]`.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Self::lerp_unclamped(a, b, t.clamp(0.0, 1.0))
    }

    /// Linear interpolation without clamping `t`.
    pub fn lerp_unclamped(a: &Self, b: &Self, t: f32) -> Self {
        *a * (1.0 - t) + *b * t
    }

    /// Drops the `w` component.
    pub fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<[f32; 4]> for Vector4 {
    fn from(values: [f32; 4]) -> Self {
        Vector4::new(values[0], values[1], values[2], values[3])
    }
}

impl From<Vector4> for [f32; 4] {
    fn from(vec: Vector4) -> Self {
        [vec.x, vec.y, vec.z, vec.w]
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vector4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut bytemuck::cast_mut::<Self, [f32; 4]>(self)[index]
    }
}

impl Add for Vector4 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector4::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl Add<f32> for Vector4 {
    type Output = Self;

    fn add(self, value: f32) -> Self {
        self + Vector4::splat(value)
    }
}

impl AddAssign for Vector4 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl AddAssign<f32> for Vector4 {
    fn add_assign(&mut self, value: f32) {
        *self = *self + value;
    }
}

impl Sub for Vector4 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector4::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl Sub<f32> for Vector4 {
    type Output = Self;

    fn sub(self, value: f32) -> Self {
        self - Vector4::splat(value)
    }
}

impl SubAssign for Vector4 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl SubAssign<f32> for Vector4 {
    fn sub_assign(&mut self, value: f32) {
        *self = *self - value;
    }
}

impl Mul<f32> for Vector4 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Vector4::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl MulAssign<f32> for Vector4 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl Div<f32> for Vector4 {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Vector4::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
            self.w / scalar,
        )
    }
}

impl DivAssign<f32> for Vector4 {
    fn div_assign(&mut self, scalar: f32) {
        *self = *self / scalar;
    }
}

impl Neg for Vector4 {
    type Output = Self;

    fn neg(self) -> Self {
        Vector4::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vector3_keeps_components() {
        let v = Vector4::from_vector3(Vector3::new(1.0, 2.0, 3.0), 1.0);
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(v.xyz(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn only_w_differs() {
        assert!(Vector4::new(1.0, 1.0, 1.0, 0.0) != Vector4::ONE);
    }

    #[test]
    fn indexing_matches_fields() {
        let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        v[3] = 8.0;
        assert_eq!(v[0], 1.0);
        assert_eq!(v.w, 8.0);
    }

    #[test]
    fn casts_to_gpu_bytes() {
        let points = [Vector4::ONE, Vector4::ZERO];
        let floats: &[f32] = bytemuck::cast_slice(&points);
        assert_eq!(floats, &[1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    }
}
