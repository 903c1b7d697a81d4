use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A 3D vector of `f32` components.
///
/// The layout is `#[repr(C)]` with no padding, so a slice of `Vector3` can be
/// handed to GPU buffers through `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vector3 {
    /// `(0, 1, 0)`
    pub const UP: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    /// `(0, -1, 0)`
    pub const DOWN: Vector3 = Vector3::new(0.0, -1.0, 0.0);
    /// `(1, 0, 0)`
    pub const RIGHT: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    /// `(-1, 0, 0)`
    pub const LEFT: Vector3 = Vector3::new(-1.0, 0.0, 0.0);
    /// `(0, 0, 1)`
    pub const FORWARD: Vector3 = Vector3::new(0.0, 0.0, 1.0);
    /// `(0, 0, -1)`
    pub const BACK: Vector3 = Vector3::new(0.0, 0.0, -1.0);
    /// `(0, 0, 0)`
    pub const ZERO: Vector3 = Vector3::splat(0.0);
    /// `(1, 1, 1)`
    pub const UNIT: Vector3 = Vector3::splat(1.0);

    /// Creates a vector from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: f32) -> Self {
        Vector3::new(value, value, value)
    }

    /// Views the components as `[x, y, z]`.
    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f32 {
        self.sqr_magnitude().sqrt()
    }

    /// Squared length, for comparisons that can skip the square root.
    pub fn sqr_magnitude(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Rescales this vector to unit length in place.
    ///
    /// # Panics
    /// If the magnitude is exactly zero.
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Returns a unit-length copy of this vector.
    ///
    /// # Panics
    /// If the magnitude is exactly zero.
    pub fn normalized(&self) -> Self {
        let magnitude = self.magnitude();
        assert!(magnitude != 0.0, "Magnitude is 0");
        let inverted = 1.0 / magnitude;
        *self * inverted
    }

    /// Multiplies each component by the matching component of `other`.
    pub fn scale(&mut self, other: &Self) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
        self
    }

    /// Sum of the componentwise products.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product. The result is orthogonal to both inputs.
    pub fn cross(&self, other: &Self) -> Self {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            -(self.x * other.z - other.x * self.z),
            self.x * other.y - other.x * self.y,
        )
    }

    /// Unsigned angle between two vectors, in radians within `[0, π]`.
    ///
    /// The cosine is clamped to `[-1, 1]` so rounding on parallel inputs cannot produce NaN.
    pub fn angle(&self, other: &Self) -> f32 {
        let cosine = self.dot(other) / (self.magnitude() * other.magnitude());
        cosine.clamp(-1.0, 1.0).acos()
    }

    /// Distance between two points.
    pub fn distance(a: &Self, b: &Self) -> f32 {
        (*b - *a).magnitude()
    }

    /// Reflects `self` off a surface with the given normal.
    ///
    /// The normal does not need to be unit length; it is normalized before use.
    ///
    /// # Panics
    /// If `normal` has zero magnitude.
    pub fn reflect(&self, normal: &Self) -> Self {
        let normal = normal.normalized();
        *self - normal * 2.0 * self.dot(&normal)
    }

    /// Linear interpolation with `t` clamped to `[0, 1]`.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Self::lerp_unclamped(a, b, t.clamp(0.0, 1.0))
    }

    /// Linear interpolation that extrapolates for `t` outside `[0, 1]`.
    pub fn lerp_unclamped(a: &Self, b: &Self, t: f32) -> Self {
        *a * (1.0 - t) + *b * t
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(values: [f32; 3]) -> Self {
        Vector3::new(values[0], values[1], values[2])
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(vec: Vector3) -> Self {
        [vec.x, vec.y, vec.z]
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut bytemuck::cast_mut::<Self, [f32; 3]>(self)[index]
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Add<f32> for Vector3 {
    type Output = Self;

    fn add(self, value: f32) -> Self {
        Vector3::new(self.x + value, self.y + value, self.z + value)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl AddAssign<f32> for Vector3 {
    fn add_assign(&mut self, value: f32) {
        *self = *self + value;
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Sub<f32> for Vector3 {
    type Output = Self;

    fn sub(self, value: f32) -> Self {
        Vector3::new(self.x - value, self.y - value, self.z - value)
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl SubAssign<f32> for Vector3 {
    fn sub_assign(&mut self, value: f32) {
        *self = *self - value;
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Vector3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, scalar: f32) {
        *self = *self / scalar;
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn cross_of_x_and_y_is_z() {
        let c = Vector3::RIGHT.cross(&Vector3::UP);
        assert_eq!(c, Vector3::FORWARD);
    }

    #[test]
    fn angle_of_vector_with_itself_is_finite() {
        let v = Vector3::new(0.74, 1.0619999, 1.482);
        let angle = v.angle(&v);
        assert!(angle.is_finite());
        assert!(angle < 1e-3);
    }

    #[test]
    fn angle_between_axes_is_right_angle() {
        assert_relative_eq!(Vector3::RIGHT.angle(&Vector3::UP), FRAC_PI_2);
    }

    #[test]
    fn reflect_normalizes_the_normal() {
        // A non-unit normal must give the same result as its unit version.
        let dir = Vector3::new(1.0, -1.0, 0.0);
        let reflected = dir.reflect(&Vector3::new(0.0, 5.0, 0.0));
        assert_relative_eq!(reflected, Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn scale_is_chainable() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v.scale(&Vector3::splat(2.0)).scale(&Vector3::new(1.0, 0.5, 1.0));
        assert_eq!(v, Vector3::new(2.0, 2.0, 6.0));
    }

    #[test]
    fn inequality_when_one_component_differs() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(1.0, 2.0, 4.0);
        assert!(a != b);
    }

    #[test]
    #[should_panic(expected = "Magnitude is 0")]
    fn normalizing_zero_panics() {
        let mut v = Vector3::ZERO;
        v.normalize();
    }
}
