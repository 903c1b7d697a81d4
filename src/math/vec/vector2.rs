use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A 2D vector of `f32` components.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vector2 {
    /// `(0, 1)`
    pub const UP: Vector2 = Vector2::new(0.0, 1.0);
    /// `(0, -1)`
    pub const DOWN: Vector2 = Vector2::new(0.0, -1.0);
    /// `(1, 0)`
    pub const RIGHT: Vector2 = Vector2::new(1.0, 0.0);
    /// `(-1, 0)`
    pub const LEFT: Vector2 = Vector2::new(-1.0, 0.0);
    /// `(0, 0)`
    pub const ZERO: Vector2 = Vector2::splat(0.0);
    /// `(1, 1)`
    pub const ONE: Vector2 = Vector2::splat(1.0);

    /// Creates a vector from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }

    /// Creates a vector with both components set to `value`.
    pub const fn splat(value: f32) -> Self {
        Vector2::new(value, value)
    }

    /// Views the components as `[x, y]`.
    pub fn as_array(&self) -> &[f32; 2] {
        bytemuck::cast_ref(self)
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f32 {
        self.sqr_magnitude().sqrt()
    }

    /// Squared length.
    pub fn sqr_magnitude(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Rescales this vector to unit length in place.
    ///
    /// # Panics
    /// If the magnitude is exactly zero.
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Returns a unit-length copy.
    ///
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
        self
    }

    /// Sum of the componentwise products.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
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
}

impl From<[f32; 2]> for Vector2 {
    fn from(values: [f32; 2]) -> Self {
        Vector2::new(values[0], values[1])
    }
}

impl From<Vector2> for [f32; 2] {
    fn from(vec: Vector2) -> Self {
        [vec.x, vec.y]
    }
}

impl Index<usize> for Vector2 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vector2 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut bytemuck::cast_mut::<Self, [f32; 2]>(self)[index]
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Add<f32> for Vector2 {
    type Output = Self;

    fn add(self, value: f32) -> Self {
        Vector2::new(self.x + value, self.y + value)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl AddAssign<f32> for Vector2 {
    fn add_assign(&mut self, value: f32) {
        *self = *self + value;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Sub<f32> for Vector2 {
    type Output = Self;

    fn sub(self, value: f32) -> Self {
        Vector2::new(self.x - value, self.y - value)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl SubAssign<f32> for Vector2 {
    fn sub_assign(&mut self, value: f32) {
        *self = *self - value;
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Vector2::new(self.x / scalar, self.y / scalar)
    }
}

impl DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, scalar: f32) {
        *self = *self / scalar;
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Vector2::new(-self.x, -self.y)
    }
}
