use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// Away from the viewer.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    /// Toward the viewer, and the default light direction.
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn magnitude(&self) -> f32 {
        self.dot(*self).sqrt()
    }

    /// Returns the unit vector in the same direction.
    ///
    /// A zero-length vector is divided by 1 instead of 0, so it stays zero
    /// rather than turning into NaN.
    pub fn normalized_or_zero(&self) -> Self {
        let magnitude = self.magnitude();
        let magnitude = if magnitude == 0.0 { 1.0 } else { magnitude };
        *self / magnitude
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of two vectors.
    /// The resulting vector is perpendicular to both input vectors and its
    /// length is twice the area of the triangle they span.
    pub fn cross(&self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

macro_rules! componentwise_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<Vec3> for Vec3 {
            type Output = Vec3;

            #[inline]
            fn $method(self, rhs: Vec3) -> Vec3 {
                Vec3::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }
    };
}

macro_rules! scalar_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<f32> for Vec3 {
            type Output = Vec3;

            #[inline]
            fn $method(self, rhs: f32) -> Vec3 {
                Vec3::new(self.x $op rhs, self.y $op rhs, self.z $op rhs)
            }
        }
    };
}

componentwise_op!(Add, add, +);
componentwise_op!(Sub, sub, -);
scalar_op!(Mul, mul, *);
scalar_op!(Div, div, /);

impl AddAssign<Vec3> for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        self * -1.0
    }
}
