use super::numeric_traits::*;
use serde::Serialize;
use std::ops;

/// Three component tuple used for points, vectors and normals alike.
#[derive(Debug, PartialEq, Default, Copy, Clone, Serialize)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Copy> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector3::<T> { x, y, z }
    }
}

impl<T: Copy + Default> Vector3<T> {
    #[inline]
    pub fn zero() -> Self {
        Vector3::<T> {
            x: T::default(),
            y: T::default(),
            z: T::default(),
        }
    }
}

impl<
        T: Copy
            + PartialEq
            + FloatType
            + std::ops::Add<Output = T>
            + std::ops::Sub<Output = T>
            + std::ops::Mul<Output = T>
            + std::ops::Div<Output = T>,
    > Vector3<T>
{
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        return self.x * rhs.x + self.y * rhs.y + self.z * rhs.z;
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        return self.dot(self);
    }

    #[inline]
    pub fn length(&self) -> T {
        return FloatType::sqrt(self.length_squared());
    }

    #[inline]
    pub fn normalize(&self) -> Self {
        let l = self.length();
        Vector3::<T> {
            x: self.x / l,
            y: self.y / l,
            z: self.z / l,
        }
    }

    #[inline]
    pub fn distance_squared(a: &Self, b: &Self) -> T {
        let v = *a - *b;
        return v.dot(&v);
    }

    #[inline]
    pub fn distance(a: &Self, b: &Self) -> T {
        return FloatType::sqrt(Self::distance_squared(a, b));
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        return FloatType::is_finite(self.x)
            && FloatType::is_finite(self.y)
            && FloatType::is_finite(self.z);
    }
}

// Add
impl<T: std::ops::Add<Output = T>> ops::Add<Vector3<T>> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn add(self, rhs: Vector3<T>) -> Vector3<T> {
        return Vector3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        };
    }
}

// Sub
impl<T: std::ops::Sub<Output = T>> ops::Sub<Vector3<T>> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn sub(self, rhs: Vector3<T>) -> Vector3<T> {
        return Vector3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        };
    }
}

//V x T
impl<T: std::ops::Mul<Output = T> + Copy> ops::Mul<T> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn mul(self, rhs: T) -> Vector3<T> {
        return Vector3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        };
    }
}

impl<T: std::ops::Div<Output = T> + Copy> ops::Div<T> for Vector3<T> {
    type Output = Vector3<T>;
    #[inline]
    fn div(self, rhs: T) -> Vector3<T> {
        return Vector3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        };
    }
}

impl ops::Mul<Vector3<f32>> for f32 {
    type Output = Vector3<f32>;
    #[inline]
    fn mul(self, rhs: Vector3<f32>) -> Vector3<f32> {
        return rhs * self;
    }
}

impl ops::Mul<Vector3<f64>> for f64 {
    type Output = Vector3<f64>;
    #[inline]
    fn mul(self, rhs: Vector3<f64>) -> Vector3<f64> {
        return rhs * self;
    }
}

impl<T: std::ops::Neg<Output = T>> ops::Neg for Vector3<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        return Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        };
    }
}

impl<T: std::ops::AddAssign<T>> ops::AddAssign for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T> ops::Index<usize> for Vector3<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }
}

impl<T: Copy> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from(value: [T; 3]) -> Self {
        Vector3::<T>::new(value[0], value[1], value[2])
    }
}
