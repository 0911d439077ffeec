use serde::Serialize;
use std::ops;

#[derive(Debug, PartialEq, Default, Copy, Clone, Serialize)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> Vector2<T> {
    pub fn new(x: T, y: T) -> Self {
        Vector2::<T> { x, y }
    }
}

impl<T> ops::Index<usize> for Vector2<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            _ => &self.y,
        }
    }
}

impl<T: Copy> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from(value: [T; 2]) -> Self {
        Vector2::<T>::new(value[0], value[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let u = Vector2::<f32>::from([0.25, 0.75]);
        assert_eq!(u[0], 0.25);
        assert_eq!(u[1], 0.75);
        assert_eq!(Vector2::<f32>::default(), Vector2::new(0.0, 0.0));
    }
}
