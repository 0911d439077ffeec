use crate::core::prelude::*;
use serde::Serialize;
use std::ops;

const YWEIGHT: [Float; 3] = [0.212671, 0.715160, 0.072169];

#[derive(Debug, PartialEq, Copy, Clone, Serialize)]
pub struct RGBSpectrum {
    c: [Float; 3],
}

impl RGBSpectrum {
    #[inline]
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        RGBSpectrum { c: [r, g, b] }
    }

    #[inline]
    pub fn zero() -> Self {
        RGBSpectrum { c: [0.0, 0.0, 0.0] }
    }

    #[inline]
    pub fn one() -> Self {
        RGBSpectrum { c: [1.0, 1.0, 1.0] }
    }

    pub fn y(&self) -> Float {
        let c = &self.c;
        return YWEIGHT[0] * c[0] + YWEIGHT[1] * c[1] + YWEIGHT[2] * c[2];
    }

    pub fn to_rgb(&self) -> [Float; 3] {
        return self.c;
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        let c = &self.c;
        return c.iter().all(|x| -> bool { x.abs() <= 0.0 });
    }
}

impl ops::Index<usize> for RGBSpectrum {
    type Output = Float;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        return &self.c[i];
    }
}

impl ops::Mul<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, s: Float) -> RGBSpectrum {
        return RGBSpectrum::from([self[0] * s, self[1] * s, self[2] * s]);
    }
}

impl ops::Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, rhs: RGBSpectrum) -> RGBSpectrum {
        return rhs * self;
    }
}

impl ops::Add<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn add(self, s: RGBSpectrum) -> RGBSpectrum {
        let a = &self;
        let b = &s;
        return RGBSpectrum::from([a[0] + b[0], a[1] + b[1], a[2] + b[2]]);
    }
}

impl ops::Mul<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, s: RGBSpectrum) -> RGBSpectrum {
        let a = &self;
        let b = &s;
        return RGBSpectrum::from([a[0] * b[0], a[1] * b[1], a[2] * b[2]]);
    }
}

impl Default for RGBSpectrum {
    #[inline]
    fn default() -> Self {
        RGBSpectrum::zero()
    }
}

impl From<Float> for RGBSpectrum {
    #[inline]
    fn from(value: Float) -> Self {
        RGBSpectrum {
            c: [value, value, value],
        }
    }
}

impl From<[Float; 3]> for RGBSpectrum {
    #[inline]
    fn from(value: [Float; 3]) -> Self {
        RGBSpectrum { c: value }
    }
}

// Scene files carry spectra as plain 3-vectors.
impl From<Vector3f> for RGBSpectrum {
    #[inline]
    fn from(value: Vector3f) -> Self {
        RGBSpectrum {
            c: [value.x, value.y, value.z],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let v1 = RGBSpectrum::from([1.0, 2.0, 3.0]);
        let v2 = RGBSpectrum::from([4.0, 5.0, 6.0]);
        let v3 = RGBSpectrum::from([5.0, 7.0, 9.0]);
        assert_eq!(v1 + v2, v3);
    }

    #[test]
    fn test_002() {
        let v1 = RGBSpectrum::from([1.0, 2.0, 3.0]);
        let v2 = RGBSpectrum::from([4.0, 5.0, 6.0]);
        let v3 = RGBSpectrum::from([4.0, 10.0, 18.0]);
        assert_eq!(v2 * v1, v3);
        assert_eq!(2.0 * v1, RGBSpectrum::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_003() {
        assert!(RGBSpectrum::zero().is_black());
        assert!(!RGBSpectrum::one().is_black());
        assert_eq!(RGBSpectrum::default(), RGBSpectrum::zero());
    }

    #[test]
    fn test_004() {
        let s = RGBSpectrum::from(Vector3f::new(1.0, 0.5, 0.25));
        assert_eq!(s.to_rgb(), [1.0, 0.5, 0.25]);
        assert_eq!(RGBSpectrum::one(), RGBSpectrum::from(1.0));
    }
}
