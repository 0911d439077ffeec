use crate::core::prelude::*;
use serde::Serialize;

#[derive(Debug, PartialEq, Copy, Clone, Serialize)]
pub struct Ray {
    pub o: Point3f,
    pub d: Vector3f,
    pub t_max: Float,
}

impl Ray {
    pub fn new(o: &Point3f, d: &Vector3f, t_max: Float) -> Self {
        Ray {
            o: *o,
            d: *d,
            t_max,
        }
    }

    pub fn zero() -> Self {
        Ray {
            o: Point3f::zero(),
            d: Vector3f::zero(),
            t_max: 0.0,
        }
    }
}

impl From<(&Point3f, &Vector3f)> for Ray {
    fn from(value: (&Point3f, &Vector3f)) -> Self {
        Ray::new(value.0, value.1, Float::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let o = Point3f::new(1.0, 2.0, 3.0);
        let d = Vector3f::new(1.0, 0.0, 0.0);
        let r1 = Ray::new(&o, &d, 1000.0);
        assert_eq!(r1.o, o);
        assert_eq!(r1.d, d);
        assert_eq!(r1.t_max, 1000.0);
    }

    #[test]
    fn test_002() {
        let r = Ray::from((&Point3f::zero(), &Vector3f::new(0.0, 0.0, 1.0)));
        assert_eq!(r.t_max, Float::INFINITY);
        assert_eq!(Ray::zero().d, Vector3f::zero());
    }
}
