use crate::core::prelude::*;

use serde::Serialize;

/// Light arriving from a single direction with constant intensity everywhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionalLight {
    origin: Point3f,
    d_travel: Vector3f,
    w_light: Vector3f,
    l: Spectrum,
}

impl DirectionalLight {
    /// `direction` is the direction the light travels in; it is stored
    /// negated and normalized so that it points toward the light.
    pub fn new(direction: &Vector3f, l: &Spectrum) -> Self {
        Self::with_origin(&Point3f::zero(), direction, l)
    }

    /// Same as `new`, with the reference position emitted rays start from.
    pub fn with_origin(origin: &Point3f, direction: &Vector3f, l: &Spectrum) -> Self {
        DirectionalLight {
            origin: *origin,
            d_travel: *direction,
            w_light: -normalize_direction(direction),
            l: *l,
        }
    }

    /// Direction of travel exactly as given at construction.
    pub fn travel_direction(&self) -> Vector3f {
        return self.d_travel;
    }

    /// Unit vector toward the light.
    pub fn direction(&self) -> Vector3f {
        return self.w_light;
    }

    pub fn origin(&self) -> Point3f {
        return self.origin;
    }

    pub fn intensity(&self) -> Spectrum {
        return self.l;
    }

    pub fn sample_li(&self, _p: &Point3f) -> (Spectrum, Vector3f, Float) {
        return (self.l, self.w_light, 1.0);
    }

    pub fn sample_le(&self, _u: &Point2f) -> (Spectrum, Ray, Normal3f, Float, Float) {
        let ray = Ray::from((&self.origin, &self.w_light));
        let n_light = self.w_light;
        let pdf_pos = 1.0;
        let pdf_dir = 1.0;
        return (self.l, ray, n_light, pdf_pos, pdf_dir);
    }

    // Unit cross-section: the world bound is not known here.
    pub fn power(&self) -> Spectrum {
        return self.l;
    }

    pub fn pdf_le(&self, _ray: &Ray, _n: &Normal3f) -> (Float, Float) {
        return (1.0, 0.0);
    }
}

// Scaled by the largest component first so that huge or tiny inputs
// neither overflow nor underflow the squared length.
fn normalize_direction(d: &Vector3f) -> Vector3f {
    let m = Float::max(d.x.abs(), Float::max(d.y.abs(), d.z.abs()));
    return (*d / m).normalize();
}

/// Reads `direction intensity` from the remaining fields of a
/// `Light Directional` line.
pub fn create_directional_light(params: &mut Parameter) -> Result<Light, SwanError> {
    let direction = params.find_vector()?;
    let l = params.find_spectrum()?;
    let light = DirectionalLight::new(&direction, &l);
    let w = light.direction();
    if !w.is_finite() || (w.length() - 1.0).abs() > 1e-3 {
        return Err(SwanError::invalid_value(
            params.line(),
            "directional light needs a non-zero direction",
        ));
    }
    return Ok(Light::Directional(light));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let light = DirectionalLight::new(&Vector3f::new(0.0, -2.0, 0.0), &Spectrum::one());
        assert_eq!(light.direction(), Vector3f::new(0.0, 1.0, 0.0));
        let (l, wi, pdf) = light.sample_li(&Point3f::new(5.0, 5.0, 5.0));
        assert_eq!(l, Spectrum::one());
        assert_eq!(wi, light.direction());
        assert_eq!(pdf, 1.0);
    }

    #[test]
    fn test_002() {
        let origin = Point3f::new(0.0, 10.0, 0.0);
        let light =
            DirectionalLight::with_origin(&origin, &Vector3f::new(0.0, 0.0, 1.0), &Spectrum::one());
        let (_, ray, n, pdf_pos, pdf_dir) = light.sample_le(&Point2f::new(0.9, 0.1));
        assert_eq!(ray.o, origin);
        assert_eq!(ray.d, Vector3f::new(0.0, 0.0, -1.0));
        assert_eq!(n, ray.d);
        assert_eq!(pdf_pos, 1.0);
        assert_eq!(pdf_dir, 1.0);
    }

    #[test]
    fn test_003() {
        let mut params = Parameter::new("0 0 0 1 1 1", 9);
        match create_directional_light(&mut params) {
            Err(SwanError::InvalidValue { line, .. }) => assert_eq!(line, 9),
            _ => panic!("expected an invalid value"),
        }
    }

    #[test]
    fn test_004() {
        for d in [
            Vector3f::new(1e20, 0.0, 0.0),
            Vector3f::new(0.0, -3e38, 3e38),
            Vector3f::new(1e-30, 0.0, -1e-30),
        ] {
            let light = DirectionalLight::new(&d, &Spectrum::one());
            let w = light.direction();
            assert!(w.is_finite(), "{:?}", d);
            assert!((w.length() - 1.0).abs() < 1e-5, "{:?}: {:?}", d, w);
            assert_eq!(light.travel_direction(), d);
        }
        let w = DirectionalLight::new(&Vector3f::new(1e20, 0.0, 0.0), &Spectrum::one()).direction();
        assert_eq!(w, Vector3f::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_005() {
        let mut params = Parameter::new("1e20 0 0 1 1 1", 2);
        match create_directional_light(&mut params) {
            Ok(Light::Directional(l)) => {
                assert_eq!(l.direction(), Vector3f::new(-1.0, 0.0, 0.0));
            }
            _ => panic!("expected a directional light"),
        }
        for s in ["nan 0 0 1 1 1", "inf 0 0 1 1 1", "1e999 0 0 1 1 1"] {
            let mut params = Parameter::new(s, 4);
            match create_directional_light(&mut params) {
                Err(SwanError::InvalidNumber { line, .. }) => assert_eq!(line, 4),
                _ => panic!("{}: expected an invalid number", s),
            }
        }
    }
}
