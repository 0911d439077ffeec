use crate::core::prelude::*;

use serde::Serialize;

/// Isotropic emitter located at a single point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointLight {
    p_light: Point3f,
    intensity: Spectrum,
}

impl PointLight {
    pub fn new(p_light: &Point3f, intensity: &Spectrum) -> Self {
        PointLight {
            p_light: *p_light,
            intensity: *intensity,
        }
    }

    pub fn position(&self) -> Point3f {
        return self.p_light;
    }

    pub fn intensity(&self) -> Spectrum {
        return self.intensity;
    }

    // No 1/r^2 falloff here; the caller knows the distance.
    pub fn sample_li(&self, p: &Point3f) -> (Spectrum, Vector3f, Float) {
        let wi = (self.p_light - *p).normalize();
        let pdf = 1.0;
        return (self.intensity, wi, pdf);
    }

    pub fn sample_le(&self, u: &Point2f) -> (Spectrum, Ray, Normal3f, Float, Float) {
        let ray = Ray::from((&self.p_light, &uniform_sample_sphere(u)));
        let n = ray.d;
        let pdf_pos = 1.0;
        let pdf_dir = uniform_sphere_pdf();
        return (self.intensity, ray, n, pdf_pos, pdf_dir);
    }

    pub fn power(&self) -> Spectrum {
        return self.intensity * (4.0 * PI);
    }

    pub fn pdf_le(&self, _ray: &Ray, _n: &Normal3f) -> (Float, Float) {
        return (0.0, uniform_sphere_pdf());
    }
}

/// Reads `position intensity` from the remaining fields of a `Light Point` line.
pub fn create_point_light(params: &mut Parameter) -> Result<Light, SwanError> {
    let position = params.find_position()?;
    let intensity = params.find_spectrum()?;
    return Ok(Light::Point(PointLight::new(&position, &intensity)));
}
