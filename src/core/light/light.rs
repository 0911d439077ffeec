use crate::core::prelude::*;
use crate::lights::*;

use serde::Serialize;

pub enum LightFlags {
    DeltaPosition = 1,
    DeltaDirection = 2,
    Area = 4,
}

/// The closed set of emitters a scene can hold.
///
/// Every variant answers the same two sampling queries; the `Area` variant is
/// a placeholder whose samples carry no energy, which callers treat as a valid
/// but negligible contribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Light {
    Directional(DirectionalLight),
    Point(PointLight),
    Area(AreaLight),
}

impl Light {
    /// Samples the light as seen from the reception point `p`.
    ///
    /// Returns the incident intensity, the unit direction `wi` from `p`
    /// toward the light and the density of that direction.
    pub fn sample_li(&self, p: &Point3f) -> (Spectrum, Vector3f, Float) {
        match self {
            Light::Directional(l) => l.sample_li(p),
            Light::Point(l) => l.sample_li(p),
            Light::Area(l) => l.sample_li(p),
        }
    }

    /// Emits a ray leaving the light, driven by the sample `u` in `[0,1)^2`.
    ///
    /// Returns the emitted intensity, the ray, the normal at the emission
    /// point, the positional density and the directional density.
    pub fn sample_le(&self, u: &Point2f) -> (Spectrum, Ray, Normal3f, Float, Float) {
        match self {
            Light::Directional(l) => l.sample_le(u),
            Light::Point(l) => l.sample_le(u),
            Light::Area(l) => l.sample_le(u),
        }
    }

    pub fn power(&self) -> Spectrum {
        match self {
            Light::Directional(l) => l.power(),
            Light::Point(l) => l.power(),
            Light::Area(l) => l.power(),
        }
    }

    /// Density of sampling `wi` from `p` with `sample_li`. Delta lights are
    /// never hit by chance, so this is zero for all variants.
    pub fn pdf_li(&self, _p: &Point3f, _wi: &Vector3f) -> Float {
        return 0.0;
    }

    /// Positional and directional densities of emitting `ray`.
    pub fn pdf_le(&self, ray: &Ray, n_light: &Normal3f) -> (Float, Float) {
        match self {
            Light::Directional(l) => l.pdf_le(ray, n_light),
            Light::Point(l) => l.pdf_le(ray, n_light),
            Light::Area(l) => l.pdf_le(ray, n_light),
        }
    }

    pub fn get_light_flags(&self) -> u32 {
        match self {
            Light::Directional(_) => LightFlags::DeltaDirection as u32,
            Light::Point(_) => LightFlags::DeltaPosition as u32,
            Light::Area(_) => LightFlags::Area as u32,
        }
    }

    pub fn is_delta(&self) -> bool {
        let flags = self.get_light_flags();
        return ((flags & LightFlags::DeltaPosition as u32) != 0)
            || ((flags & LightFlags::DeltaDirection as u32) != 0);
    }

    pub fn is_delta_direction(&self) -> bool {
        let flags = self.get_light_flags();
        return (flags & LightFlags::DeltaDirection as u32) != 0;
    }

    pub fn is_area(&self) -> bool {
        let flags = self.get_light_flags();
        return (flags & LightFlags::Area as u32) != 0;
    }

    /// Keyword naming this light in a scene file.
    pub fn name(&self) -> &'static str {
        match self {
            Light::Directional(_) => "Directional",
            Light::Point(_) => "Point",
            Light::Area(_) => "Area",
        }
    }
}

impl From<PointLight> for Light {
    fn from(l: PointLight) -> Self {
        Light::Point(l)
    }
}

impl From<DirectionalLight> for Light {
    fn from(l: DirectionalLight) -> Self {
        Light::Directional(l)
    }
}

impl From<AreaLight> for Light {
    fn from(l: AreaLight) -> Self {
        Light::Area(l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let p = Light::from(PointLight::new(&Point3f::zero(), &Spectrum::one()));
        let d = Light::from(DirectionalLight::new(
            &Vector3f::new(0.0, -1.0, 0.0),
            &Spectrum::one(),
        ));
        let a = Light::from(AreaLight::new());
        assert!(p.is_delta() && !p.is_delta_direction());
        assert!(d.is_delta() && d.is_delta_direction());
        assert!(!a.is_delta() && a.is_area());
        assert_eq!(p.name(), "Point");
        assert_eq!(d.name(), "Directional");
        assert_eq!(a.name(), "Area");
    }

    #[test]
    fn test_002() {
        let a = Light::from(AreaLight::new());
        let (l, wi, pdf) = a.sample_li(&Point3f::new(1.0, 2.0, 3.0));
        assert!(l.is_black());
        assert_eq!(wi, Vector3f::zero());
        assert_eq!(pdf, 0.0);
        let (le, _, _, pdf_pos, pdf_dir) = a.sample_le(&Point2f::new(0.5, 0.5));
        assert!(le.is_black());
        assert_eq!(pdf_pos, 0.0);
        assert_eq!(pdf_dir, 0.0);
        assert!(a.power().is_black());
    }

    #[test]
    fn test_003() {
        let p = Light::from(PointLight::new(&Point3f::zero(), &Spectrum::one()));
        let (_, ray, n, _, _) = p.sample_le(&Point2f::new(0.3, 0.6));
        let (pdf_pos, pdf_dir) = p.pdf_le(&ray, &n);
        assert_eq!(pdf_pos, 0.0);
        assert_eq!(pdf_dir, uniform_sphere_pdf());
        assert_eq!(p.pdf_li(&Point3f::new(0.0, 1.0, 0.0), &ray.d), 0.0);
    }
}
