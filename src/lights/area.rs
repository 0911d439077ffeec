use crate::core::prelude::*;

use serde::Serialize;

/// Placeholder for emitters bound to a shape. It has no geometry yet and
/// every sample it produces carries zero energy.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct AreaLight {}

impl AreaLight {
    pub fn new() -> Self {
        AreaLight {}
    }

    pub fn sample_li(&self, _p: &Point3f) -> (Spectrum, Vector3f, Float) {
        return (Spectrum::zero(), Vector3f::zero(), 0.0);
    }

    pub fn sample_le(&self, _u: &Point2f) -> (Spectrum, Ray, Normal3f, Float, Float) {
        return (Spectrum::zero(), Ray::zero(), Normal3f::zero(), 0.0, 0.0);
    }

    pub fn power(&self) -> Spectrum {
        return Spectrum::zero();
    }

    pub fn pdf_le(&self, _ray: &Ray, _n: &Normal3f) -> (Float, Float) {
        return (0.0, 0.0);
    }
}
