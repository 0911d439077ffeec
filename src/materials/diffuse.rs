use crate::core::prelude::*;

use serde::Serialize;

/// Lambertian reflector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffuseMaterial {
    kd: Spectrum,
}

impl DiffuseMaterial {
    pub fn new(kd: &Spectrum) -> Self {
        DiffuseMaterial { kd: *kd }
    }

    pub fn kd(&self) -> Spectrum {
        return self.kd;
    }
}

pub fn create_diffuse_material(params: &mut Parameter) -> Result<Material, SwanError> {
    let kd = params.find_spectrum()?;
    return Ok(Material::Diffuse(DiffuseMaterial::new(&kd)));
}
