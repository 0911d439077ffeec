use crate::core::prelude::*;

use serde::Serialize;

/// Perfect specular reflector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReflectMaterial {
    kr: Spectrum,
}

impl ReflectMaterial {
    pub fn new(kr: &Spectrum) -> Self {
        ReflectMaterial { kr: *kr }
    }

    pub fn kr(&self) -> Spectrum {
        return self.kr;
    }
}

pub fn create_reflect_material(params: &mut Parameter) -> Result<Material, SwanError> {
    let kr = params.find_spectrum()?;
    return Ok(Material::Reflect(ReflectMaterial::new(&kr)));
}
