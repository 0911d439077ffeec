use crate::core::prelude::*;
use crate::materials::*;

use serde::Serialize;

/// Surface reflectance model bound to an object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Material {
    Diffuse(DiffuseMaterial),
    Reflect(ReflectMaterial),
}

impl Material {
    pub fn reflectance(&self) -> Spectrum {
        match self {
            Material::Diffuse(m) => m.kd(),
            Material::Reflect(m) => m.kr(),
        }
    }

    /// Keyword naming this material in a scene file.
    pub fn name(&self) -> &'static str {
        match self {
            Material::Diffuse(_) => "Diffuse",
            Material::Reflect(_) => "Reflect",
        }
    }
}
