use super::*;
use crate::core::prelude::*;

/// Builds the shape named by the keyword following an object's material.
pub fn create_shape(name: &str, params: &mut Parameter) -> Result<Shape, SwanError> {
    match name {
        "Sphere" => {
            return create_sphere(params);
        }
        _ => {
            return Err(SwanError::syntax(params.line(), "\"Sphere\"", name));
        }
    }
}
