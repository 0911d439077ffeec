use super::*;
use crate::core::prelude::*;

/// Builds the light named by the keyword following `Light`.
pub fn create_light(name: &str, params: &mut Parameter) -> Result<Light, SwanError> {
    match name {
        "Point" => {
            return create_point_light(params);
        }
        "Directional" => {
            return create_directional_light(params);
        }
        _ => {
            return Err(SwanError::syntax(
                params.line(),
                "\"Point\" or \"Directional\"",
                name,
            ));
        }
    }
}
