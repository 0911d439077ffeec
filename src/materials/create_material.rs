use super::*;
use crate::core::prelude::*;

/// Builds the material named by the keyword following `Object`.
pub fn create_material(name: &str, params: &mut Parameter) -> Result<Material, SwanError> {
    match name {
        "Diffuse" => {
            return create_diffuse_material(params);
        }
        "Reflect" => {
            return create_reflect_material(params);
        }
        _ => {
            let msg = "\"Diffuse\" or \"Reflect\"";
            return Err(SwanError::syntax(params.line(), msg, name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let mut params = Parameter::new("0.5 0.5 0.8", 1);
        let m = create_material("Diffuse", &mut params).unwrap();
        assert_eq!(m.name(), "Diffuse");
        assert_eq!(m.reflectance(), Spectrum::new(0.5, 0.5, 0.8));
    }

    #[test]
    fn test_002() {
        let mut params = Parameter::new("0.9 0.9 0.9", 1);
        let m = create_material("Reflect", &mut params).unwrap();
        assert_eq!(m.name(), "Reflect");
    }

    #[test]
    fn test_003() {
        let mut params = Parameter::new("1 1 1", 3);
        match create_material("Glass", &mut params) {
            Err(SwanError::Syntax { line, found, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(found, "Glass");
            }
            _ => panic!("expected a syntax error"),
        }
    }
}
