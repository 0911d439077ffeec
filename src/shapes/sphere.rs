use crate::core::prelude::*;

use serde::Serialize;

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Sphere {
    pub center: Point3f,
    pub radius: Float,
}

impl Sphere {
    pub fn new(center: &Point3f, radius: Float) -> Self {
        Sphere {
            center: *center,
            radius,
        }
    }

    pub fn area(&self) -> Float {
        return 4.0 * PI * self.radius * self.radius;
    }
}

/// Reads `center radius` from the remaining fields of an `Object` line.
pub fn create_sphere(params: &mut Parameter) -> Result<Shape, SwanError> {
    let center = params.find_position()?;
    let radius = params.find_float()?;
    if radius <= 0.0 {
        let msg = format!("sphere radius must be positive, found {}", radius);
        return Err(SwanError::invalid_value(params.line(), &msg));
    }
    return Ok(Shape::Sphere(Sphere::new(&center, radius)));
}
