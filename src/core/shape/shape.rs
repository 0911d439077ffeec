use crate::core::prelude::*;
use crate::shapes::*;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Shape {
    Sphere(Sphere),
}

impl Shape {
    pub fn area(&self) -> Float {
        match self {
            Shape::Sphere(s) => s.area(),
        }
    }

    /// Keyword naming this shape in a scene file.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "Sphere",
        }
    }
}
