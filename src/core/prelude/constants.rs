use super::types::Float;

pub const DOUBLE_ONE_MINUS_EPSILON: f64 = 0.99999999999999989;
pub const FLOAT_ONE_MINUS_EPSILON: f32 = 0.99999994;

#[cfg(not(feature = "float-as-double"))]
mod detail {
    use super::*;

    pub const PI: Float = std::f32::consts::PI; //3.14159265358979323846;
    pub const INV_PI: Float = std::f32::consts::FRAC_1_PI; //0.31830988618379067154;
    pub const INV_4_PI: Float = INV_PI * 0.25;

    pub const ONE_MINUS_EPSILON: f32 = FLOAT_ONE_MINUS_EPSILON;
}

#[cfg(feature = "float-as-double")]
mod detail {
    use super::*;

    pub const PI: Float = std::f64::consts::PI; //3.14159265358979323846;
    pub const INV_PI: Float = std::f64::consts::FRAC_1_PI; //0.31830988618379067154;
    pub const INV_4_PI: Float = INV_PI * 0.25;

    pub const ONE_MINUS_EPSILON: f64 = DOUBLE_ONE_MINUS_EPSILON;
}

pub use detail::*;
