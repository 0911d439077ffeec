pub mod create_shape;
pub mod sphere;

pub use create_shape::*;
pub use sphere::*;
