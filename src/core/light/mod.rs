pub mod light;

pub use light::*;
