pub mod sampling;

pub use sampling::*;
