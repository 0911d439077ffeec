pub mod rgb;
pub mod spectrum;

pub use rgb::*;
pub use spectrum::*;
