pub mod parameter;
pub mod tokenize;

pub use parameter::*;
pub use tokenize::*;
