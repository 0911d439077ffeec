pub mod create_material;
pub mod diffuse;
pub mod reflect;

pub use create_material::*;
pub use diffuse::*;
pub use reflect::*;
