pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;

pub use super::error::*;
pub use super::geometry::*;
pub use super::light::*;
pub use super::material::*;
pub use super::parameter::*;
pub use super::sampling::*;
pub use super::scene::*;
pub use super::shape::*;
pub use super::spectrum::*;
