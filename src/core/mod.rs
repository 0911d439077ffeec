pub mod error;
pub mod geometry;
pub mod light;
pub mod material;
pub mod parameter;
pub mod parser;
pub mod prelude;
pub mod sampling;
pub mod scene;
pub mod shape;
pub mod spectrum;
