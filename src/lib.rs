pub mod core;
pub mod lights;
pub mod materials;
pub mod shapes;
