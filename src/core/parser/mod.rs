pub mod parse_file;
pub mod print_scene;

pub use parse_file::*;
pub use print_scene::*;
