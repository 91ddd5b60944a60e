pub mod check;
pub mod generate;
pub mod loader;
pub mod tree;


pub use loader::Input;
