pub mod fs;
pub mod tree;
