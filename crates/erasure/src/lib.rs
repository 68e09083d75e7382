pub mod boxes;
pub mod equatable;
pub mod family;
pub mod matrix;
pub mod opaque;
pub mod pages;
