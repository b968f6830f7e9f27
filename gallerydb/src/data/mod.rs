mod album;
mod date;
mod gallery;
mod image;
mod page;

pub use album::*;
pub use date::*;
pub use gallery::*;
pub use image::*;
pub use page::*;
