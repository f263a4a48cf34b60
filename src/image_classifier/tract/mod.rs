pub mod image;
pub mod ranking;
