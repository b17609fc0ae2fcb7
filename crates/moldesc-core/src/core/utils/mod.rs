pub mod chains;
pub mod geometry;
