pub mod bounding_box;
pub mod matrix;
pub mod pixel_grid;

pub use bounding_box::BoundingBox;
pub use matrix::ModuleMatrix;
pub use pixel_grid::PixelGrid;
