pub mod clamper;
pub mod edge_detector;
pub mod greyscale;
pub mod kernel;
pub mod pixel_matrix;
pub mod utils;
