// THEORY:
// Convolution output is unbounded, while image encoders expect normalised intensities.
// The clamper clips every channel into [0,1] and changes nothing else. NaN (which the
// pipeline never produces from finite input) is treated as black.

use crate::core_modules::pixel_matrix::pixel_matrix::{Intensity, Pixel, PixelMatrix};

pub const MIN_INTENSITY: Intensity = 0.0;
pub const MAX_INTENSITY: Intensity = 1.0;

pub fn clamp_value(value: Intensity) -> Intensity {
    if value.is_nan() || value < MIN_INTENSITY {
        MIN_INTENSITY
    } else if value > MAX_INTENSITY {
        MAX_INTENSITY
    } else {
        value
    }
}

pub fn clamp_row(row: &mut [Pixel]) {
    for pixel in row.iter_mut() {
        *pixel = pixel.map(clamp_value);
    }
}

/// Clamps every value of `matrix` into [0,1], reusing its buffer.
pub fn clamp_intensity(mut matrix: PixelMatrix) -> PixelMatrix {
    for row in matrix.rows_mut() {
        clamp_row(row);
    }
    matrix
}
