// THEORY:
// The greyscale converter collapses colour into perceived brightness using fixed luma
// weights (0.30 R + 0.59 G + 0.11 B) and writes that value back to all three channels.
// The output keeps the RGB shape so that the convolution can keep working per pixel.
//
// The historical converter never wrote the last row or the last column of the image;
// those cells stay zero. `Coverage::Legacy` keeps that behaviour and is the default,
// `Coverage::Full` converts every pixel.

use crate::core_modules::pixel_matrix::pixel_matrix::{Intensity, Pixel, PixelMatrix};

/// Fixed luminance coefficients.
pub const LUMA_WEIGHTS: LumaWeights = LumaWeights {
    red: 0.30,
    green: 0.59,
    blue: 0.11,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LumaWeights {
    pub red: Intensity,
    pub green: Intensity,
    pub blue: Intensity,
}

impl LumaWeights {
    pub fn luma(&self, pixel: &Pixel) -> Intensity {
        self.red * pixel.red + self.green * pixel.green + self.blue * pixel.blue
    }
}

/// Which part of the image the converter writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coverage {
    /// Rows `[0, H-1)` and columns `[0, W-1)`; the last row and column stay zero.
    #[default]
    Legacy,
    /// Every pixel.
    Full,
}

impl Coverage {
    /// Number of leading `(rows, cols)` that get converted.
    pub fn extent(self, height: usize, width: usize) -> (usize, usize) {
        match self {
            Coverage::Legacy => (height.saturating_sub(1), width.saturating_sub(1)),
            Coverage::Full => (height, width),
        }
    }
}

/// Converts one row of `source` into `out`, which must be exactly one row wide.
/// Cells outside the coverage are left untouched.
pub fn greyscale_row(source: &PixelMatrix, row: usize, coverage: Coverage, out: &mut [Pixel]) {
    debug_assert_eq!(out.len(), source.width(), "row buffer width");
    let (rows, cols) = coverage.extent(source.height(), source.width());
    if row >= rows {
        return;
    }
    for (target, pixel) in out.iter_mut().zip(source.row(row)).take(cols) {
        *target = Pixel::splat(LUMA_WEIGHTS.luma(pixel));
    }
}

pub fn to_greyscale(source: &PixelMatrix, coverage: Coverage) -> PixelMatrix {
    let mut grey = PixelMatrix::zeros(source.height(), source.width());
    for (row, out) in grey.rows_mut().enumerate() {
        greyscale_row(source, row, coverage, out);
    }
    grey
}
