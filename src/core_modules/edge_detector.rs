// THEORY:
// The edge detector slides the fixed 3x3 `LAPLACIAN` over a greyscale matrix. For every
// processed output pixel it sums `weight * neighbour` over the nine kernel cells. Since
// the greyscale stage writes the same value to all three channels, the sum is done on
// whole `Pixel`s and the output channels stay equal.
//
// Processed region: output rows `1..=H-3` and columns `1..=W-3`. Everything else keeps
// the neutral fill value (zero); border pixels are never special-cased with padding,
// reflection or clamped sampling. Images smaller than 4x4 produce an all-zero result.
//
// Accumulation runs over the kernel cells in row-major order, zero-weight corners
// included, starting from zero. With that order a constant field cancels to exactly
// 0.0 in floating point.
//
// Two neighbourhood samplings exist:
// - `Centered`: the kernel centre sits on the output pixel itself; the -1 weights land
//   on its up/down/left/right neighbours. Default.
// - `Legacy`: the historical indexing. The neighbourhood is anchored one pixel down and
//   right of the output pixel, and the (1,2) cell re-reads the top row instead of the
//   middle row. Kept only for bit-compatibility with old outputs.

use crate::core_modules::kernel::LAPLACIAN;
use crate::core_modules::pixel_matrix::pixel_matrix::{Intensity, Pixel, PixelMatrix};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    #[default]
    Centered,
    Legacy,
}

impl Sampling {
    /// Input position read by kernel cell `(ki, kj)` when computing output `(row, col)`.
    ///
    /// Only valid for `(row, col)` inside the processed region.
    fn source(self, row: usize, col: usize, ki: usize, kj: usize) -> (usize, usize) {
        match self {
            Sampling::Centered => (row + ki - 1, col + kj - 1),
            Sampling::Legacy => match (ki, kj) {
                (1, 2) => (row, col + 2),
                _ => (row + ki, col + kj),
            },
        }
    }
}

/// Output indices along an axis of length `len` that receive a convolution result.
pub fn processed_span(len: usize) -> Range<usize> {
    1..len.saturating_sub(2).max(1)
}

/// Computes one output row into `out`, which must be exactly one row wide.
/// Cells outside the processed region are left untouched.
pub fn convolve_row(source: &PixelMatrix, row: usize, sampling: Sampling, out: &mut [Pixel]) {
    debug_assert_eq!(out.len(), source.width(), "row buffer width");
    if !processed_span(source.height()).contains(&row) {
        return;
    }
    for col in processed_span(source.width()) {
        out[col] = LAPLACIAN
            .cells()
            .fold(Pixel::BLACK, |acc, (ki, kj, weight)| {
                let (r, c) = sampling.source(row, col, ki, kj);
                acc + source[(r, c)] * Intensity::from(weight)
            });
    }
}

pub fn detect_edges(source: &PixelMatrix, sampling: Sampling) -> PixelMatrix {
    let mut edges = PixelMatrix::zeros(source.height(), source.width());
    for (row, out) in edges.rows_mut().enumerate() {
        convolve_row(source, row, sampling, out);
    }
    edges
}
