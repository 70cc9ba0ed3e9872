// THEORY:
// The convolution kernel is a design constant, not configuration. A 3x3 "point"
// Laplacian: the centre pixel weighted 4, its four edge neighbours weighted -1, and the
// corners ignored. Its weights sum to zero, so a flat region produces no response and
// only local changes in intensity (edges) survive. A kernel whose weights did not sum
// to zero would brighten or darken the whole image instead.

pub type Weight = i8;

pub const KERNEL_SIZE: usize = 3;

/// The fixed edge-extraction kernel.
pub const LAPLACIAN: Kernel = Kernel::new([[0, -1, 0], [-1, 4, -1], [0, -1, 0]]);

/// A square 3x3 grid of signed integer weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    weights: [[Weight; KERNEL_SIZE]; KERNEL_SIZE],
}

impl Kernel {
    pub const fn new(weights: [[Weight; KERNEL_SIZE]; KERNEL_SIZE]) -> Self {
        Self { weights }
    }

    pub fn weight(&self, ki: usize, kj: usize) -> Weight {
        self.weights[ki][kj]
    }

    pub fn sum(&self) -> i32 {
        self.weights.iter().flatten().map(|&w| i32::from(w)).sum()
    }

    /// Every cell as `(ki, kj, weight)`, in row-major order.
    ///
    /// Zero-weight cells are included: the convolution accumulates in exactly this
    /// order, which keeps floating-point results reproducible.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .flat_map(|(ki, row)| row.iter().enumerate().map(move |(kj, &w)| (ki, kj, w)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laplacian_sums_to_zero() {
        assert_eq!(LAPLACIAN.sum(), 0);
    }

    #[test]
    fn laplacian_layout() {
        assert_eq!(LAPLACIAN.weight(1, 1), 4);
        for (ki, kj) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            assert_eq!(LAPLACIAN.weight(ki, kj), -1);
        }
        for (ki, kj) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert_eq!(LAPLACIAN.weight(ki, kj), 0);
        }
    }

    #[test]
    fn cells_are_row_major() {
        let cells: Vec<_> = LAPLACIAN.cells().collect();
        assert_eq!(cells.len(), KERNEL_SIZE * KERNEL_SIZE);
        assert_eq!(cells[0], (0, 0, 0));
        assert_eq!(cells[1], (0, 1, -1));
        assert_eq!(cells[4], (1, 1, 4));
        assert_eq!(cells[8], (2, 2, 0));
    }
}
