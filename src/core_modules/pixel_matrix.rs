// THEORY:
// The `PixelMatrix` module is the single data model every stage of the edge pipeline
// reads and writes. It is a "dumb" container: a dense, row-major grid of `Pixel`s plus
// its dimensions, with no knowledge of greyscale, kernels, or clamping.
//
// Key principles:
// 1.  **Normalised floats**: Channels are `f32` in [0,1] after loading. Intermediate
//     stages (the convolution) are allowed to leave that range; only the clamper
//     brings values back before serialisation.
// 2.  **Vector pixels**: A `Pixel` carries its three channels together and supports the
//     two operations the convolution needs (scale by a weight, add two pixels), so the
//     kernel is applied per pixel rather than per scalar channel.
// 3.  **Fixed shape**: Dimensions are set on construction and never change. Each stage
//     allocates a fresh matrix of the same shape instead of mutating its input.
// 4.  **Row access**: Rows are exposed as slices (`row`, `rows_mut`) so that stages can
//     work one row at a time and the parallel driver can split work into row bands.

pub mod pixel_matrix {
    use crate::error::{EdgeError, Result};
    use std::ops::{Add, Index, IndexMut, Mul};

    pub type Intensity = f32;
    pub type Channels = [Intensity; CHANNELS];

    pub const CHANNELS: usize = 3;

    /// A single RGB cell with normalised floating-point channels.
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Pixel {
        /// The red channel, nominally 0.0-1.0.
        pub red: Intensity,
        /// The green channel, nominally 0.0-1.0.
        pub green: Intensity,
        /// The blue channel, nominally 0.0-1.0.
        pub blue: Intensity,
    }

    impl Pixel {
        pub const BLACK: Pixel = Pixel {
            red: 0.0,
            green: 0.0,
            blue: 0.0,
        };

        pub fn new(red: Intensity, green: Intensity, blue: Intensity) -> Self {
            Self { red, green, blue }
        }

        /// A grey pixel: the same value on every channel.
        pub fn splat(value: Intensity) -> Self {
            Self::new(value, value, value)
        }

        pub fn channels(&self) -> Channels {
            [self.red, self.green, self.blue]
        }

        /// True when all three channels hold the same value.
        pub fn is_grey(&self) -> bool {
            self.red == self.green && self.green == self.blue
        }

        /// Applies `f` to every channel independently.
        pub fn map(self, f: impl Fn(Intensity) -> Intensity) -> Self {
            Self::new(f(self.red), f(self.green), f(self.blue))
        }
    }

    impl Add for Pixel {
        type Output = Pixel;

        fn add(self, other: Pixel) -> Pixel {
            Pixel::new(
                self.red + other.red,
                self.green + other.green,
                self.blue + other.blue,
            )
        }
    }

    impl Mul<Intensity> for Pixel {
        type Output = Pixel;

        fn mul(self, weight: Intensity) -> Pixel {
            self.map(|channel| channel * weight)
        }
    }

    impl From<Channels> for Pixel {
        fn from(channels: Channels) -> Self {
            Pixel::new(channels[0], channels[1], channels[2])
        }
    }

    impl From<Pixel> for Channels {
        fn from(pixel: Pixel) -> Self {
            pixel.channels()
        }
    }

    /// A dense height x width grid of RGB pixels, stored row-major.
    #[derive(Debug, Clone, PartialEq)]
    pub struct PixelMatrix {
        /// Number of rows.
        height: usize,
        /// Number of columns.
        width: usize,
        /// Flattened pixel data, `height * width` entries.
        pixels: Vec<Pixel>,
    }

    impl PixelMatrix {
        /// A matrix filled with the neutral value (black / zero).
        pub fn zeros(height: usize, width: usize) -> Self {
            Self::filled(height, width, Pixel::BLACK)
        }

        pub fn filled(height: usize, width: usize, pixel: Pixel) -> Self {
            Self {
                height,
                width,
                pixels: vec![pixel; height * width],
            }
        }

        pub fn from_pixels(height: usize, width: usize, pixels: Vec<Pixel>) -> Result<Self> {
            let expected = height * width;
            if pixels.len() != expected {
                return Err(EdgeError::DimensionMismatch {
                    expected,
                    actual: pixels.len(),
                });
            }
            Ok(Self {
                height,
                width,
                pixels,
            })
        }

        /// Builds a matrix from interleaved `[r, g, b, r, g, b, ...]` samples.
        pub fn from_interleaved(
            height: usize,
            width: usize,
            samples: &[Intensity],
        ) -> Result<Self> {
            let expected = height * width * CHANNELS;
            if samples.len() != expected {
                return Err(EdgeError::DimensionMismatch {
                    expected,
                    actual: samples.len(),
                });
            }
            let pixels = samples
                .chunks_exact(CHANNELS)
                .map(|rgb| Pixel::new(rgb[0], rgb[1], rgb[2]))
                .collect();
            Self::from_pixels(height, width, pixels)
        }

        pub fn height(&self) -> usize {
            self.height
        }

        pub fn width(&self) -> usize {
            self.width
        }

        /// `(height, width)`
        pub fn dimensions(&self) -> (usize, usize) {
            (self.height, self.width)
        }

        pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
            if row < self.height && col < self.width {
                Some(self.pixels[row * self.width + col])
            } else {
                None
            }
        }

        pub fn row(&self, row: usize) -> &[Pixel] {
            let start = row * self.width;
            &self.pixels[start..start + self.width]
        }

        pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
            // `chunks` rejects a zero size; an empty-width matrix has no pixels anyway.
            self.pixels.chunks(self.width.max(1))
        }

        pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Pixel]> {
            self.pixels.chunks_mut(self.width.max(1))
        }

        pub fn pixels(&self) -> &[Pixel] {
            &self.pixels
        }

        /// Flattens back into interleaved `[r, g, b, ...]` samples.
        pub fn to_interleaved(&self) -> Vec<Intensity> {
            self.pixels.iter().flat_map(Pixel::channels).collect()
        }
    }

    impl Index<(usize, usize)> for PixelMatrix {
        type Output = Pixel;

        fn index(&self, (row, col): (usize, usize)) -> &Pixel {
            assert!(
                row < self.height && col < self.width,
                "pixel ({row}, {col}) outside {}x{} matrix",
                self.height,
                self.width
            );
            &self.pixels[row * self.width + col]
        }
    }

    impl IndexMut<(usize, usize)> for PixelMatrix {
        fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Pixel {
            assert!(
                row < self.height && col < self.width,
                "pixel ({row}, {col}) outside {}x{} matrix",
                self.height,
                self.width
            );
            &mut self.pixels[row * self.width + col]
        }
    }
}
