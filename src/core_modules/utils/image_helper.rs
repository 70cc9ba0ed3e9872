// THEORY:
// The two ends of the pipeline: decoding a file into a normalised `PixelMatrix` and
// encoding a matrix back to disk. All format work is delegated to the `image` crate.
// Decoding always goes through `Rgb32F`, which normalises any bit depth to [0,1],
// expands greyscale sources to RGB and drops alpha. Encoding goes through `Rgb8`,
// since common formats (PNG, JPEG, BMP) cannot store floats.
//
// The input format is sniffed from the file's content, so a PNG without an extension
// or with a misleading one still decodes. The output format follows the extension and
// falls back to PNG when the extension is missing or unknown.

pub mod image_helper {
    use crate::core_modules::pixel_matrix::pixel_matrix::PixelMatrix;
    use crate::error::{EdgeError, Result};
    use image::{DynamicImage, ImageError, ImageFormat, ImageReader, Rgb32FImage};
    use log::info;
    use std::path::Path;

    /// Reads any supported image into a normalised RGB matrix.
    pub fn load(path: &Path) -> Result<PixelMatrix> {
        let decode_error = |source: ImageError| EdgeError::Decode {
            path: path.to_path_buf(),
            source,
        };
        let decoded = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_error(ImageError::IoError(e)))?
            .decode()
            .map_err(decode_error)?;
        let matrix = from_rgb32f(&decoded.into_rgb32f())?;
        info!(
            "loaded {} ({}x{})",
            path.display(),
            matrix.width(),
            matrix.height()
        );
        Ok(matrix)
    }

    /// Writes `matrix` as an 8-bit RGB image; values are expected in [0,1].
    pub fn save(matrix: &PixelMatrix, path: &Path) -> Result<()> {
        let buffer = to_rgb32f(matrix)?;
        DynamicImage::ImageRgb32F(buffer)
            .into_rgb8()
            .save_with_format(path, output_format(path))
            .map_err(|source| EdgeError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        info!("saved {}", path.display());
        Ok(())
    }

    /// Format implied by the extension of `path`, PNG when there is none.
    pub fn output_format(path: &Path) -> ImageFormat {
        ImageFormat::from_path(path).unwrap_or(ImageFormat::Png)
    }

    pub fn from_rgb32f(image: &Rgb32FImage) -> Result<PixelMatrix> {
        let (width, height) = image.dimensions();
        PixelMatrix::from_interleaved(height as usize, width as usize, image.as_raw())
    }

    pub fn to_rgb32f(matrix: &PixelMatrix) -> Result<Rgb32FImage> {
        let samples = matrix.to_interleaved();
        let expected = samples.len();
        Rgb32FImage::from_raw(matrix.width() as u32, matrix.height() as u32, samples).ok_or(
            EdgeError::DimensionMismatch {
                expected,
                actual: matrix.pixels().len() * 3,
            },
        )
    }
}

#[cfg(test)]
mod tests {

    use super::image_helper::*;
    use crate::core_modules::pixel_matrix::pixel_matrix::{Pixel, PixelMatrix};
    use crate::error::EdgeError;
    use image::ImageFormat;
    use std::path::{Path, PathBuf};

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("edge_extract_helper_{}_{name}", std::process::id()))
    }

    #[test]
    fn save_and_reload_white_file() {
        let path = scratch("white_file.png");
        let matrix = PixelMatrix::filled(20, 30, Pixel::splat(1.0));

        save(&matrix, &path).expect("Error Saving File.");
        let reloaded = load(&path).expect("Error Loading File.");
        std::fs::remove_file(&path).ok();

        assert_eq!(reloaded, matrix);
    }

    #[test]
    fn save_gradient_file_quantises_to_bytes() {
        let path = scratch("gradient_file.png");
        let width = 256;
        let mut matrix = PixelMatrix::zeros(2, width);
        for col in 0..width {
            let value = col as f32 / 255.0;
            matrix[(0, col)] = Pixel::splat(value);
            matrix[(1, col)] = Pixel::new(value, 0.0, 1.0 - value);
        }

        save(&matrix, &path).expect("Error Saving File.");
        let reloaded = load(&path).expect("Error Loading File.");
        std::fs::remove_file(&path).ok();

        assert_eq!(reloaded.dimensions(), (2, width));
        for col in 0..width {
            let expected = matrix[(1, col)];
            let actual = reloaded[(1, col)];
            assert!((expected.red - actual.red).abs() < 1e-6);
            assert!((expected.blue - actual.blue).abs() < 1e-6);
        }
    }

    #[test]
    fn missing_input_is_a_decode_error() {
        let err = load(&scratch("does_not_exist.png")).unwrap_err();
        assert!(matches!(err, EdgeError::Decode { .. }), "{err}");
    }

    #[test]
    fn garbage_input_is_a_decode_error() {
        let path = scratch("garbage.png");
        std::fs::write(&path, b"definitely not a png").expect("write scratch file");
        let err = load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, EdgeError::Decode { .. }), "{err}");
    }

    #[test]
    fn input_format_is_detected_from_content() {
        let source = scratch("dot_source.png");
        let mut matrix = PixelMatrix::zeros(4, 4);
        matrix[(1, 1)] = Pixel::new(1.0, 0.0, 0.0);
        save(&matrix, &source).expect("Error Saving File.");

        for name in ["dot_no_extension", "dot_misnamed.jpg"] {
            let renamed = scratch(name);
            std::fs::copy(&source, &renamed).expect("copy scratch file");
            let reloaded = load(&renamed);
            std::fs::remove_file(&renamed).ok();

            assert_eq!(reloaded.expect(name), matrix, "{name}");
        }
        std::fs::remove_file(&source).ok();
    }

    #[test]
    fn extensionless_output_is_written_as_png() {
        let path = scratch("edges");
        let matrix = PixelMatrix::filled(3, 3, Pixel::splat(1.0));

        save(&matrix, &path).expect("Error Saving File.");
        let header = std::fs::read(&path).expect("read scratch file");
        let reloaded = load(&path).expect("Error Loading File.");
        std::fs::remove_file(&path).ok();

        assert_eq!(&header[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(reloaded, matrix);
    }

    #[test]
    fn output_format_follows_extension() {
        assert_eq!(output_format(Path::new("out.bmp")), ImageFormat::Bmp);
        assert_eq!(output_format(Path::new("out.JPG")), ImageFormat::Jpeg);
        assert_eq!(output_format(Path::new("Edge extracted image.png")), ImageFormat::Png);
        assert_eq!(output_format(Path::new("edges")), ImageFormat::Png);
    }

    #[test]
    fn missing_output_directory_is_an_encode_error() {
        let path = scratch("no_such_dir").join("out.png");
        let err = save(&PixelMatrix::zeros(4, 4), &path).unwrap_err();

        assert!(matches!(err, EdgeError::Encode { .. }), "{err}");
        assert!(!path.exists());
    }

    #[test]
    fn rgb32f_conversion_keeps_shape() {
        let matrix = PixelMatrix::filled(3, 5, Pixel::new(0.1, 0.2, 0.3));
        let buffer = to_rgb32f(&matrix).expect("valid shape");

        assert_eq!(buffer.dimensions(), (5, 3));
        assert_eq!(from_rgb32f(&buffer).expect("valid shape"), matrix);
    }
}
