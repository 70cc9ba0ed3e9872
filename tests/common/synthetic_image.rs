use image::{Rgb, RgbImage};
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// A black RGB image with a single coloured pixel at `(row, col)`.
pub fn dot_rgb8(width: u32, height: u32, row: u32, col: u32, colour: [u8; 3]) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    img.put_pixel(col, row, Rgb(colour));
    img
}

/// Left half black, right half white.
pub fn vertical_step_rgb8(width: u32, height: u32) -> RgbImage {
    assert!(width > 1 && height > 0, "image dimensions must be positive");
    RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) }
    })
}

pub fn uniform_rgb8(width: u32, height: u32, colour: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(colour))
}

/// A per-test directory under the system temp dir, removed with its contents on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl Deref for ScratchDir {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

pub fn scratch_dir(test: &str) -> ScratchDir {
    let path = std::env::temp_dir().join(format!("edge_extract_{}_{test}", std::process::id()));
    std::fs::create_dir_all(&path).expect("create scratch dir");
    ScratchDir { path }
}

pub fn write_png(img: &RgbImage, path: &Path) {
    img.save(path).expect("write synthetic png");
}
