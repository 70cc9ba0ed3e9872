// THEORY:
// The `pipeline` module is the top-level API for edge extraction. It runs the stages
// strictly in order, each consuming the previous stage's matrix exactly once:
//
//     load -> greyscale -> detect edges -> clamp -> save
//
// There is no branching, no retry, and no state kept between runs. `PipelineConfig`
// only chooses between the historical and corrected border/sampling behaviour; the
// kernel and luma weights are fixed.

use crate::core_modules::clamper::clamp_intensity;
use crate::core_modules::edge_detector::detect_edges;
use crate::core_modules::greyscale::to_greyscale;
use crate::core_modules::utils::image_helper::image_helper;
use crate::error::Result;
use log::debug;
use std::path::Path;
use std::time::Instant;

// Re-export key data structures for the public API.
pub use crate::core_modules::edge_detector::Sampling;
pub use crate::core_modules::greyscale::Coverage;
pub use crate::core_modules::pixel_matrix::pixel_matrix::{Pixel, PixelMatrix};

/// Output path used when none is given on the command line.
pub const DEFAULT_OUTPUT_PATH: &str = "Edge extracted image.png";

/// Configuration for the edge pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineConfig {
    /// Which pixels the greyscale stage writes.
    pub coverage: Coverage,
    /// How the convolution samples the 3x3 neighbourhood.
    pub sampling: Sampling,
    /// Row-band count for `ParallelEdgePipeline`; `None` means one per CPU.
    pub workers: Option<usize>,
}

/// The synchronous, single-threaded edge pipeline.
#[derive(Debug, Clone, Default)]
pub struct EdgePipeline {
    config: PipelineConfig,
}

impl EdgePipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs greyscale, edge detection and clamping over an in-memory matrix.
    pub fn process(&self, image: &PixelMatrix) -> PixelMatrix {
        let (height, width) = image.dimensions();
        let started = Instant::now();

        // Stage 1: Greyscale
        let grey = to_greyscale(image, self.config.coverage);
        debug!("greyscale {width}x{height} ({:?})", self.config.coverage);

        // Stage 2: Convolution
        let edges = detect_edges(&grey, self.config.sampling);
        debug!("edges ({:?})", self.config.sampling);

        // Stage 3: Clamp
        let clamped = clamp_intensity(edges);
        debug!("pipeline finished in {:?}", started.elapsed());

        clamped
    }

    /// Loads `input`, processes it and writes the result to `output`.
    ///
    /// Nothing is written if loading fails.
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<()> {
        let image = image_helper::load(input)?;
        let edges = self.process(&image);
        image_helper::save(&edges, output)
    }
}
