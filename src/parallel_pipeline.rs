// THEORY:
// `ParallelEdgePipeline` runs the same three stages as `EdgePipeline`, but splits each
// stage into horizontal row bands and runs the bands on tokio's blocking pool.
//
// Why this is safe to do without changing a single bit of output:
// 1.  Every output pixel depends only on a small neighbourhood of the stage's input,
//     never on other output pixels, so rows can be computed in any order.
// 2.  Bands call exactly the same per-row functions (`greyscale_row`, `convolve_row`,
//     `clamp_row`) as the sequential driver, so the floating-point operations and
//     their order are identical per pixel.
// 3.  Stages are separated by a barrier: all bands of one stage are joined before the
//     next stage starts, and a stage's input is shared read-only through an `Arc`.

use crate::core_modules::clamper::clamp_row;
use crate::core_modules::edge_detector::convolve_row;
use crate::core_modules::greyscale::greyscale_row;
use crate::core_modules::utils::image_helper::image_helper;
use crate::error::{EdgeError, Result};
use crate::pipeline::{Pixel, PipelineConfig, PixelMatrix};
use futures::future::try_join_all;
use log::debug;
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// A per-row stage operation: reads the shared input matrix and fills one output row.
type RowOp = dyn Fn(&PixelMatrix, usize, &mut [Pixel]) + Send + Sync;

pub struct ParallelEdgePipeline {
    config: PipelineConfig,
    workers: usize,
}

impl ParallelEdgePipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let workers = config.workers.unwrap_or_else(num_cpus::get).max(1);
        Self { config, workers }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Number of row bands each stage is split into (at most).
    pub fn workers(&self) -> usize {
        self.workers
    }

    pub async fn process(&self, image: PixelMatrix) -> Result<PixelMatrix> {
        let started = Instant::now();
        let PipelineConfig {
            coverage, sampling, ..
        } = self.config;

        let grey = self
            .run_stage(
                Arc::new(image),
                Arc::new(move |src: &PixelMatrix, row: usize, out: &mut [Pixel]| {
                    greyscale_row(src, row, coverage, out)
                }),
            )
            .await?;

        let edges = self
            .run_stage(
                Arc::new(grey),
                Arc::new(move |src: &PixelMatrix, row: usize, out: &mut [Pixel]| {
                    convolve_row(src, row, sampling, out)
                }),
            )
            .await?;

        let clamped = self
            .run_stage(
                Arc::new(edges),
                Arc::new(|src: &PixelMatrix, row: usize, out: &mut [Pixel]| {
                    out.copy_from_slice(src.row(row));
                    clamp_row(out);
                }),
            )
            .await?;

        debug!(
            "parallel pipeline finished in {:?} ({} workers)",
            started.elapsed(),
            self.workers
        );
        Ok(clamped)
    }

    /// Async counterpart of `EdgePipeline::process_file`; decoding and encoding run on
    /// the blocking pool.
    pub async fn process_file(&self, input: &Path, output: &Path) -> Result<()> {
        let input = input.to_path_buf();
        let image = tokio::task::spawn_blocking(move || image_helper::load(&input))
            .await
            .map_err(|e| EdgeError::Worker(e.to_string()))??;

        let edges = self.process(image).await?;

        let output = output.to_path_buf();
        tokio::task::spawn_blocking(move || image_helper::save(&edges, &output))
            .await
            .map_err(|e| EdgeError::Worker(e.to_string()))?
    }

    async fn run_stage(&self, source: Arc<PixelMatrix>, row_op: Arc<RowOp>) -> Result<PixelMatrix> {
        let (height, width) = source.dimensions();

        let tasks = row_bands(height, self.workers).into_iter().map(|band| {
            let source = Arc::clone(&source);
            let row_op = Arc::clone(&row_op);
            tokio::task::spawn_blocking(move || {
                let mut pixels = vec![Pixel::BLACK; band.len() * width];
                for (row, out) in band.zip(pixels.chunks_mut(width.max(1))) {
                    row_op(&source, row, out);
                }
                pixels
            })
        });

        let bands = try_join_all(tasks)
            .await
            .map_err(|e| EdgeError::Worker(e.to_string()))?;
        PixelMatrix::from_pixels(height, width, bands.concat())
    }
}

/// Splits `0..height` into at most `workers` contiguous, ordered bands.
fn row_bands(height: usize, workers: usize) -> Vec<Range<usize>> {
    if height == 0 {
        return Vec::new();
    }
    let band = height.div_ceil(workers.clamp(1, height));
    (0..height)
        .step_by(band)
        .map(|start| start..(start + band).min(height))
        .collect()
}
