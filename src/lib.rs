// THEORY:
// This file is the main entry point for the `edge_extract` library crate. It exposes
// the edge pipeline as a small, high-level API:
//
// - `pipeline::EdgePipeline`: the synchronous driver (load, greyscale, edges, clamp, save).
// - `parallel_pipeline::ParallelEdgePipeline`: the same stages split into row bands
//   on tokio's blocking pool, bit-identical to the synchronous driver.
//
// The stages themselves live in `core_modules` and are plain functions over a
// `PixelMatrix`, so each one can be tested in isolation.

pub mod core_modules;
pub mod error;
pub mod parallel_pipeline;
pub mod pipeline;

pub use error::{EdgeError, Result};
