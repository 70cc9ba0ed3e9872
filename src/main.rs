use anyhow::{Context, Result};
use clap::Parser;
use edge_extract::pipeline::{DEFAULT_OUTPUT_PATH, EdgePipeline};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Highlight the edges of an image with a fixed Laplacian kernel")]
struct Args {
    /// Input image path (png/jpg/etc)
    #[arg(long = "image", value_name = "PATH")]
    image: PathBuf,

    /// Output image path
    #[arg(long = "save", value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    save: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    // Usage errors exit here, before any file is touched.
    let args = Args::parse();
    info!("extracting edges: {} -> {}", args.image.display(), args.save.display());

    EdgePipeline::default()
        .process_file(&args.image, &args.save)
        .with_context(|| format!("Failed to extract edges from {}", args.image.display()))?;

    println!("[+] Processing finished");
    Ok(())
}
