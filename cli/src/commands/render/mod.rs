use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use dispatcher::engine::DispatchMode;
use dispatcher::{render, render_local};
use log::info;
use shared::models::canvas::CanvasSpec;
use shared::networking::endpoint::Endpoint;

#[derive(Parser, Debug)]
pub struct RenderCommand {
    /// Canvas width in pixels. Defaults to 1024.
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels. Defaults to 1024.
    #[arg(long)]
    pub height: Option<u32>,

    /// Edge length of the square tiles; must evenly divide both canvas
    /// dimensions. Defaults to 64.
    #[arg(long)]
    pub tile_edge: Option<u32>,

    /// Iteration budget per pixel, at most 255. Defaults to 64.
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Left edge of the complex-plane window. Defaults to -2.
    #[arg(long)]
    pub min_re: Option<f64>,

    /// Right edge of the complex-plane window. Defaults to 2.
    #[arg(long)]
    pub max_re: Option<f64>,

    /// Bottom edge of the complex-plane window. Defaults to -2.
    #[arg(long)]
    pub min_im: Option<f64>,

    /// Top edge of the complex-plane window. Defaults to 2.
    #[arg(long)]
    pub max_im: Option<f64>,

    /// Worker endpoint as host:port. Repeat once per worker.
    #[arg(short, long = "endpoint")]
    pub endpoints: Vec<String>,

    /// Dispatch mode: sequential or pooled. Defaults to pooled.
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Compute every tile in-process instead of dispatching.
    #[arg(long)]
    pub local: bool,

    /// Where to write the PNG. Defaults to mandelbrot.png.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub async fn run(args: RenderCommand) -> Result<(), Box<dyn std::error::Error>> {
    let spec = CanvasSpec::new(
        args.width.unwrap_or(1024),
        args.height.unwrap_or(1024),
        args.min_re.unwrap_or(-2.0),
        args.max_re.unwrap_or(2.0),
        args.min_im.unwrap_or(-2.0),
        args.max_im.unwrap_or(2.0),
        args.max_iterations.unwrap_or(64),
        args.tile_edge.unwrap_or(64),
    )?;

    let started = Instant::now();
    let grid = if args.local {
        render_local(&spec)
    } else {
        let endpoints = args
            .endpoints
            .iter()
            .map(|raw| raw.parse::<Endpoint>())
            .collect::<Result<Vec<_>, _>>()?;
        let mode = match &args.mode {
            Some(raw) => raw.parse::<DispatchMode>()?,
            None => DispatchMode::Pooled,
        };
        render(&spec, &endpoints, mode).await?
    };
    info!("Render finished in {:.2?}", started.elapsed());

    let output = args.output.unwrap_or_else(|| PathBuf::from("mandelbrot.png"));
    grid.save_png(&output)?;
    info!("Image written to {}", output.display());

    Ok(())
}
