pub mod assembler;
pub mod engine;
pub mod error;
pub mod partition;

use log::info;
use shared::models::canvas::CanvasSpec;
use shared::models::jobs::job::Job;
use shared::models::pixel::pixel_grid::PixelGrid;
use shared::networking::endpoint::Endpoint;

use crate::engine::DispatchMode;
use crate::error::RenderResult;

/// Full distributed render pass: partition the canvas, fan the tiles out
/// to the workers, reassemble whatever order they come back in.
pub async fn render(
    spec: &CanvasSpec,
    endpoints: &[Endpoint],
    mode: DispatchMode,
) -> RenderResult<PixelGrid> {
    let tiles = partition::partition(spec);
    let results = engine::dispatch_all(spec, &tiles, endpoints, mode).await?;
    info!(
        "Collected {} tile results, assembling the {}x{} canvas",
        results.len(),
        spec.width,
        spec.height
    );
    Ok(assembler::assemble(spec, &results))
}

/// Computes every tile in-process instead of dispatching. Debug path;
/// the distributed modes must produce pixel-identical output.
pub fn render_local(spec: &CanvasSpec) -> PixelGrid {
    let results: Vec<_> = partition::partition(spec)
        .into_iter()
        .map(|tile| Job::new(spec, tile).perform())
        .collect();
    assembler::assemble(spec, &results)
}

#[cfg(test)]
mod tests {
    use super::render_local;
    use shared::models::canvas::CanvasSpec;

    #[test]
    fn local_render_reproduces_the_reference_canvas() {
        let spec = CanvasSpec::new(8, 8, -2.0, 2.0, -2.0, 2.0, 64, 4).unwrap();
        let grid = render_local(&spec);
        // c = -2-2i escapes before the first squaring.
        assert_eq!(grid.get(0, 0), 255);
        // Pixel (4,4) maps near the plane origin and never escapes.
        assert_eq!(grid.get(4, 4), 0);
    }
}
