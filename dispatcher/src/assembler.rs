use shared::models::canvas::CanvasSpec;
use shared::models::jobs::tile_result::TileResult;
use shared::models::pixel::pixel_grid::PixelGrid;

/// Merges tile results into the final grid. Order-independent: every
/// color is placed by the origin its tile carries, so pooled dispatch
/// can hand results over in whatever order they completed. Coverage is
/// the caller's contract; duplicate writes are last-write-wins.
pub fn assemble(spec: &CanvasSpec, results: &[TileResult]) -> PixelGrid {
    let mut grid = PixelGrid::new(spec.width, spec.height);
    let edge = spec.tile_edge;
    for result in results {
        for (k, &color) in result.colors.iter().enumerate() {
            let x = result.origin_x + k as u32 % edge;
            let y = result.origin_y + k as u32 / edge;
            grid.set(x, y, color);
        }
    }
    grid
}
