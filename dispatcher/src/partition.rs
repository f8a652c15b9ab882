use shared::models::canvas::CanvasSpec;
use shared::models::tile::Tile;

/// Tile origins covering the canvas exactly once, in the scan order the
/// round-robin assignment indexes into: outer loop over x, inner over y.
pub fn partition(spec: &CanvasSpec) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(spec.tile_count());
    for x in (0..spec.width).step_by(spec.tile_edge as usize) {
        for y in (0..spec.height).step_by(spec.tile_edge as usize) {
            tiles.push(Tile::new(x, y));
        }
    }
    tiles
}
