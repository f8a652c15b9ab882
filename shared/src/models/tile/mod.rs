use serde::{Deserialize, Serialize};

/// Origin of one square sub-region of the canvas, the unit of work a
/// single worker request computes. The edge length lives on the owning
/// `CanvasSpec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub origin_x: u32,
    pub origin_y: u32,
}

impl Tile {
    pub fn new(origin_x: u32, origin_y: u32) -> Self {
        Self { origin_x, origin_y }
    }
}
