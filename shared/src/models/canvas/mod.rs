use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Immutable description of one render pass: canvas size in pixels, the
/// complex-plane window it maps onto, the iteration budget and the edge
/// length of the square tiles the canvas is split into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
    pub min_re: f64,
    pub max_re: f64,
    pub min_im: f64,
    pub max_im: f64,
    pub max_iterations: u32,
    pub tile_edge: u32,
}

impl CanvasSpec {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        width: u32,
        height: u32,
        min_re: f64,
        max_re: f64,
        min_im: f64,
        max_im: f64,
        max_iterations: u32,
        tile_edge: u32,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if tile_edge == 0 {
            return Err(ConfigError::ZeroTileEdge);
        }
        if max_iterations == 0 || max_iterations > 255 {
            return Err(ConfigError::MaxIterationsOutOfRange(max_iterations));
        }
        if width % tile_edge != 0 || height % tile_edge != 0 {
            return Err(ConfigError::NotTileable {
                width,
                height,
                tile_edge,
            });
        }

        Ok(Self {
            width,
            height,
            min_re,
            max_re,
            min_im,
            max_im,
            max_iterations,
            tile_edge,
        })
    }

    pub fn tile_count(&self) -> usize {
        ((self.width / self.tile_edge) as usize) * ((self.height / self.tile_edge) as usize)
    }
}
