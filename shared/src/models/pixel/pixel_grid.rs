use std::path::Path;

use image::{ImageError, Rgb, RgbImage};

/// Single-channel intensity grid, the durable output of a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pub width: u32,
    pub height: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize)],
        }
    }

    /// Writes one intensity. Out-of-range coordinates are dropped rather
    /// than panicking; a repeated write to the same pixel wins.
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        if x < self.width && y < self.height {
            self.data[(y as usize) * (self.width as usize) + (x as usize)] = value;
        }
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    /// Materializes the grid as an RGB image with equal channels.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let value = self.get(x, y);
            Rgb([value, value, value])
        })
    }

    pub fn save_png(&self, path: &Path) -> Result<(), ImageError> {
        self.to_image().save(path)
    }
}
