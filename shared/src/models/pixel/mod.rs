pub mod pixel_grid;
