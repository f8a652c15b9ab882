use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MalformedJobError;
use crate::models::canvas::CanvasSpec;
use crate::models::complex::Complex;
use crate::models::fractal::mandelbrot::escape_time;
use crate::models::jobs::tile_result::TileResult;
use crate::models::tile::Tile;

/// One tile-compute request. Fully self-describing: a worker needs
/// nothing beyond these ten fields and holds no state between jobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub max_iterations: u32,
    pub width: u32,
    pub height: u32,
    pub min_re: f64,
    pub max_re: f64,
    pub min_im: f64,
    pub max_im: f64,
    pub tile_edge: u32,
    pub origin_x: u32,
    pub origin_y: u32,
}

impl Job {
    /// Number of positional fields on the wire. The order in `to_path`
    /// is a compatibility contract with every deployed worker; there is
    /// no protocol version to bump.
    pub const FIELD_COUNT: usize = 10;

    pub fn new(spec: &CanvasSpec, tile: Tile) -> Self {
        Self {
            max_iterations: spec.max_iterations,
            width: spec.width,
            height: spec.height,
            min_re: spec.min_re,
            max_re: spec.max_re,
            min_im: spec.min_im,
            max_im: spec.max_im,
            tile_edge: spec.tile_edge,
            origin_x: tile.origin_x,
            origin_y: tile.origin_y,
        }
    }

    /// Real coordinate of pixel column `i`. The `(width - 1)` denominator
    /// maps the last column exactly onto `max_re`.
    pub fn re_at(&self, i: u32) -> f64 {
        f64::from(i) * (self.max_re - self.min_re) / f64::from(self.width - 1) + self.min_re
    }

    /// Imaginary coordinate of pixel row `j`.
    pub fn im_at(&self, j: u32) -> f64 {
        f64::from(j) * (self.max_im - self.min_im) / f64::from(self.height - 1) + self.min_im
    }

    /// Positional request path, `/`-delimited, no field names.
    pub fn to_path(&self) -> String {
        format!(
            "/{}/{}/{}/{}/{}/{}/{}/{}/{}/{}",
            self.max_iterations,
            self.width,
            self.height,
            self.min_re,
            self.max_re,
            self.min_im,
            self.max_im,
            self.tile_edge,
            self.origin_x,
            self.origin_y
        )
    }

    /// Inverse of `to_path`. Rejects paths with too few fields and fields
    /// that do not parse; `max_iterations` must stay within 1..=255 and
    /// the tile edge must be non-zero so a hostile request cannot push
    /// the kernel past its u8 contract.
    pub fn from_path(path: &str) -> Result<Self, MalformedJobError> {
        let fields: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        if fields.len() < Self::FIELD_COUNT {
            return Err(MalformedJobError::MissingFields {
                expected: Self::FIELD_COUNT,
                found: fields.len(),
            });
        }

        let max_iterations: u32 = parse_field("max_iterations", fields[0])?;
        if max_iterations == 0 || max_iterations > 255 {
            return Err(MalformedJobError::InvalidField {
                field: "max_iterations",
                value: fields[0].to_string(),
            });
        }
        let tile_edge: u32 = parse_field("tile_edge", fields[7])?;
        if tile_edge == 0 {
            return Err(MalformedJobError::InvalidField {
                field: "tile_edge",
                value: fields[7].to_string(),
            });
        }

        Ok(Self {
            max_iterations,
            width: parse_field("width", fields[1])?,
            height: parse_field("height", fields[2])?,
            min_re: parse_field("min_re", fields[3])?,
            max_re: parse_field("max_re", fields[4])?,
            min_im: parse_field("min_im", fields[5])?,
            max_im: parse_field("max_im", fields[6])?,
            tile_edge,
            origin_x: parse_field("origin_x", fields[8])?,
            origin_y: parse_field("origin_y", fields[9])?,
        })
    }

    /// Runs the kernel over every pixel of the tile, row-major from the
    /// origin, and inverts the escape time into a display intensity.
    pub fn perform(&self) -> TileResult {
        let edge = self.tile_edge;
        let mut colors = Vec::with_capacity((edge as usize) * (edge as usize));
        for j in self.origin_y..self.origin_y + edge {
            let c_im = self.im_at(j);
            for i in self.origin_x..self.origin_x + edge {
                let c = Complex::new(self.re_at(i), c_im);
                colors.push(255 - escape_time(c, self.max_iterations));
            }
        }
        TileResult::new(self.origin_x, self.origin_y, colors)
    }
}

fn parse_field<T: FromStr>(field: &'static str, raw: &str) -> Result<T, MalformedJobError> {
    raw.parse().map_err(|_| MalformedJobError::InvalidField {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::Job;
    use crate::errors::MalformedJobError;
    use crate::models::canvas::CanvasSpec;
    use crate::models::tile::Tile;

    fn reference_spec() -> CanvasSpec {
        CanvasSpec::new(8, 8, -2.0, 2.0, -2.0, 2.0, 64, 4).unwrap()
    }

    #[test]
    fn path_round_trips_every_field() {
        let job = Job::new(
            &CanvasSpec::new(1024, 768, -1.5, 0.75, -1.125, 1.125, 200, 64).unwrap(),
            Tile::new(128, 704),
        );
        assert_eq!(Job::from_path(&job.to_path()).unwrap(), job);
    }

    #[test]
    fn path_matches_the_wire_layout() {
        let job = Job::new(&reference_spec(), Tile::new(4, 0));
        assert_eq!(job.to_path(), "/64/8/8/-2/2/-2/2/4/4/0");
    }

    #[test]
    fn short_paths_are_rejected() {
        assert!(matches!(
            Job::from_path("/64/8/8/-2"),
            Err(MalformedJobError::MissingFields {
                expected: 10,
                found: 4
            })
        ));
    }

    #[test]
    fn non_numeric_fields_are_rejected() {
        assert!(matches!(
            Job::from_path("/64/8/eight/-2/2/-2/2/4/0/0"),
            Err(MalformedJobError::InvalidField {
                field: "height",
                ..
            })
        ));
    }

    #[test]
    fn iteration_budget_outside_u8_is_rejected() {
        assert!(matches!(
            Job::from_path("/300/8/8/-2/2/-2/2/4/0/0"),
            Err(MalformedJobError::InvalidField {
                field: "max_iterations",
                ..
            })
        ));
        assert!(Job::from_path("/0/8/8/-2/2/-2/2/4/0/0").is_err());
    }

    #[test]
    fn zero_tile_edge_is_rejected() {
        assert!(matches!(
            Job::from_path("/64/8/8/-2/2/-2/2/0/0/0"),
            Err(MalformedJobError::InvalidField {
                field: "tile_edge",
                ..
            })
        ));
    }

    #[test]
    fn plane_mapping_hits_both_bounds_exactly() {
        let job = Job::new(&reference_spec(), Tile::new(0, 0));
        assert_eq!(job.re_at(0), -2.0);
        assert_eq!(job.re_at(7), 2.0);
        assert_eq!(job.im_at(0), -2.0);
        assert_eq!(job.im_at(7), 2.0);
    }

    #[test]
    fn corner_tile_escapes_at_the_corner_pixel() {
        let result = Job::new(&reference_spec(), Tile::new(0, 0)).perform();
        assert_eq!(result.colors.len(), 16);
        // c = -2-2i is already outside the escape radius.
        assert_eq!(result.colors[0], 255);
    }

    #[test]
    fn interior_tile_renders_black_at_the_near_origin_pixel() {
        let result = Job::new(&reference_spec(), Tile::new(4, 4)).perform();
        // Pixel (4,4) maps near the plane origin; its orbit never escapes,
        // so the inverted intensity is 0.
        assert_eq!(result.colors[0], 0);
    }
}
