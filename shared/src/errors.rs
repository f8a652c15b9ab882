use std::error::Error;
use std::fmt;

/// Rejected render configuration. Fatal before any tile is dispatched.
#[derive(Debug)]
pub enum ConfigError {
    ZeroDimension,
    ZeroTileEdge,
    MaxIterationsOutOfRange(u32),
    NotTileable {
        width: u32,
        height: u32,
        tile_edge: u32,
    },
    NoEndpoints,
    InvalidEndpoint(String),
    UnknownDispatchMode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDimension => write!(f, "canvas dimensions must be positive"),
            ConfigError::ZeroTileEdge => write!(f, "tile edge must be positive"),
            ConfigError::MaxIterationsOutOfRange(value) => {
                write!(f, "max iterations must be within 1..=255, got {}", value)
            }
            ConfigError::NotTileable {
                width,
                height,
                tile_edge,
            } => write!(
                f,
                "tile edge {} does not evenly divide the {}x{} canvas",
                tile_edge, width, height
            ),
            ConfigError::NoEndpoints => write!(f, "no worker endpoints configured"),
            ConfigError::InvalidEndpoint(raw) => {
                write!(f, "invalid endpoint address: {:?}, expected host:port", raw)
            }
            ConfigError::UnknownDispatchMode(raw) => {
                write!(f, "unknown dispatch mode: {:?}", raw)
            }
        }
    }
}

impl Error for ConfigError {}

/// A job request the worker cannot decode. Fails that request only, the
/// service keeps accepting subsequent ones.
#[derive(Debug)]
pub enum MalformedJobError {
    MissingFields { expected: usize, found: usize },
    InvalidField { field: &'static str, value: String },
}

impl fmt::Display for MalformedJobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedJobError::MissingFields { expected, found } => {
                write!(f, "job request has {} fields, expected {}", found, expected)
            }
            MalformedJobError::InvalidField { field, value } => {
                write!(f, "invalid value for {}: {:?}", field, value)
            }
        }
    }
}

impl Error for MalformedJobError {}

/// A tile result payload the dispatcher cannot decode.
#[derive(Debug)]
pub enum MalformedResultError {
    Json(serde_json::Error),
    MissingOrigin { found: usize },
    ColorOutOfRange { index: usize, value: u32 },
}

impl fmt::Display for MalformedResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedResultError::Json(e) => {
                write!(f, "tile result is not a JSON number array: {}", e)
            }
            MalformedResultError::MissingOrigin { found } => {
                write!(f, "tile result has {} values, the tile origin needs 2", found)
            }
            MalformedResultError::ColorOutOfRange { index, value } => {
                write!(f, "color {} is out of the u8 range: {}", index, value)
            }
        }
    }
}

impl Error for MalformedResultError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MalformedResultError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MalformedResultError {
    fn from(e: serde_json::Error) -> Self {
        MalformedResultError::Json(e)
    }
}
