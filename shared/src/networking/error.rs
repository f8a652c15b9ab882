use std::error::Error;
use std::fmt;

use crate::errors::MalformedResultError;

/// Transport-class failure while talking to a worker. The current
/// dispatch policy is fail-fast: any of these aborts the whole render.
#[derive(Debug)]
pub enum NetworkingError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidHttp(String),
    UnexpectedStatus(u16),
    MalformedResponse(MalformedResultError),
}

impl fmt::Display for NetworkingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkingError::Io(e) => write!(f, "I/O error: {}", e),
            NetworkingError::Json(e) => write!(f, "JSON error: {}", e),
            NetworkingError::InvalidHttp(reason) => {
                write!(f, "invalid HTTP response: {}", reason)
            }
            NetworkingError::UnexpectedStatus(status) => {
                write!(f, "worker answered with status {}", status)
            }
            NetworkingError::MalformedResponse(e) => {
                write!(f, "malformed tile result: {}", e)
            }
        }
    }
}

impl Error for NetworkingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NetworkingError::Io(e) => Some(e),
            NetworkingError::Json(e) => Some(e),
            NetworkingError::MalformedResponse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NetworkingError {
    fn from(e: std::io::Error) -> Self {
        NetworkingError::Io(e)
    }
}

impl From<serde_json::Error> for NetworkingError {
    fn from(e: serde_json::Error) -> Self {
        NetworkingError::Json(e)
    }
}

impl From<MalformedResultError> for NetworkingError {
    fn from(e: MalformedResultError) -> Self {
        NetworkingError::MalformedResponse(e)
    }
}
