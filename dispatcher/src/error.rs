use std::error::Error;
use std::fmt;

use shared::errors::ConfigError;
use shared::networking::error::NetworkingError;

/// Engine-level failure of a render pass.
#[derive(Debug)]
pub enum RenderError {
    Config(ConfigError),
    Transport(NetworkingError),
    Cancelled,
}

pub type RenderResult<T> = Result<T, RenderError>;

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Config(e) => write!(f, "configuration error: {}", e),
            RenderError::Transport(e) => write!(f, "transport error: {}", e),
            RenderError::Cancelled => write!(f, "render cancelled"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RenderError::Config(e) => Some(e),
            RenderError::Transport(e) => Some(e),
            RenderError::Cancelled => None,
        }
    }
}

impl From<ConfigError> for RenderError {
    fn from(e: ConfigError) -> Self {
        RenderError::Config(e)
    }
}

impl From<NetworkingError> for RenderError {
    fn from(e: NetworkingError) -> Self {
        RenderError::Transport(e)
    }
}
