use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Address of one worker, supplied by configuration and read-only for
/// the duration of a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub address: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(address: String, port: u16) -> Self {
        Self { address, port }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}

impl FromStr for Endpoint {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidEndpoint(raw.to_string());
        let (address, port) = raw.rsplit_once(':').ok_or_else(invalid)?;
        if address.is_empty() {
            return Err(invalid());
        }
        let port = port.parse().map_err(|_| invalid())?;
        Ok(Self::new(address.to_string(), port))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Endpoint;
    use crate::errors::ConfigError;

    #[test]
    fn parses_host_and_port() {
        let endpoint = Endpoint::from_str("127.0.0.1:8787").unwrap();
        assert_eq!(endpoint, Endpoint::new("127.0.0.1".to_string(), 8787));
        assert_eq!(endpoint.to_string(), "127.0.0.1:8787");
    }

    #[test]
    fn rejects_missing_or_bad_ports() {
        assert!(matches!(
            Endpoint::from_str("localhost"),
            Err(ConfigError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            Endpoint::from_str("localhost:http"),
            Err(ConfigError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            Endpoint::from_str(":8080"),
            Err(ConfigError::InvalidEndpoint(_))
        ));
    }
}
