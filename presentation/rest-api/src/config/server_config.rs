use super::Lookup;
use super::error::ConfigError;

const DEFAULT_PORT: u16 = 3000;

/// Server configuration for HTTP listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration
    ///
    /// Variables:
    /// - HOST: IP address to bind (default: "0.0.0.0")
    /// - PORT: Port to bind (default: 3000, must be 1..=65535)
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let ip = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
        };

        Ok(Self { ip, port })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
