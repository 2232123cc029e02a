use super::{error::ConfigError, read_var};

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - HOST: IP address to bind (default: "0.0.0.0")
    /// - PORT: Port to bind (default: 5000)
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = read_var(lookup, "HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match read_var(lookup, "PORT") {
            Some(value) => match value.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => return Err(ConfigError::Invalid { name: "PORT", value }),
            },
            None => 5000,
        };

        Ok(Self { host, port })
    }

    /// Get the bind address as "host:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
