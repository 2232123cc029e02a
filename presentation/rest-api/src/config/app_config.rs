use persistence::db::DatabaseConfig;

use super::{
    cors_config::CorsConfig, database_config, error::ConfigError, frontend_config::FrontendConfig,
    groq_config::GroqConfig, server_config::ServerConfig,
};

/// Process-wide configuration, resolved once at startup.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub groq: GroqConfig,
    pub frontend: FrontendConfig,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig::from_lookup(lookup)?,
            cors: CorsConfig::from_lookup(lookup),
            groq: GroqConfig::from_lookup(lookup)?,
            frontend: FrontendConfig::from_lookup(lookup),
            database: database_config::from_lookup(lookup),
        })
    }
}
