use std::env;

use persistence::db::DatabaseConfig;

use super::error::ConfigError;
use super::runtime_config::{RuntimeProfile, parse_flag};
use super::server_config::ServerConfig;
use super::{Lookup, cors_config, database_config};

/// Process-wide configuration, loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub runtime: RuntimeProfile,
    pub database: Option<DatabaseConfig>,
    /// Parsed from AUTH_ENABLED. No route enforces authentication yet.
    pub auth_enabled: bool,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let runtime = RuntimeProfile::from_lookup(lookup)?;
        let database = database_config::from_lookup(&runtime, lookup)?;
        Ok(Self {
            server: ServerConfig::from_lookup(lookup)?,
            runtime,
            database,
            auth_enabled: parse_flag(lookup("AUTH_ENABLED")),
            cors_origins: cors_config::parse_origins(lookup("CORS_ALLOWED_ORIGINS")),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use business::domain::environment::Environment;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(&|key| vars.get(key).cloned())
    }

    #[test]
    fn should_load_defaults_from_empty_environment() {
        let config = load(&[]).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.runtime.environment(), Environment::Development);
        assert!(config.database.is_none());
        assert!(!config.auth_enabled);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn should_load_full_production_configuration() {
        let config = load(&[
            ("NODE_ENV", "production"),
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://db/users"),
            ("AUTH_ENABLED", "true"),
        ])
        .unwrap();

        assert_eq!(config.runtime.environment(), Environment::Production);
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.database.map(|db| db.connection_string),
            Some("postgres://db/users".to_string())
        );
        assert!(config.auth_enabled);
    }

    #[test]
    fn should_fail_fast_on_invalid_port() {
        let result = load(&[("PORT", "not-a-port")]);

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidPort("not-a-port".to_string())
        );
    }

    #[test]
    fn should_fail_fast_when_production_lacks_database() {
        let result = load(&[("NODE_ENV", "production"), ("PORT", "8080")]);

        assert_eq!(result.unwrap_err(), ConfigError::MissingDatabaseUrl);
    }
}
