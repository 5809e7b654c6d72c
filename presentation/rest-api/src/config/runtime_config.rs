use business::domain::environment::Environment;

use super::Lookup;
use super::error::ConfigError;

/// Environment-dependent shape of the configuration, fixed at load time.
///
/// Production cannot exist without a database URL; every other environment may
/// run without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeProfile {
    Production {
        database_url: String,
    },
    NonProduction {
        environment: Environment,
        database_url: Option<String>,
    },
}

impl RuntimeProfile {
    /// Reads `NODE_ENV` and `DATABASE_URL`. An empty URL counts as absent.
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let environment = match lookup("NODE_ENV") {
            None => Environment::default(),
            Some(raw) => raw
                .parse::<Environment>()
                .map_err(|_| ConfigError::InvalidEnvironment(raw))?,
        };
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        match (environment, database_url) {
            (Environment::Production, Some(database_url)) => {
                Ok(RuntimeProfile::Production { database_url })
            }
            (Environment::Production, None) => Err(ConfigError::MissingDatabaseUrl),
            (environment, database_url) => Ok(RuntimeProfile::NonProduction {
                environment,
                database_url,
            }),
        }
    }

    pub fn environment(&self) -> Environment {
        match self {
            RuntimeProfile::Production { .. } => Environment::Production,
            RuntimeProfile::NonProduction { environment, .. } => *environment,
        }
    }

    pub fn database_url(&self) -> Option<&str> {
        match self {
            RuntimeProfile::Production { database_url } => Some(database_url),
            RuntimeProfile::NonProduction { database_url, .. } => database_url.as_deref(),
        }
    }
}

/// Loose boolean: `true`, `1`, `yes` and `on` (any case) are true, anything else false.
pub fn parse_flag(value: Option<String>) -> bool {
    value.is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "on"
        )
    })
}
