use std::time::Duration;

use persistence::connection::ConnectionManager;
use persistence::db::DatabaseConfig;

use super::Lookup;
use super::error::ConfigError;
use super::runtime_config::RuntimeProfile;

/// Build the pool configuration, if the runtime profile has a database URL.
///
/// Variables:
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 10)
/// - DATABASE_QUERY_TIMEOUT_SECS: per-statement deadline (default: 5)
pub fn from_lookup(
    runtime: &RuntimeProfile,
    lookup: Lookup<'_>,
) -> Result<Option<DatabaseConfig>, ConfigError> {
    let Some(url) = runtime.database_url() else {
        return Ok(None);
    };

    let mut config = DatabaseConfig::new(url.to_string());
    if let Some(max) = positive_number(lookup, "DATABASE_MAX_CONNECTIONS")? {
        config = config.with_max_connections(max);
    }
    if let Some(secs) = positive_number(lookup, "DATABASE_QUERY_TIMEOUT_SECS")? {
        config = config.with_query_timeout(Duration::from_secs(u64::from(secs)));
    }
    Ok(Some(config))
}

fn positive_number(lookup: Lookup<'_>, key: &'static str) -> Result<Option<u32>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => Err(ConfigError::InvalidNumber { key, value: raw }),
    }
}

/// Initialize the connection manager. Opens no connection.
///
/// # Errors
/// Returns error if the configured URL cannot be parsed
pub fn init_database(
    connections: &ConnectionManager,
    config: Option<&DatabaseConfig>,
) -> anyhow::Result<()> {
    if config.is_none() {
        tracing::warn!("DATABASE_URL not set, running without a database");
    }
    connections.initialize(config)?;
    Ok(())
}
