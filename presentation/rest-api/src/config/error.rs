/// Invalid startup configuration. Always fatal.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "config.invalid_environment: NODE_ENV must be one of development, production, test (got `{0}`)"
    )]
    InvalidEnvironment(String),
    #[error("config.invalid_port: PORT must be an integer between 1 and 65535 (got `{0}`)")]
    InvalidPort(String),
    #[error("config.missing_database_url: DATABASE_URL is required when NODE_ENV=production")]
    MissingDatabaseUrl,
    #[error("config.invalid_number: {key} must be a positive integer (got `{value}`)")]
    InvalidNumber { key: &'static str, value: String },
}
