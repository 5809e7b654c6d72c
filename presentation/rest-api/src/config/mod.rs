pub mod app_config;
pub mod cors_config;
pub mod database_config;
pub mod error;
pub mod runtime_config;
pub mod server_config;

/// Key/value source the configuration is read from.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;
