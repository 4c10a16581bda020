//! Application Configuration
//!
//! Loads configuration from built-in defaults, optional files and environment
//! variables. Later sources win:
//!
//! 1. defaults below
//! 2. `config/default.toml`, then `config/{RUN_MODE}.toml`
//! 3. `APP__SECTION__KEY` variables (e.g. `APP__SERVER__PORT`)
//! 4. the flat deployment variables (`PORT`, `DB_HOST`, `API_ENDPOINT_PREFIX`, ...)

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// 120 MB
const DEFAULT_JSON_LIMIT: u64 = 120 * 1024 * 1024;
/// 50 MB
const DEFAULT_FORM_LIMIT: u64 = 50 * 1024 * 1024;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// HTTP surface configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Global route prefix, without slashes
    pub prefix: String,
    /// URI versions served in addition to the unversioned routes
    pub versions: Vec<String>,
    pub json_limit: usize,
    pub form_limit: usize,
}

impl ApiConfig {
    /// The route prefix with surrounding slashes removed, falling back to `api`
    #[must_use]
    pub fn normalized_prefix(&self) -> &str {
        match self.prefix.trim_matches('/') {
            "" => "api",
            prefix => prefix,
        }
    }
}

/// Database configuration
#[derive(Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Apply the embedded migrations on startup
    pub synchronize: bool,
    /// Log every SQL statement
    pub logging: bool,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("synchronize", &self.synchronize)
            .field("logging", &self.logging)
            .finish()
    }
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from `.env`, files and the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source is malformed or a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "Failed to read .env file");
            }
        }

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"));

        Self::with_deployment_env(builder, |key| std::env::var(key).ok())?
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults for every key
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a default cannot be stored.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("api.prefix", "api")?
            .set_default("api.versions", vec!["1"])?
            .set_default("api.json_limit", DEFAULT_JSON_LIMIT)?
            .set_default("api.form_limit", DEFAULT_FORM_LIMIT)?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432)?
            .set_default("database.username", "")?
            .set_default("database.password", "")?
            .set_default("database.database", "")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.synchronize", false)?
            .set_default("database.logging", false)
    }

    /// Overlay the flat deployment variables on top of `builder`
    ///
    /// `lookup` resolves a variable name; unset variables leave the key untouched.
    /// `DB_SYNCHRONIZE` and `TYPEORM_LOGGING` are enabled only by the exact value `true`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an override cannot be stored.
    pub fn with_deployment_env<F>(
        builder: ConfigBuilder<DefaultState>,
        lookup: F,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        const STRING_KEYS: [(&str, &str); 7] = [
            ("API_ENDPOINT_PREFIX", "api.prefix"),
            ("PORT", "server.port"),
            ("DB_HOST", "database.host"),
            ("DB_PORT", "database.port"),
            ("DB_USERNAME", "database.username"),
            ("DB_PASSWORD", "database.password"),
            ("DB_DATABASE", "database.database"),
        ];
        const FLAG_KEYS: [(&str, &str); 2] = [
            ("DB_SYNCHRONIZE", "database.synchronize"),
            ("TYPEORM_LOGGING", "database.logging"),
        ];

        let mut builder = builder;
        for (var, key) in STRING_KEYS {
            // An empty prefix falls back to the default rather than mounting at the root
            let value = lookup(var).filter(|v| !(var == "API_ENDPOINT_PREFIX" && v.is_empty()));
            builder = builder.set_override_option(key, value)?;
        }
        for (var, key) in FLAG_KEYS {
            builder = builder.set_override_option(key, lookup(var).map(|v| v == "true"))?;
        }
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_with(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        AppConfig::with_deployment_env(AppConfig::defaults().unwrap(), |key| vars.get(key).cloned())
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = load_with(&[]);

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.api.normalized_prefix(), "api");
        assert_eq!(config.api.versions, vec!["1".to_string()]);
        assert_eq!(config.api.json_limit, 120 * 1024 * 1024);
        assert_eq!(config.api.form_limit, 50 * 1024 * 1024);
        assert_eq!(config.database.port, 5432);
        assert!(!config.database.synchronize);
        assert!(!config.database.logging);
    }

    #[test]
    fn test_deployment_variables_override_defaults() {
        let config = load_with(&[
            ("PORT", "8080"),
            ("API_ENDPOINT_PREFIX", "/backend/"),
            ("DB_HOST", "db.internal"),
            ("DB_USERNAME", "megamind"),
            ("DB_PASSWORD", "s3cret"),
            ("DB_DATABASE", "megamind"),
            ("DB_SYNCHRONIZE", "true"),
            ("TYPEORM_LOGGING", "true"),
        ]);

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.api.normalized_prefix(), "backend");
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.username, "megamind");
        assert_eq!(config.database.password, "s3cret");
        assert_eq!(config.database.database, "megamind");
        assert!(config.database.synchronize);
        assert!(config.database.logging);
    }

    #[test]
    fn test_flags_require_exact_true() {
        let config = load_with(&[("DB_SYNCHRONIZE", "1"), ("TYPEORM_LOGGING", "TRUE")]);

        assert!(!config.database.synchronize);
        assert!(!config.database.logging);
    }

    #[test]
    fn test_empty_prefix_falls_back_to_default() {
        let config = load_with(&[("API_ENDPOINT_PREFIX", "")]);
        assert_eq!(config.api.normalized_prefix(), "api");
    }

    #[test]
    fn test_debug_redacts_database_password() {
        let config = load_with(&[("DB_PASSWORD", "s3cret")]);
        let debug = format!("{:?}", config.database);

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("s3cret"));
    }
}
