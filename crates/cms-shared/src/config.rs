//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::constants::*;
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub storage: StorageSettings,
    pub upstream: UpstreamSettings,
    pub admin: AdminSettings,
    pub uploads: UploadSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub admin_static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub run_migrations: bool,
}

/// Where pages and menus live. Slides, news and calculator configs always
/// use the process-local store; branches, team, stats and about sections
/// always go through the upstream backend.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    pub seed_demo_data: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdminSettings {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadSettings {
    pub dir: String,
    pub public_path: String,
    pub max_size_mb: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    /// `json` or `pretty`
    pub format: String,
    pub directory: Option<String>,
}

impl AppConfig {
    /// Defaults, then `config/default`, then `config/{APP_ENV}`, then
    /// environment variables such as `ADMIN__PASSWORD`.
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .set_override("app.env", env.clone())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Builds a configuration from defaults plus an inline TOML document.
    pub fn from_toml(toml: &str) -> Result<Self, AppError> {
        let config = Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", DEFAULT_HOST)?
            .set_default("app.port", DEFAULT_PORT)?
            .set_default("app.name", "cms-server")?
            .set_default("app.admin_static_dir", DEFAULT_ADMIN_STATIC_DIR)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_seconds", 3)?
            .set_default("database.run_migrations", true)?
            .set_default("storage.backend", "memory")?
            .set_default("storage.seed_demo_data", true)?
            .set_default("upstream.base_url", "http://127.0.0.1:5000/api")?
            .set_default("upstream.timeout_seconds", DEFAULT_UPSTREAM_TIMEOUT_SECS)?
            .set_default("admin.username", "")?
            .set_default("admin.password", "")?
            .set_default("uploads.dir", DEFAULT_UPLOAD_DIR)?
            .set_default("uploads.public_path", DEFAULT_UPLOAD_PUBLIC_PATH)?
            .set_default("uploads.max_size_mb", DEFAULT_UPLOAD_MAX_MB)?
            .set_default("log.format", "json")
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.admin.username.trim().is_empty() || self.admin.password.is_empty() {
            return Err(AppError::InvalidConfig(
                "admin.username and admin.password must be set".to_string(),
            ));
        }
        if self.storage.backend == StorageBackend::Postgres && self.database.url.is_none() {
            return Err(AppError::InvalidConfig(
                "storage.backend = postgres requires database.url".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_with_credentials() {
        let config = AppConfig::from_toml(
            r#"
            [admin]
            username = "admin"
            password = "secret"
            "#,
        )
        .unwrap();

        assert_eq!(config.app.port, DEFAULT_PORT);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.database.url.is_none());
        assert_eq!(config.uploads.public_path, "/uploads");
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let result = AppConfig::from_toml("");
        assert!(matches!(result, Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn test_postgres_requires_url() {
        let result = AppConfig::from_toml(
            r#"
            [admin]
            username = "admin"
            password = "secret"

            [storage]
            backend = "postgres"
            "#,
        );
        assert!(matches!(result, Err(AppError::InvalidConfig(_))));
    }
}
