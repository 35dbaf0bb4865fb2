use crate::error::{AppError, Result};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        match env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub email: EmailConfig,
    pub environment: Environment,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub sender: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid PORT value".to_string()))?,
                max_body_size: env::var("MAX_BODY_SIZE")
                    .unwrap_or_else(|_| "1048576".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid MAX_BODY_SIZE value".to_string()))?,
            },
            database: DatabaseConfig {
                url: env::var("DB_URL")?,
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::ConfigError("Invalid DB_MAX_CONNECTIONS value".to_string())
                    })?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("FRONTEND_URL")?
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .collect(),
            },
            email: EmailConfig {
                sender: env::var("SENDER_EMAIL")?,
            },
            environment: Environment::from_env(),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [(&str, Option<&str>); 3] = [
        ("DB_URL", Some("postgres://postgres@localhost/neokcs")),
        ("FRONTEND_URL", Some("http://localhost:3000")),
        ("SENDER_EMAIL", Some("noreply@neokcs.test")),
    ];

    #[test]
    fn defaults_apply_when_optional_vars_absent() {
        temp_env::with_vars(
            REQUIRED
                .into_iter()
                .chain([
                    ("HOST", None),
                    ("PORT", None),
                    ("MAX_BODY_SIZE", None),
                    ("DB_MAX_CONNECTIONS", None),
                    ("APP_ENV", None),
                ])
                .collect::<Vec<_>>(),
            || {
                let cfg = AppConfig::from_env().unwrap();
                assert_eq!(cfg.server.host, "0.0.0.0");
                assert_eq!(cfg.server.port, 3000);
                assert_eq!(cfg.database.max_connections, 20);
                assert_eq!(cfg.environment, Environment::Development);
                assert_eq!(cfg.server_address(), "0.0.0.0:3000");
            },
        );
    }

    #[test]
    fn missing_database_url_is_an_error() {
        temp_env::with_vars(
            [
                ("DB_URL", None),
                ("FRONTEND_URL", Some("http://localhost:3000")),
                ("SENDER_EMAIL", Some("noreply@neokcs.test")),
            ],
            || {
                assert!(AppConfig::from_env().is_err());
            },
        );
    }

    #[test]
    fn production_environment_and_origin_list_parse() {
        temp_env::with_vars(
            REQUIRED
                .into_iter()
                .chain([
                    ("APP_ENV", Some("production")),
                    ("FRONTEND_URL", Some("https://a.example, https://b.example")),
                ])
                .collect::<Vec<_>>(),
            || {
                let cfg = AppConfig::from_env().unwrap();
                assert_eq!(cfg.environment, Environment::Production);
                assert_eq!(
                    cfg.cors.allowed_origins,
                    vec!["https://a.example", "https://b.example"]
                );
            },
        );
    }
}
