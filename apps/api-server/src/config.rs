//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

#[cfg(feature = "postgres")]
use blog_infra::DatabaseConfig;
use blog_infra::JwtConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs against the in-memory store.
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    /// Directory post image paths are resolved against.
    pub image_root: PathBuf,
    /// Serve GraphiQL on `GET /graphql`.
    pub graphiql: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            #[cfg(feature = "postgres")]
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            image_root: env::var("IMAGE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            graphiql: env::var("GRAPHIQL")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

#[cfg(test)]
impl AppConfig {
    /// In-memory configuration with a fixed secret.
    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            #[cfg(feature = "postgres")]
            database: None,
            jwt: JwtConfig {
                secret: "test-secret".to_string(),
                ..JwtConfig::default()
            },
            image_root: env::temp_dir(),
            graphiql: true,
        }
    }
}
