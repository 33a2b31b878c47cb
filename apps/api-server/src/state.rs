//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::BlogService;
use blog_core::ports::{PostRepository, UserRepository};
use blog_infra::{
    Argon2PasswordService, InMemoryPostRepository, InMemoryUserRepository, JwtTokenService,
    LocalImageStore,
};

#[cfg(feature = "postgres")]
use blog_infra::{PostgresPostRepository, PostgresUserRepository, database::connect};

use crate::config::AppConfig;
use crate::graphql::{Schema, create_schema};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: BlogService,
    pub schema: Arc<Schema>,
    pub graphiql: bool,
}

type Repositories = (Arc<dyn UserRepository>, Arc<dyn PostRepository>);

fn in_memory() -> Repositories {
    (
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryPostRepository::new()),
    )
}

impl AppState {
    /// Build the application state, falling back to in-memory repositories
    /// when no database is configured or reachable.
    pub async fn new(config: &AppConfig) -> Self {
        let repositories = Self::repositories(config).await;
        let state = Self::with_repositories(config, repositories);

        tracing::info!("Application state initialized");
        state
    }

    /// State backed by fresh in-memory repositories.
    pub fn in_memory(config: &AppConfig) -> Self {
        Self::with_repositories(config, in_memory())
    }

    fn with_repositories(config: &AppConfig, (users, posts): Repositories) -> Self {
        let service = BlogService::new(
            users,
            posts,
            Arc::new(JwtTokenService::new(config.jwt.clone())),
            Arc::new(Argon2PasswordService::new()),
            Arc::new(LocalImageStore::new(&config.image_root)),
        );

        Self {
            service,
            schema: Arc::new(create_schema()),
            graphiql: config.graphiql,
        }
    }

    #[cfg(feature = "postgres")]
    async fn repositories(config: &AppConfig) -> Repositories {
        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return in_memory();
        };

        match connect(db_config).await {
            Ok(conn) => (
                Arc::new(PostgresUserRepository::new(conn.clone())),
                Arc::new(PostgresPostRepository::new(conn)),
            ),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                in_memory()
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn repositories(_config: &AppConfig) -> Repositories {
        tracing::info!("Running without postgres feature - using in-memory repositories");
        in_memory()
    }
}
