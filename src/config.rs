//! Server configuration parsed from CLI flags and environment variables.

use axum::http::HeaderValue;
use clap::Parser;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Command-line and environment configuration for the task store server.
#[derive(Debug, Clone, Parser)]
#[command(name = "taskstored", version, about = "Task record store over HTTP")]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    #[arg(long, env = "TASKSTORE_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    /// Port the HTTP listener binds to.
    #[arg(long, env = "TASKSTORE_PORT", default_value_t = 8000)]
    pub port: u16,

    /// `PostgreSQL` connection string.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum connections held by the r2d2 pool.
    #[arg(long, env = "TASKSTORE_POOL_SIZE", default_value_t = 10)]
    pub pool_size: u32,

    /// Tracing filter directive, e.g. `info` or `taskstore=debug`.
    #[arg(long, env = "TASKSTORE_LOG", default_value = "info")]
    pub log_filter: String,

    /// Comma-separated allow-list of CORS origins; permissive when empty.
    #[arg(long, env = "TASKSTORE_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Socket address string for the HTTP listener.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// CORS layer honoring the configured origin allow-list.
    ///
    /// An empty allow-list yields a permissive layer suited to local
    /// development; unparseable origins are skipped with a warning.
    #[must_use]
    pub fn cors_layer(&self) -> CorsLayer {
        if self.cors_origins.is_empty() {
            return CorsLayer::permissive();
        }

        let mut origins = Vec::new();
        for origin in &self.cors_origins {
            match origin.parse::<HeaderValue>() {
                Ok(value) => origins.push(value),
                Err(_) => tracing::warn!(origin = %origin, "ignoring unparseable CORS origin"),
            }
        }

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
