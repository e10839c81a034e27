//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup and the Axum server lifecycle.

use crate::config::{CacheConfig, Config, DatabaseConfig};
use crate::domain::repositories::{ReferenceDataRepository, TokenRepository, WorkTaskRepository};
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::{
    PgReferenceDataRepository, PgTokenRepository, PgWorkTaskRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Opens the PostgreSQL pool, retrying with exponential backoff while the database
/// is still coming up.
pub async fn connect_database(config: &DatabaseConfig) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime);

    let strategy = ExponentialBackoff::from_millis(2)
        .factor(250)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(5);

    connect_with_retry(options, &config.url, strategy)
        .await
        .context("Failed to connect to database")
}

async fn connect_with_retry<S>(
    options: PgPoolOptions,
    url: &str,
    strategy: S,
) -> Result<PgPool, sqlx::Error>
where
    S: IntoIterator<Item = Duration>,
{
    Retry::start(strategy, || {
        let options = options.clone();
        async move {
            options.connect(url).await.inspect_err(|e| {
                tracing::warn!(error = %e, "Database not reachable yet, retrying");
            })
        }
    })
    .await
}

async fn connect_cache(config: &CacheConfig) -> Arc<dyn CacheService> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    };

    match RedisCache::connect(redis_url, config.ttl_seconds).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
            Arc::new(NullCache::new())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis cache (or NullCache fallback)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = Arc::new(connect_database(&config.database).await?);
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(pool.as_ref())
        .await
        .context("Failed to run migrations")?;

    let cache = connect_cache(&config.cache).await;

    let reference_data: Arc<dyn ReferenceDataRepository> =
        Arc::new(PgReferenceDataRepository::new(pool.clone()));
    let work_tasks: Arc<dyn WorkTaskRepository> = Arc::new(PgWorkTaskRepository::new(pool.clone()));
    let tokens: Arc<dyn TokenRepository> = Arc::new(PgTokenRepository::new(pool));

    let state = AppState::new(
        reference_data,
        work_tasks,
        tokens,
        cache,
        config.token_signing_secret,
        config.cache.ttl_seconds,
        config.service,
    );

    let app = app_router(state, config.server.behind_proxy);

    let addr = config.server.listen_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}
