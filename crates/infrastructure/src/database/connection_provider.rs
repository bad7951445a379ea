use crate::config::StoreConfig;
use crate::database::schema;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Sqlite, SqlitePool};
use tracing::info;

/// Source of database connections for the device store.
///
/// A connection handed out by `acquire` is released when it is dropped, so a
/// store that keeps it in a local releases it on every exit path.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    async fn acquire(&self) -> Result<PoolConnection<Sqlite>, sqlx::Error>;
}

#[derive(Clone)]
pub struct SqliteConnectionProvider {
    pool: SqlitePool,
}

impl SqliteConnectionProvider {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            // An in-memory database lives only as long as its connection
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(&config.database_url)
            .await?;

        if config.create_schema {
            schema::ensure_device_table(&pool).await?;
        }

        info!(
            url = %config.database_url,
            max_connections = config.max_connections,
            "Device store connected"
        );
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ConnectionProvider for SqliteConnectionProvider {
    async fn acquire(&self) -> Result<PoolConnection<Sqlite>, sqlx::Error> {
        self.pool.acquire().await
    }
}
