// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod entries;

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::localdb::entries::Entries;
use crate::{Error, KeyValueStore};

/// SQLite backed key-value store in the application state directory.
#[derive(Debug, Clone)]
pub struct LocalDb {
    pool: SqlitePool,
    entries: Entries,
}

impl LocalDb {
    /// Opens a sqlite database connection.
    /// If `filename` is `None`, it opens an in-memory database.
    pub async fn open(filename: Option<&Path>) -> Result<Self, Error> {
        let (options, pool_options) = if let Some(filename) = filename {
            tracing::info!(path = %filename.display(), "connecting to SQLite database");
            let options = SqliteConnectOptions::new()
                .filename(filename)
                .create_if_missing(true);
            (options, SqlitePoolOptions::new())
        } else {
            tracing::info!("connecting to in-memory SQLite database");
            // every connection to `:memory:` is a separate database, so keep exactly one alive
            let pool_options = SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
            (SqliteConnectOptions::new().in_memory(true), pool_options)
        };

        let pool = pool_options.connect_with(options).await?;

        sqlx::migrate!("src/localdb/migrations") // relative path from the crate root
            .run(&pool)
            .await?;

        tracing::debug!("ensuring tables in the database");
        let entries = Entries::new(pool.clone());
        Ok(LocalDb { pool, entries })
    }

    pub async fn close(self) -> Result<(), Error> {
        tracing::debug!("closing database connection");
        self.pool.close().await;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for LocalDb {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries.get(key).await?)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        Ok(self.entries.upsert(key, value).await?)
    }

    async fn remove(&self, key: &str) -> Result<(), Error> {
        let removed = self.entries.delete(key).await?;
        tracing::debug!(key, removed, "removed entry");
        Ok(())
    }
}
