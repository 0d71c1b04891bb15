// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

/// Accessor for the `entries` key-value table.
#[derive(Debug, Clone)]
pub struct Entries {
    pool: SqlitePool,
}

impl Entries {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, sqlx::Error> {
        const SQL: &str = "SELECT value FROM entries WHERE key = ?;";

        let row: Option<(String,)> = sqlx::query_as(SQL)
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(value,)| value))
    }

    pub async fn upsert(&self, key: &str, value: &str) -> Result<(), sqlx::Error> {
        const SQL: &str = "\
INSERT INTO entries (key, value)
VALUES (?, ?)
ON CONFLICT(key) DO UPDATE SET
    value = excluded.value;
";

        sqlx::query(SQL)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, key: &str) -> Result<bool, sqlx::Error> {
        const SQL: &str = "DELETE FROM entries WHERE key = ?;";

        let result = sqlx::query(SQL).bind(key).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
