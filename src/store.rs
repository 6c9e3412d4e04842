use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database query failed: {0}")]
    QueryFailed(#[from] sqlx::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub address: String,
}

/// Point lookup and bulk clear over persisted url records.
///
/// An absent id is an expected outcome and surfaces as `Ok(None)`, never as
/// an error. Record creation is not part of the HTTP surface; the concrete
/// stores expose `insert` for seeding only.
#[async_trait]
pub trait UrlStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, StoreError>;
    async fn clear(&self) -> Result<(), StoreError>;
}

pub struct SqliteUrlStore {
    pool: SqlitePool,
}

impl SqliteUrlStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn init_tables(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS urls (
                id INTEGER PRIMARY KEY,
                address TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Seeds a record; ids are assigned by the caller.
    pub async fn insert(&self, record: &UrlRecord) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO urls (id, address) VALUES ($1, $2)")
            .bind(record.id)
            .bind(&record.address)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UrlStore for SqliteUrlStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, StoreError> {
        let record = sqlx::query_as::<_, UrlRecord>("SELECT id, address FROM urls WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM urls").execute(&self.pool).await?;
        Ok(())
    }
}

// In-memory store for tests, matching the sqlite semantics.
pub struct MemoryUrlStore {
    records: tokio::sync::RwLock<HashMap<i64, UrlRecord>>,
}

impl MemoryUrlStore {
    pub fn new() -> Self {
        Self {
            records: tokio::sync::RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, record: UrlRecord) {
        self.records.write().await.insert(record.id, record);
    }
}

impl Default for MemoryUrlStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlStore for MemoryUrlStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, StoreError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.records.write().await.clear();
        Ok(())
    }
}
