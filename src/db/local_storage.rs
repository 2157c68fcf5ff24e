//! Key/value operations over the `local_storage` table.

use chrono::Utc;
use serde::Serialize;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;

/// Storage key of the user bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Storage key of the organization bearer token.
pub const AUTH_ONG_TOKEN_KEY: &str = "authOngToken";
/// Storage key of the last fetched user profile.
pub const USER_DATA_KEY: &str = "userData";
/// Storage key of the last fetched organization profile.
pub const ONG_DATA_KEY: &str = "ongData";

/// Handle to durable storage. Cheap to clone.
#[derive(Clone)]
pub struct LocalStorage {
    pool: SqlitePool,
}

impl LocalStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Read a raw string entry.
    pub async fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let row = sqlx::query("SELECT value FROM local_storage WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get("value")))
    }

    /// Insert or replace a raw string entry.
    pub async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO local_storage (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Delete an entry. Deleting a missing key is not an error.
    pub async fn remove_item(&self, key: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM local_storage WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Read a JSON entry. An entry that no longer parses reads as absent.
    #[cfg(test)]
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, AppError> {
        let Some(raw) = self.get_item(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Ignoring unreadable storage entry {}: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Write a value as JSON.
    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let raw = serde_json::to_string(value)?;
        self.set_item(key, &raw).await
    }
}
