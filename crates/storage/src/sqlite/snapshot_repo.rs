use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{SessionSnapshot, SnapshotRepository, StorageError};

use super::{SNAPSHOT_KEY, SqliteRepository};

#[async_trait]
impl SnapshotRepository for SqliteRepository {
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StorageError> {
        let payload = serde_json::to_string(snapshot)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO snapshots (key, payload)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET
                payload = excluded.payload
            ",
        )
        .bind(SNAPSHOT_KEY)
        .bind(payload)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn load(&self) -> Result<Option<SessionSnapshot>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT payload
            FROM snapshots
            WHERE key = ?1
            ",
        )
        .bind(SNAPSHOT_KEY)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let payload: String = row
            .try_get("payload")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        // An undecodable blob means "no resumable session", never a failure.
        Ok(serde_json::from_str(&payload).ok())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        sqlx::query(
            r"
            DELETE FROM snapshots
            WHERE key = ?1
            ",
        )
        .bind(SNAPSHOT_KEY)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
