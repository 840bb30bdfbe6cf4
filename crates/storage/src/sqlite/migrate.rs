use sqlx::SqlitePool;

use super::SqliteInitError;

/// Create the snapshot table if it does not exist yet.
pub(crate) async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS snapshots (
            key TEXT PRIMARY KEY,
            payload TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}
