use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use bagdar_core::model::{Phase, QuizSession, Recommendation, SessionError};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of a quiz session.
///
/// This is the exact JSON object kept under the snapshot key, camelCase to
/// stay readable as a single self-describing blob. A corrupt blob is never
/// an error at load time; it simply means no resumable session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub step: Phase,
    pub current_question: usize,
    pub answers: Vec<String>,
    pub nickname: Option<String>,
    pub result: Option<Recommendation>,
    pub submitted: bool,
}

impl SessionSnapshot {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        Self {
            step: session.phase(),
            current_question: session.current_question(),
            answers: session.answers().to_vec(),
            nickname: session.nickname().map(ToOwned::to_owned),
            result: session.result().cloned(),
            submitted: session.submitted(),
        }
    }

    /// Rebuild a domain session from the snapshot, verbatim.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when the stored fields no longer describe a
    /// valid session for the given question count.
    pub fn into_session(self, question_count: usize) -> Result<QuizSession, SessionError> {
        QuizSession::from_persisted(
            question_count,
            self.step,
            self.current_question,
            self.answers,
            self.nickname,
            self.result,
            self.submitted,
        )
    }

    /// Whether the snapshot is worth offering as a resume target.
    #[must_use]
    pub fn is_resumable(&self) -> bool {
        !self.answers.is_empty()
    }
}

/// The single durable key-value cell holding the session snapshot.
/// Last-write-wins; a single writer and a single reader by design.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Persist the snapshot, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be stored.
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StorageError>;

    /// Load the stored snapshot.
    ///
    /// Returns `Ok(None)` both when nothing is stored and when the stored
    /// payload cannot be decoded.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only for backend failures, never for a
    /// corrupt payload.
    async fn load(&self) -> Result<Option<SessionSnapshot>, StorageError>;

    /// Delete the stored snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete cannot be executed.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Keeps the raw JSON payload so tests can also exercise the corrupt-blob
/// path via [`InMemoryRepository::seed_raw`].
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    payload: Arc<Mutex<Option<String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an arbitrary payload string, bypassing serialization.
    pub fn seed_raw(&self, payload: impl Into<String>) {
        if let Ok(mut guard) = self.payload.lock() {
            *guard = Some(payload.into());
        }
    }
}

#[async_trait]
impl SnapshotRepository for InMemoryRepository {
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StorageError> {
        let json = serde_json::to_string(snapshot)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let mut guard = self
            .payload
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(json);
        Ok(())
    }

    async fn load(&self) -> Result<Option<SessionSnapshot>, StorageError> {
        let guard = self
            .payload
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let Some(json) = guard.as_ref() else {
            return Ok(None);
        };
        Ok(serde_json::from_str(json).ok())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .payload
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub snapshots: Arc<dyn SnapshotRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let snapshots: Arc<dyn SnapshotRepository> = Arc::new(repo);
        Self { snapshots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bagdar_core::time::fixed_now;

    fn snapshot() -> SessionSnapshot {
        let mut session = QuizSession::new(5);
        session.set_nickname("Айдана");
        session.start(fixed_now());
        session.submit_answer("Математика").unwrap();
        session.submit_answer("Технология").unwrap();
        SessionSnapshot::from_session(&session)
    }

    #[tokio::test]
    async fn round_trips_snapshot() {
        let repo = InMemoryRepository::new();
        let snap = snapshot();
        repo.save(&snap).await.unwrap();

        let loaded = repo.load().await.unwrap().expect("snapshot present");
        assert_eq!(loaded, snap);

        let session = loaded.into_session(5).unwrap();
        assert_eq!(session.phase(), Phase::Quiz);
        assert_eq!(session.answers(), &["Математика", "Технология"]);
        assert_eq!(session.nickname(), Some("Айдана"));
    }

    #[tokio::test]
    async fn corrupt_payload_degrades_to_none() {
        let repo = InMemoryRepository::new();
        repo.seed_raw("not json");
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_removes_snapshot() {
        let repo = InMemoryRepository::new();
        repo.save(&snapshot()).await.unwrap();
        repo.clear().await.unwrap();
        assert!(repo.load().await.unwrap().is_none());
    }

    #[test]
    fn snapshot_uses_original_key_names() {
        let json = serde_json::to_string(&snapshot()).unwrap();
        assert!(json.contains("\"step\":\"quiz\""));
        assert!(json.contains("\"currentQuestion\""));
        assert!(json.contains("\"submitted\":false"));
    }

    #[test]
    fn empty_answers_are_not_resumable() {
        let session = QuizSession::new(5);
        assert!(!SessionSnapshot::from_session(&session).is_resumable());
        assert!(snapshot().is_resumable());
    }
}
