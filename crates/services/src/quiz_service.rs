use std::sync::Arc;

use tokio::sync::Mutex;

use bagdar_core::Clock;
use bagdar_core::catalog;
use bagdar_core::model::{AnswerOutcome, Phase, QuizSession, Recommendation, SessionError};
use storage::repository::{SessionSnapshot, SnapshotRepository};

use crate::error::QuizError;
use crate::recommendation_service::RecommendationClient;
use crate::report_service::{ReportPayload, ResultReporter};

/// Read-only copy of the session state handed to the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub phase: Phase,
    pub current_question: usize,
    pub question_count: usize,
    pub answers: Vec<String>,
    pub nickname: Option<String>,
    pub result: Option<Recommendation>,
    pub submitted: bool,
}

impl SessionView {
    fn from_session(session: &QuizSession) -> Self {
        Self {
            phase: session.phase(),
            current_question: session.current_question(),
            question_count: session.question_count(),
            answers: session.answers().to_vec(),
            nickname: session.nickname().map(ToOwned::to_owned),
            result: session.result().cloned(),
            submitted: session.submitted(),
        }
    }
}

/// What a recorded answer led to.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Still in the quiz; the next question is up.
    Advanced(SessionView),
    /// Final answer analyzed successfully; the session holds the result.
    Completed(SessionView),
    /// The recommendation call failed; the session fell back to intro.
    AnalysisFailed(SessionView),
}

/// The quiz session controller.
///
/// Owns the single mutable `QuizSession` and sequences the four phases.
/// Every transition into the quiz or result phase writes a snapshot;
/// `start` and `reset` delete it first. Snapshot writes are best effort:
/// a failing store never interrupts the quiz, it only costs resumption.
pub struct QuizService {
    session: Mutex<QuizSession>,
    snapshots: Arc<dyn SnapshotRepository>,
    recommender: Arc<dyn RecommendationClient>,
    reporter: Arc<dyn ResultReporter>,
    clock: Clock,
    question_count: usize,
}

impl QuizService {
    #[must_use]
    pub fn new(
        snapshots: Arc<dyn SnapshotRepository>,
        recommender: Arc<dyn RecommendationClient>,
        reporter: Arc<dyn ResultReporter>,
        clock: Clock,
    ) -> Self {
        let question_count = catalog::questions().len();
        Self {
            session: Mutex::new(QuizSession::new(question_count)),
            snapshots,
            recommender,
            reporter,
            clock,
            question_count,
        }
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub async fn view(&self) -> SessionView {
        let session = self.session.lock().await;
        SessionView::from_session(&session)
    }

    /// Whether a resumable snapshot exists: present, decodable, and with at
    /// least one recorded answer. Checked once at startup to decide whether
    /// to offer the resume option.
    pub async fn has_saved_progress(&self) -> bool {
        match self.snapshots.load().await {
            Ok(Some(snapshot)) => {
                snapshot.is_resumable()
                    && snapshot.into_session(self.question_count).is_ok()
            }
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(error = %err, "could not check for saved progress");
                false
            }
        }
    }

    pub async fn set_nickname(&self, nickname: impl Into<String> + Send) {
        let mut session = self.session.lock().await;
        session.set_nickname(nickname);
    }

    /// `intro --start--> quiz`: drops any stored snapshot and begins a
    /// fresh run at the first question.
    pub async fn start(&self) -> SessionView {
        let mut session = self.session.lock().await;
        self.clear_snapshot().await;
        session.start(self.clock.now());
        self.persist(&session).await;
        SessionView::from_session(&session)
    }

    /// `intro --resume--> (restored phase)`: loads the snapshot verbatim.
    /// A missing or malformed snapshot leaves the session untouched in
    /// intro; resumption is simply unavailable.
    pub async fn resume(&self) -> SessionView {
        let mut session = self.session.lock().await;
        match self.snapshots.load().await {
            Ok(Some(snapshot)) => match snapshot.into_session(self.question_count) {
                Ok(restored) => *session = restored,
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring invalid saved session");
                }
            },
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "could not load saved session");
            }
        }
        SessionView::from_session(&session)
    }

    /// Record the label picked for the current question.
    ///
    /// The final answer triggers the recommendation request while the
    /// session sits in the loading phase; on failure the session falls
    /// closed back to intro and the collected answers are abandoned.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` when called outside the quiz phase.
    pub async fn submit_answer(
        &self,
        label: impl Into<String> + Send,
    ) -> Result<SubmitOutcome, QuizError> {
        let mut session = self.session.lock().await;
        match session.submit_answer(label)? {
            AnswerOutcome::Advanced => {
                self.persist(&session).await;
                Ok(SubmitOutcome::Advanced(SessionView::from_session(&session)))
            }
            AnswerOutcome::AwaitingAnalysis => {
                // Holding the lock keeps at most one request in flight.
                match self.recommender.recommend(session.answers()).await {
                    Ok(result) => {
                        session.complete_with_result(result, self.clock.now())?;
                        self.persist(&session).await;
                        Ok(SubmitOutcome::Completed(SessionView::from_session(&session)))
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "recommendation request failed");
                        session.fail_analysis()?;
                        Ok(SubmitOutcome::AnalysisFailed(SessionView::from_session(
                            &session,
                        )))
                    }
                }
            }
        }
    }

    /// Send the final outcome to the report sink, at most once.
    ///
    /// The `submitted` flag latches before the request goes out and stays
    /// set whatever the sink answers; a failed delivery is logged and
    /// accepted. Returns whether this call actually reported.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` when no result is present.
    pub async fn finalize_and_report(&self) -> Result<bool, QuizError> {
        let mut session = self.session.lock().await;
        let Some(result) = session.result().cloned() else {
            return Err(QuizError::Session(SessionError::NoResult));
        };
        if !session.mark_submitted()? {
            return Ok(false);
        }

        let payload = ReportPayload {
            nickname: session.nickname().map(ToOwned::to_owned),
            answers: session.answers().to_vec(),
            program_names: result.program_names(),
            subjects: result.subject_strings(),
        };
        if let Err(err) = self.reporter.report(&payload).await {
            tracing::warn!(error = %err, "result report failed, keeping submitted flag");
        }

        self.persist(&session).await;
        Ok(true)
    }

    /// `--reset--> intro` from any phase: clears the stored snapshot and
    /// every session field.
    pub async fn reset(&self) -> SessionView {
        let mut session = self.session.lock().await;
        self.clear_snapshot().await;
        session.reset();
        SessionView::from_session(&session)
    }

    async fn persist(&self, session: &QuizSession) {
        if !matches!(session.phase(), Phase::Quiz | Phase::Result) {
            return;
        }
        let snapshot = SessionSnapshot::from_session(session);
        if let Err(err) = self.snapshots.save(&snapshot).await {
            tracing::warn!(error = %err, "failed to persist session snapshot");
        }
    }

    async fn clear_snapshot(&self) {
        if let Err(err) = self.snapshots.clear().await {
            tracing::warn!(error = %err, "failed to clear session snapshot");
        }
    }
}
