use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Recommendation;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("answer submitted outside the quiz phase")]
    NotInQuiz,

    #[error("no analysis in flight")]
    NotLoading,

    #[error("no result to act on")]
    NoResult,

    #[error("invalid persisted session: {0}")]
    InvalidPersistedState(String),
}

/// The discrete stage of the quiz session.
///
/// Serialized as the lowercase step name used by the persisted snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Intro,
    Quiz,
    Loading,
    Result,
}

/// Outcome of recording one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// More questions remain; the index advanced by one.
    Advanced,
    /// The final answer landed; the session moved to `Loading` and the
    /// caller must now request the recommendation.
    AwaitingAnalysis,
}

/// Single-owner quiz session: one phase at a time, answers append-only
/// during the quiz, result immutable once set, `submitted` a one-way latch.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    question_count: usize,
    phase: Phase,
    current_question: usize,
    answers: Vec<String>,
    nickname: Option<String>,
    result: Option<Recommendation>,
    submitted: bool,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Fresh session in the intro phase.
    #[must_use]
    pub fn new(question_count: usize) -> Self {
        Self {
            question_count,
            phase: Phase::Intro,
            current_question: 0,
            answers: Vec::new(),
            nickname: None,
            result: None,
            submitted: false,
            started_at: None,
            completed_at: None,
        }
    }

    /// Rehydrate a session from a persisted snapshot, verbatim.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPersistedState` when the stored fields
    /// cannot describe a valid session (index out of range during the quiz,
    /// result phase without a result). Callers treat that the same as a
    /// missing snapshot.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persisted(
        question_count: usize,
        phase: Phase,
        current_question: usize,
        answers: Vec<String>,
        nickname: Option<String>,
        result: Option<Recommendation>,
        submitted: bool,
    ) -> Result<Self, SessionError> {
        if phase == Phase::Quiz && current_question >= question_count {
            return Err(SessionError::InvalidPersistedState(format!(
                "question index {current_question} out of range"
            )));
        }
        if phase == Phase::Result && result.is_none() {
            return Err(SessionError::InvalidPersistedState(
                "result phase without a result".into(),
            ));
        }

        Ok(Self {
            question_count,
            phase,
            current_question,
            answers,
            nickname,
            result,
            submitted,
            started_at: None,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    #[must_use]
    pub fn current_question(&self) -> usize {
        self.current_question
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    #[must_use]
    pub fn result(&self) -> Option<&Recommendation> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        let nickname = nickname.into();
        self.nickname = if nickname.trim().is_empty() {
            None
        } else {
            Some(nickname)
        };
    }

    /// `intro --start--> quiz`: clears any prior state and begins at the
    /// first question. Callable from any phase.
    pub fn start(&mut self, now: DateTime<Utc>) {
        let nickname = self.nickname.take();
        *self = Self::new(self.question_count);
        self.nickname = nickname;
        self.phase = Phase::Quiz;
        self.started_at = Some(now);
    }

    /// Record one answer label and advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInQuiz` outside the quiz phase.
    pub fn submit_answer(&mut self, label: impl Into<String>) -> Result<AnswerOutcome, SessionError> {
        if self.phase != Phase::Quiz {
            return Err(SessionError::NotInQuiz);
        }

        self.answers.push(label.into());
        if self.current_question + 1 < self.question_count {
            self.current_question += 1;
            Ok(AnswerOutcome::Advanced)
        } else {
            self.phase = Phase::Loading;
            Ok(AnswerOutcome::AwaitingAnalysis)
        }
    }

    /// `loading --success--> result`. The result is immutable afterwards.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoading` unless an analysis is in flight.
    pub fn complete_with_result(
        &mut self,
        result: Recommendation,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        if self.phase != Phase::Loading {
            return Err(SessionError::NotLoading);
        }
        self.result = Some(result);
        self.completed_at = Some(now);
        self.phase = Phase::Result;
        Ok(())
    }

    /// `loading --failure--> intro`: fails closed back to the start. The
    /// collected answers stay in memory but the phase resets, so a new run
    /// begins from scratch.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoading` unless an analysis is in flight.
    pub fn fail_analysis(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Loading {
            return Err(SessionError::NotLoading);
        }
        self.phase = Phase::Intro;
        Ok(())
    }

    /// Latch the `submitted` flag. Returns `true` only the first time, so
    /// the report sink is invoked at most once.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoResult` unless the session holds a result.
    pub fn mark_submitted(&mut self) -> Result<bool, SessionError> {
        if self.phase != Phase::Result || self.result.is_none() {
            return Err(SessionError::NoResult);
        }
        if self.submitted {
            return Ok(false);
        }
        self.submitted = true;
        Ok(true)
    }

    /// `--reset--> intro`: clears every field. Callable from any phase.
    pub fn reset(&mut self) {
        *self = Self::new(self.question_count);
    }
}
