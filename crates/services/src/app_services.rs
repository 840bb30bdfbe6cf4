use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::quiz_service::QuizService;
use crate::recommendation_service::{GeminiClient, RecommendationClient};
use crate::report_service::{FormsReporter, ResultReporter};

/// Assembles the app-facing quiz service over its collaborators.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage; the recommendation and
    /// report clients are configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let recommender: Arc<dyn RecommendationClient> = Arc::new(GeminiClient::from_env());
        let reporter: Arc<dyn ResultReporter> = Arc::new(FormsReporter::from_env());

        let quiz = Arc::new(QuizService::new(
            Arc::clone(&storage.snapshots),
            recommender,
            reporter,
            clock,
        ));

        Ok(Self { quiz })
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}
