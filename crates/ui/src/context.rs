use std::sync::Arc;

use services::QuizService;

pub trait UiApp: Send + Sync {
    fn quiz(&self) -> Arc<QuizService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &dyn UiApp) -> Self {
        Self { quiz: app.quiz() }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

/// Build the context the views read; called once by the composition root.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bagdar_core::Clock;
    use services::{FormsReporter, GeminiClient, QuizService};
    use storage::repository::Storage;

    struct TestApp {
        quiz: Arc<QuizService>,
    }

    impl UiApp for TestApp {
        fn quiz(&self) -> Arc<QuizService> {
            Arc::clone(&self.quiz)
        }
    }

    #[test]
    fn context_exposes_the_quiz_service() {
        let storage = Storage::in_memory();
        let quiz = Arc::new(QuizService::new(
            storage.snapshots,
            Arc::new(GeminiClient::new(None)),
            Arc::new(FormsReporter::new(None)),
            Clock::default_clock(),
        ));
        let ctx = build_app_context(Arc::new(TestApp { quiz }));
        assert_eq!(ctx.quiz().question_count(), 5);
    }
}
