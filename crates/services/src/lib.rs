#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod quiz_service;
pub mod recommendation_service;
pub mod report_service;

pub use bagdar_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, QuizError, RecommendationError, ReportError};
pub use quiz_service::{QuizService, SessionView, SubmitOutcome};
pub use recommendation_service::{GeminiClient, GeminiConfig, RecommendationClient};
pub use report_service::{FormsConfig, FormsReporter, ReportPayload, ResultReporter};
