mod program;
mod question;
mod recommendation;
mod session;

pub use program::Program;
pub use question::{Question, QuestionOption};
pub use recommendation::{Recommendation, RecommendedProgram};
pub use session::{AnswerOutcome, Phase, QuizSession, SessionError};
