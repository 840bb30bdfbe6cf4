/// A single choice for a quiz question.
///
/// The `label` is what gets recorded as the answer when the option is
/// picked; the `id` is only a stable handle for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

/// A quiz question with its ordered options. Immutable static content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub options: &'static [QuestionOption],
}

impl Question {
    /// Looks up an option by its id.
    #[must_use]
    pub fn option(&self, id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|opt| opt.id == id)
    }
}
