use serde::Serialize;

/// A static catalog entry describing a university study track.
///
/// The full catalog is embedded in the recommendation prompt so the AI
/// service can only pick from real programs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "subjectCombination")]
    pub subject_combination: &'static str,
    pub category: &'static str,
}
