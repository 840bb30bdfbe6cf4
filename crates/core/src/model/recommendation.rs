use serde::{Deserialize, Serialize};

/// One program suggested by the recommendation service.
///
/// All fields are opaque strings produced by the external AI; only the
/// JSON shape is validated, never the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedProgram {
    pub name: String,
    pub description: String,
    pub why_fits: String,
    pub subjects: String,
}

/// The structured result returned by the recommendation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub profile_summary: String,
    pub recommended_programs: Vec<RecommendedProgram>,
}

impl Recommendation {
    /// Shape check applied after deserialization: at least one program,
    /// each carrying a non-empty name and subject combination.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.recommended_programs.is_empty()
            && self
                .recommended_programs
                .iter()
                .all(|p| !p.name.trim().is_empty() && !p.subjects.trim().is_empty())
    }

    /// Names of the recommended programs, in rank order.
    #[must_use]
    pub fn program_names(&self) -> Vec<String> {
        self.recommended_programs
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }

    /// Subject combinations of the recommended programs, in rank order.
    #[must_use]
    pub fn subject_strings(&self) -> Vec<String> {
        self.recommended_programs
            .iter()
            .map(|p| p.subjects.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(name: &str, subjects: &str) -> RecommendedProgram {
        RecommendedProgram {
            name: name.into(),
            description: "desc".into(),
            why_fits: "why".into(),
            subjects: subjects.into(),
        }
    }

    #[test]
    fn deserializes_camel_case_wire_shape() {
        let json = r#"{
            "profileSummary": "Логикалық ойлауы мықты оқушы",
            "recommendedPrograms": [{
                "name": "6B06101 Информатика",
                "description": "IT бағдарлама",
                "whyFits": "Математика мен логикаға бейім",
                "subjects": "Математика – Информатика"
            }]
        }"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert!(rec.is_well_formed());
        assert_eq!(rec.recommended_programs[0].why_fits, "Математика мен логикаға бейім");
    }

    #[test]
    fn empty_program_list_is_not_well_formed() {
        let rec = Recommendation {
            profile_summary: "x".into(),
            recommended_programs: Vec::new(),
        };
        assert!(!rec.is_well_formed());
    }

    #[test]
    fn blank_name_or_subjects_is_not_well_formed() {
        let rec = Recommendation {
            profile_summary: "x".into(),
            recommended_programs: vec![program(" ", "Математика – Физика")],
        };
        assert!(!rec.is_well_formed());

        let rec = Recommendation {
            profile_summary: "x".into(),
            recommended_programs: vec![program("Информатика", "")],
        };
        assert!(!rec.is_well_formed());
    }
}
