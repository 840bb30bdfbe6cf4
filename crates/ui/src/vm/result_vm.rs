use bagdar_core::model::Recommendation;
use bagdar_core::share;

/// Public landing page used as the link target in shared messages.
const SHARE_PAGE_URL: &str = "https://abai.edu.kz/bagdar";

#[derive(Clone, Debug, PartialEq)]
pub struct ProgramVm {
    pub name: String,
    pub description: String,
    pub why_fits: String,
    pub subjects: String,
}

/// Everything the result screen renders, precomputed off the domain model.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultVm {
    pub profile_summary: String,
    pub programs: Vec<ProgramVm>,
    pub share_text: String,
    pub whatsapp_url: String,
    pub telegram_url: String,
    pub mailto_url: String,
}

#[must_use]
pub fn map_result(result: &Recommendation) -> ResultVm {
    let share_text = share::result_summary(result);
    let whatsapp_url = share::whatsapp_link(&share_text);
    let telegram_url = share::telegram_link(SHARE_PAGE_URL, &share_text);
    let mailto_url = share::mailto_link("Менің кәсіби бағдар нәтижем", &share_text);

    let programs = result
        .recommended_programs
        .iter()
        .map(|program| ProgramVm {
            name: program.name.clone(),
            description: program.description.clone(),
            why_fits: program.why_fits.clone(),
            subjects: program.subjects.clone(),
        })
        .collect();

    ResultVm {
        profile_summary: result.profile_summary.clone(),
        programs,
        share_text,
        whatsapp_url,
        telegram_url,
        mailto_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bagdar_core::model::RecommendedProgram;

    fn sample() -> Recommendation {
        Recommendation {
            profile_summary: "Сенің мықты жағың — логика.".to_owned(),
            recommended_programs: vec![RecommendedProgram {
                name: "Информатика".to_owned(),
                description: "IT мұғалімдерін даярлау бағыты.".to_owned(),
                why_fits: "Логикаға бейімсің.".to_owned(),
                subjects: "Математика – Информатика".to_owned(),
            }],
        }
    }

    #[test]
    fn maps_programs_with_their_subject_combinations() {
        let vm = map_result(&sample());
        assert_eq!(vm.programs.len(), 1);
        assert_eq!(vm.programs[0].subjects, "Математика – Информатика");
        assert!(vm.profile_summary.contains("логика"));
    }

    #[test]
    fn share_links_embed_the_summary() {
        let vm = map_result(&sample());
        assert!(vm.share_text.contains("Информатика"));
        assert!(vm.whatsapp_url.starts_with("https://wa.me/?text="));
        assert!(vm.telegram_url.contains("t.me/share/url"));
        assert!(vm.mailto_url.starts_with("mailto:?subject="));
    }
}
