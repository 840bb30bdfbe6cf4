//! Shareable text and deep links for a finished quiz.
//!
//! The recommendation content is untrusted free text; everything that goes
//! into a link is percent-encoded through the `url` crate, and the plain
//! summary is only ever rendered as text.

use url::Url;

use crate::model::Recommendation;

/// Human-readable summary of the result, used for clipboard copy and as
/// the body of every share link.
#[must_use]
pub fn result_summary(result: &Recommendation) -> String {
    let programs = result
        .recommended_programs
        .iter()
        .map(|p| format!("- {}", p.name))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Мен Абай атындағы ҚазҰПУ-дан өзіме сай мамандықты таптым! 🎓\n\n\
         Профиль: {}\n\n\
         Ұсынылған мамандықтар:\n{}\n\n\
         Сен де өз мамандығыңды анықта! ✨",
        result.profile_summary, programs
    )
}

/// WhatsApp prefilled-message link.
#[must_use]
pub fn whatsapp_link(text: &str) -> String {
    let mut url = Url::parse("https://wa.me/").expect("static base url");
    url.query_pairs_mut().append_pair("text", text);
    url.to_string()
}

/// Telegram share link carrying a target url plus the summary text.
#[must_use]
pub fn telegram_link(share_url: &str, text: &str) -> String {
    let mut url = Url::parse("https://t.me/share/url").expect("static base url");
    url.query_pairs_mut()
        .append_pair("url", share_url)
        .append_pair("text", text);
    url.to_string()
}

/// `mailto:` link with subject and body.
#[must_use]
pub fn mailto_link(subject: &str, body: &str) -> String {
    let mut url = Url::parse("mailto:").expect("static base url");
    url.query_pairs_mut()
        .append_pair("subject", subject)
        .append_pair("body", body);
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecommendedProgram;

    fn recommendation() -> Recommendation {
        Recommendation {
            profile_summary: "Зерттеуге құмар оқушы".into(),
            recommended_programs: vec![
                RecommendedProgram {
                    name: "Информатика".into(),
                    description: String::new(),
                    why_fits: String::new(),
                    subjects: "Математика – Информатика".into(),
                },
                RecommendedProgram {
                    name: "Психология".into(),
                    description: String::new(),
                    why_fits: String::new(),
                    subjects: "Биология – География".into(),
                },
            ],
        }
    }

    #[test]
    fn summary_lists_programs_in_order() {
        let text = result_summary(&recommendation());
        assert!(text.contains("Профиль: Зерттеуге құмар оқушы"));
        let info = text.find("- Информатика").unwrap();
        let psy = text.find("- Психология").unwrap();
        assert!(info < psy);
    }

    #[test]
    fn links_encode_untrusted_text() {
        let link = whatsapp_link("сәлем & <сынақ>");
        assert!(link.starts_with("https://wa.me/?text="));
        assert!(!link.contains('<'));
        assert!(!link.contains(" & "));
    }

    #[test]
    fn telegram_link_carries_url_and_text() {
        let link = telegram_link("https://example.kz", "нәтиже");
        assert!(link.contains("url=https"));
        assert!(link.contains("text="));
    }

    #[test]
    fn mailto_has_subject_and_body() {
        let link = mailto_link("Нәтиже", "мәтін");
        assert!(link.starts_with("mailto:?"));
        assert!(link.contains("subject="));
        assert!(link.contains("body="));
    }
}
