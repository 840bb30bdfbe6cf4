use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::ReportError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Pre-filled form field ids, from the form's "Get pre-filled link" view.
const ENTRY_NICKNAME: &str = "entry.1000001";
const ENTRY_ANSWERS: &str = "entry.1000002";
const ENTRY_PROGRAMS: &str = "entry.1000003";
const ENTRY_SUBJECTS: &str = "entry.1000004";

const ANONYMOUS_NICKNAME: &str = "Аноним";

#[derive(Clone, Debug)]
pub struct FormsConfig {
    pub form_url: String,
}

impl FormsConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let form_url = env::var("BAGDAR_FORM_URL").ok()?;
        if form_url.trim().is_empty() {
            return None;
        }
        Some(Self { form_url })
    }
}

/// Final outcome of a quiz run, flattened for the form sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPayload {
    pub nickname: Option<String>,
    pub answers: Vec<String>,
    pub program_names: Vec<String>,
    pub subjects: Vec<String>,
}

impl ReportPayload {
    /// Form fields exactly as the sink expects them: nickname (anonymous
    /// fallback), answers joined with " / ", names and subjects with "; ".
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let nickname = self
            .nickname
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(ANONYMOUS_NICKNAME)
            .to_string();
        vec![
            (ENTRY_NICKNAME, nickname),
            (ENTRY_ANSWERS, self.answers.join(" / ")),
            (ENTRY_PROGRAMS, self.program_names.join("; ")),
            (ENTRY_SUBJECTS, self.subjects.join("; ")),
        ]
    }
}

/// Fire-and-forget delivery of the final outcome to an external form sink.
///
/// No delivery guarantee: the sink's response is intentionally not
/// inspected, and nothing is retried.
#[async_trait]
pub trait ResultReporter: Send + Sync {
    /// Submit the payload once, best effort.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` only for transport failures; callers log and
    /// ignore it.
    async fn report(&self, payload: &ReportPayload) -> Result<(), ReportError>;
}

#[derive(Clone)]
pub struct FormsReporter {
    client: Client,
    config: Option<FormsConfig>,
}

impl FormsReporter {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(FormsConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<FormsConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl ResultReporter for FormsReporter {
    async fn report(&self, payload: &ReportPayload) -> Result<(), ReportError> {
        let Some(config) = self.config.as_ref() else {
            tracing::debug!("result reporter not configured, skipping submission");
            return Ok(());
        };

        // application/x-www-form-urlencoded; the response is not read.
        self.client
            .post(&config.form_url)
            .timeout(REQUEST_TIMEOUT)
            .form(&payload.form_fields())
            .send()
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(nickname: Option<&str>) -> ReportPayload {
        ReportPayload {
            nickname: nickname.map(String::from),
            answers: vec!["Математика".into(), "Технология".into()],
            program_names: vec!["Информатика".into(), "Психология".into()],
            subjects: vec![
                "Математика – Информатика".into(),
                "Биология – География".into(),
            ],
        }
    }

    #[test]
    fn fields_join_with_expected_separators() {
        let fields = payload(Some("Дана")).form_fields();
        assert_eq!(fields[0], (ENTRY_NICKNAME, "Дана".to_string()));
        assert_eq!(fields[1].1, "Математика / Технология");
        assert_eq!(fields[2].1, "Информатика; Психология");
        assert_eq!(fields[3].1, "Математика – Информатика; Биология – География");
    }

    #[test]
    fn blank_nickname_falls_back_to_anonymous() {
        assert_eq!(payload(None).form_fields()[0].1, ANONYMOUS_NICKNAME);
        assert_eq!(payload(Some("   ")).form_fields()[0].1, ANONYMOUS_NICKNAME);
    }

    #[tokio::test]
    async fn disabled_reporter_is_a_quiet_no_op() {
        let reporter = FormsReporter::new(None);
        assert!(!reporter.enabled());
        reporter.report(&payload(None)).await.unwrap();
    }
}
