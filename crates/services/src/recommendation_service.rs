use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use bagdar_core::catalog;
use bagdar_core::model::Recommendation;

use crate::error::RecommendationError;

/// The external call has no bounded latency guarantee, so cap it here.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("BAGDAR_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("BAGDAR_AI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into());
        let model = env::var("BAGDAR_AI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Maps collected answers to a structured program recommendation.
///
/// One in-flight request at a time by construction: only the loading phase
/// of the session machine ever calls this.
#[async_trait]
pub trait RecommendationClient: Send + Sync {
    /// Request a recommendation for the ordered answer labels.
    ///
    /// # Errors
    ///
    /// Returns `RecommendationError` for network failures, service errors
    /// and shape-violating responses. Never retried.
    async fn recommend(&self, answers: &[String]) -> Result<Recommendation, RecommendationError>;
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: Option<GeminiConfig>,
}

impl GeminiClient {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(GeminiConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<GeminiConfig>) -> Self {
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
impl RecommendationClient for GeminiClient {
    async fn recommend(&self, answers: &[String]) -> Result<Recommendation, RecommendationError> {
        let config = self.config.as_ref().ok_or(RecommendationError::Disabled)?;

        let url = format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );
        let payload = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: build_prompt(answers),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &config.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RecommendationError::HttpStatus(response.status()));
        }

        let body: GenerateResponse = response.json().await?;
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or(RecommendationError::EmptyResponse)?;

        let recommendation: Recommendation = serde_json::from_str(&text)
            .map_err(|err| RecommendationError::MalformedResponse(err.to_string()))?;
        if !recommendation.is_well_formed() {
            return Err(RecommendationError::MalformedResponse(
                "missing program name or subjects".into(),
            ));
        }

        Ok(recommendation)
    }
}

/// Kazakh prompt embedding the five answers and the full program catalog,
/// so the model can only rank real programs.
pub(crate) fn build_prompt(answers: &[String]) -> String {
    let answer = |idx: usize| answers.get(idx).map(String::as_str).unwrap_or_default();
    let programs_json = serde_json::to_string(catalog::programs()).unwrap_or_default();

    format!(
        "Оқушы келесі сұрақтарға жауап берді:\n\
         1. Пәндер: {}\n\
         2. Қызығушылық: {}\n\
         3. Мықты жағы: {}\n\
         4. Жұмыс форматы: {}\n\
         5. Қалаған бағыты: {}\n\n\
         Осы мәліметтер негізінде Abai University (Абай атындағы ҚазҰПУ) \
         бакалавриат бағдарламаларының ішінен ең үйлесімді 2-3 бағдарламаны таңдап бер.\n\n\
         Қолжетімді бағдарламалар тізімі:\n{}\n\n\
         Жауапты қазақ тілінде, JSON форматында қайтар: profileSummary — оқушының \
         қысқаша мінездемесі (1 сөйлем); recommendedPrograms — әр бағдарлама үшін \
         name (толық ресми атауы), description (1-2 сөйлем), whyFits (неге сай \
         келеді, 2-3 дәлел), subjects (профильдік пәндер комбинациясы).",
        answer(0),
        answer(1),
        answer(2),
        answer(3),
        answer(4),
        programs_json,
    )
}

/// JSON schema the service is asked to conform to.
fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "profileSummary": { "type": "STRING" },
            "recommendedPrograms": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "whyFits": { "type": "STRING" },
                        "subjects": { "type": "STRING" }
                    },
                    "required": ["name", "description", "whyFits", "subjects"]
                }
            }
        },
        "required": ["profileSummary", "recommendedPrograms"]
    })
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}
