//! Google Gemini implementation of [`AiProvider`].

use super::{
    AiProvider,
    prompts::{SUGGESTION_PROMPT, TIP_PROMPT, plan_prompt, strip_code_fences},
};
use crate::{
    config::settings::GeminiSettings,
    core::plan::{PlanInputDto, PlanOutputDto},
    errors::{Error, Result},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
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

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// Gemini REST client
///
/// Holds one pooled [`reqwest::Client`] configured with the request timeout.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl GeminiClient {
    /// Builds the client from settings.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(settings: &GeminiSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            http,
            api_key: settings.api_key.clone(),
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                settings.base_url.trim_end_matches('/'),
                settings.model
            ),
        })
    }

    async fn complete(&self, prompt: &str, json_response: bool) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| Error::Ai {
            message: "GEMINI_API_KEY is not configured.".to_string(),
        })?;

        let body = GenerateRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
            generation_config: json_response.then_some(GenerationConfig {
                response_mime_type: "application/json",
            }),
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(%status, "Gemini request failed");
            return Err(Error::Ai {
                message: format!("AI provider returned {status}: {detail}"),
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = parsed.into_text().unwrap_or_default();
        debug!(chars = text.len(), "Gemini response received");
        Ok(strip_code_fences(&text).to_string())
    }
}

/// Parses a model answer into a plan output, `None` when it is empty or malformed.
fn parse_plan_output(text: &str) -> Option<PlanOutputDto> {
    let text = strip_code_fences(text);
    if text.is_empty() {
        return None;
    }
    match serde_json::from_str::<PlanOutputDto>(text) {
        Ok(output) if !output.plant_name.trim().is_empty() => Some(output),
        Ok(_) => None,
        Err(e) => {
            warn!(error = %e, "Unparseable plan from AI provider");
            None
        }
    }
}

#[async_trait]
impl AiProvider for GeminiClient {
    async fn generate_plan(&self, input: &PlanInputDto) -> Result<Option<PlanOutputDto>> {
        let text = self.complete(&plan_prompt(input), true).await?;
        Ok(parse_plan_output(&text))
    }

    async fn ask(&self, prompt: &str) -> Result<String> {
        self.complete(prompt, false).await
    }

    async fn tip(&self) -> Result<String> {
        self.complete(TIP_PROMPT, false).await
    }

    async fn suggestion(&self) -> Result<String> {
        self.complete(SUGGESTION_PROMPT, false).await
    }
}
