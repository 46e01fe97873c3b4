use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Shown when no API key is configured
pub const MISSING_KEY_MESSAGE: &str =
    "Chave de API não configurada. Adicione sua Chave de API para usar este recurso.";

/// Shown when generation fails for any other reason
pub const GENERATION_FAILED_MESSAGE: &str =
    "Ocorreu um erro ao gerar a biografia. Por favor, tente novamente ou escreva a sua própria.";

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Errors that can occur when generating a biography
#[derive(Debug, Error)]
pub enum BioAssistError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Result of a generation attempt, as text the caller can place in the bio field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BioOutcome {
    Generated(String),
    Unavailable(String),
    Failed(String),
}

impl BioOutcome {
    pub fn text(&self) -> &str {
        match self {
            BioOutcome::Generated(text) | BioOutcome::Unavailable(text) | BioOutcome::Failed(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            BioOutcome::Generated(text) | BioOutcome::Unavailable(text) | BioOutcome::Failed(text) => text,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, BioOutcome::Generated(_))
    }
}

/// Build the instruction sent to the model for the given keywords
pub fn build_prompt(keywords: &str) -> String {
    format!(
        "Gere uma biografia de músico curta, profissional e envolvente com base nestas palavras-chave: \"{}\". \
         A biografia deve ser em primeira pessoa, com cerca de 50-70 palavras. \
         Destaque suas habilidades, experiência e paixão pela música.",
        keywords
    )
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
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
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Gemini `generateContent` client for biography suggestions
///
/// Without an API key every call resolves to [`MISSING_KEY_MESSAGE`] and no
/// request is made.
pub struct GeminiClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
    ) -> Result<Self, BioAssistError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model,
            client,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate a biography, always resolving to displayable text
    pub async fn generate_bio(&self, keywords: &str) -> String {
        self.generate(keywords).await.into_text()
    }

    /// Generate a biography, keeping track of which kind of text came back
    pub async fn generate(&self, keywords: &str) -> BioOutcome {
        match self.try_generate(keywords).await {
            Ok(bio) => BioOutcome::Generated(bio),
            Err(BioAssistError::MissingApiKey) => {
                tracing::warn!("Bio assist API key not set, AI features are disabled");
                BioOutcome::Unavailable(MISSING_KEY_MESSAGE.to_string())
            }
            Err(e) => {
                tracing::error!("Failed to generate bio: {}", e);
                BioOutcome::Failed(GENERATION_FAILED_MESSAGE.to_string())
            }
        }
    }

    /// Call the API and return the trimmed generated text
    pub async fn try_generate(&self, keywords: &str) -> Result<String, BioAssistError> {
        let api_key = self.api_key.as_deref().ok_or(BioAssistError::MissingApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let prompt = build_prompt(keywords);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        tracing::debug!("Requesting bio from {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::debug!("Bio generation rejected: {} - {}", status, body);
            return Err(BioAssistError::ApiError(format!("Failed to generate content: {}", status)));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| BioAssistError::InvalidResponse(e.to_string()))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect::<String>())
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(BioAssistError::InvalidResponse("Empty response text".into()));
        }

        Ok(text.to_string())
    }
}
