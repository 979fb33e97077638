use async_trait::async_trait;

use super::gemini_types::{GenerateContentRequest, GenerateContentResponse};
use super::schema::OutputSchema;
use super::RecommendationError;
use crate::config;

/// Generative-content service abstraction (allows mocking).
///
/// One capability: a single structured-output round trip returning the raw
/// response text. Parsing belongs to the caller.
#[async_trait]
pub trait GenerativeClient {
    async fn generate_structured(
        &self,
        model: &str,
        prompt: &str,
        schema: &OutputSchema,
    ) -> Result<String, RecommendationError>;
}

/// Gemini REST client.
///
/// Carries no request timeout of its own; the transport default applies and
/// a hung or cancelled call surfaces as an ordinary client error.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: &str, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Construct from the process environment (`GEMINI_API_KEY`,
    /// `GEMINI_API_BASE`).
    ///
    /// A missing credential only logs a warning; the client still
    /// constructs, and its calls fail into the caller's fallback path.
    pub fn from_env() -> Self {
        Self::new(&config::api_key_from_env(), &config::api_base_from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_structured(
        &self,
        model: &str,
        prompt: &str,
        schema: &OutputSchema,
    ) -> Result<String, RecommendationError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let body = GenerateContentRequest::structured(prompt, schema);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    RecommendationError::Connection(self.base_url.clone())
                } else {
                    RecommendationError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecommendationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| RecommendationError::MalformedResponse(e.to_string()))?;

        parsed.first_candidate_text().ok_or_else(|| {
            RecommendationError::MalformedResponse("response carries no candidate text".into())
        })
    }
}

/// Mock client for testing — returns a configurable result.
pub struct MockGenerativeClient {
    response: Result<String, String>,
}

impl MockGenerativeClient {
    /// Mock that succeeds with the given raw response text.
    pub fn new(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
        }
    }

    /// Mock whose every call fails with an HTTP-client error.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate_structured(
        &self,
        _model: &str,
        _prompt: &str,
        _schema: &OutputSchema,
    ) -> Result<String, RecommendationError> {
        self.response
            .clone()
            .map_err(RecommendationError::HttpClient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::schema::RECOMMENDATION_SCHEMA;

    #[test]
    fn client_constructor_trims_trailing_slash() {
        let client = GeminiClient::new("key", "https://generativelanguage.googleapis.com/v1beta/");
        assert_eq!(
            client.base_url(),
            "https://generativelanguage.googleapis.com/v1beta"
        );
    }

    #[test]
    fn client_constructs_with_empty_credential() {
        let client = GeminiClient::new("", config::DEFAULT_API_BASE);
        assert_eq!(client.base_url(), config::DEFAULT_API_BASE);
    }

    #[tokio::test]
    async fn mock_client_returns_configured_response() {
        let client = MockGenerativeClient::new("{\"lifestyle\": \"eat well\"}");
        let result = client
            .generate_structured("gemini-2.5-flash", "prompt", &RECOMMENDATION_SCHEMA)
            .await
            .unwrap();
        assert_eq!(result, "{\"lifestyle\": \"eat well\"}");
    }

    #[tokio::test]
    async fn failing_mock_returns_http_client_error() {
        let client = MockGenerativeClient::failing("connection reset");
        let result = client
            .generate_structured("gemini-2.5-flash", "prompt", &RECOMMENDATION_SCHEMA)
            .await;
        assert!(matches!(
            result,
            Err(RecommendationError::HttpClient(msg)) if msg == "connection reset"
        ));
    }
}
