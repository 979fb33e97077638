//! Gemini REST API contract types.
//!
//! Formalizes the subset of the `generateContent` request/response bodies
//! the generator exchanges with the API: one user content part in,
//! candidate text parts out, output constrained to JSON via
//! `generationConfig.responseSchema`.

use serde::{Deserialize, Serialize};

use super::schema::OutputSchema;

/// Request body for POST `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub generation_config: GenerationConfig<'a>,
}

/// One content turn — the rendered prompt as a single user part.
#[derive(Debug, Clone, Serialize)]
pub struct Content<'a> {
    pub role: &'static str,
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

/// Structured-output directive: JSON MIME type plus the field contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig<'a> {
    pub response_mime_type: &'static str,
    pub response_schema: &'a OutputSchema,
}

impl<'a> GenerateContentRequest<'a> {
    /// Build the single-turn structured request for one rendered prompt.
    pub fn structured(prompt: &'a str, schema: &'a OutputSchema) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        }
    }
}

/// Response body from `generateContent`, reduced to the fields the
/// generator reads. Everything else (usage metadata, safety ratings) is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    ///
    /// `None` when the response carries no candidate text at all (blocked
    /// prompt, empty candidate).
    pub fn first_candidate_text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::schema::RECOMMENDATION_SCHEMA;

    #[test]
    fn request_serializes_with_structured_output_directive() {
        let request = GenerateContentRequest::structured("the prompt", &RECOMMENDATION_SCHEMA);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "the prompt");
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "OBJECT");
        assert_eq!(
            json["generationConfig"]["responseSchema"]["required"]
                .as_array()
                .unwrap()
                .len(),
            5
        );
    }

    #[test]
    fn response_deserializes_candidate_text() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"bloodPressure\": \"ok\"}"}], "role": "model"}}
            ],
            "usageMetadata": {"promptTokenCount": 120}
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.first_candidate_text().as_deref(),
            Some("{\"bloodPressure\": \"ok\"}")
        );
    }

    #[test]
    fn response_concatenates_multiple_parts() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"a\":"}, {"text": " 1}"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_candidate_text().as_deref(), Some("{\"a\": 1}"));
    }

    #[test]
    fn response_without_candidates_yields_no_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_candidate_text().is_none());

        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.first_candidate_text().is_none());
    }

    #[test]
    fn response_with_empty_parts_yields_no_text() {
        let body = r#"{"candidates": [{"content": {"parts": []}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert!(response.first_candidate_text().is_none());
    }

    #[test]
    fn response_with_textless_candidate_yields_no_text() {
        let body = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert!(response.first_candidate_text().is_none());
    }
}
