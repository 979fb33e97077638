use super::fallback::guideline_fallback;
use super::gemini::{GeminiClient, GenerativeClient};
use super::parser::{parse_recommendation_response, reconcile};
use super::prompt::build_recommendation_prompt;
use super::schema::RECOMMENDATION_SCHEMA;
use super::RecommendationError;
use crate::config;
use crate::models::{PatientProfile, RecommendationSet};

/// Orchestrates one generation call: prompt → model → reconcile.
///
/// `generate` never fails outward. Partial responses are repaired field by
/// field; a failed call or unparseable response resolves to the fixed
/// guideline fallback set. No state is retained between calls, so
/// concurrent calls on a shared generator are independent.
pub struct RecommendationGenerator {
    client: Box<dyn GenerativeClient + Send + Sync>,
    model: String,
}

impl RecommendationGenerator {
    pub fn new(client: Box<dyn GenerativeClient + Send + Sync>, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }

    /// Generator wired to the real Gemini API from the process environment.
    pub fn from_env() -> Self {
        Self::new(Box::new(GeminiClient::from_env()), &config::model_from_env())
    }

    /// Produce one complete recommendation set for the profile.
    ///
    /// All five fields of the result are non-empty, whatever happens to the
    /// underlying call.
    pub async fn generate(&self, profile: &PatientProfile) -> RecommendationSet {
        tracing::info!(
            patient = %profile.pseudonymized_id,
            model = %self.model,
            "Generating recommendations"
        );

        match self.attempt(profile).await {
            Ok(set) => set,
            Err(e) => {
                tracing::error!(
                    patient = %profile.pseudonymized_id,
                    error = %e,
                    "Recommendation generation failed, returning guideline fallback"
                );
                guideline_fallback()
            }
        }
    }

    /// One attempt: a single model round trip plus parsing. Per-field
    /// repair happens here; total failure propagates to `generate`.
    async fn attempt(
        &self,
        profile: &PatientProfile,
    ) -> Result<RecommendationSet, RecommendationError> {
        let prompt = build_recommendation_prompt(profile);
        let raw = self
            .client
            .generate_structured(&self.model, &prompt, &RECOMMENDATION_SCHEMA)
            .await?;
        let parsed = parse_recommendation_response(&raw)?;
        Ok(reconcile(&parsed))
    }
}
