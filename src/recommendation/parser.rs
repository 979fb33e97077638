use serde_json::Value;

use super::fallback::NO_RECOMMENDATION;
use super::RecommendationError;
use crate::models::RecommendationSet;

/// Parse the raw model output as JSON.
///
/// The text is trimmed first; structured output arrives as a bare JSON
/// object, but the trim tolerates stray surrounding whitespace.
pub fn parse_recommendation_response(raw: &str) -> Result<Value, RecommendationError> {
    serde_json::from_str(raw.trim()).map_err(|e| RecommendationError::JsonParsing(e.to_string()))
}

/// Build the final set from a parsed response, field by field.
///
/// A field that is missing, null, empty, or not a string gets the per-field
/// placeholder; every other field keeps its supplied text verbatim. A
/// response missing one field still yields four real recommendations.
pub fn reconcile(parsed: &Value) -> RecommendationSet {
    RecommendationSet {
        blood_pressure: field_or_placeholder(parsed, "bloodPressure"),
        statin_management: field_or_placeholder(parsed, "statinManagement"),
        aspirin_usage: field_or_placeholder(parsed, "aspirinUsage"),
        exercise: field_or_placeholder(parsed, "exercise"),
        lifestyle: field_or_placeholder(parsed, "lifestyle"),
    }
}

fn field_or_placeholder(parsed: &Value, field: &str) -> String {
    match parsed.get(field).and_then(Value::as_str) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NO_RECOMMENDATION.to_string(),
    }
}
