//! Recommendation generation pipeline: prompt → Gemini → reconcile.
//!
//! The public surface is `RecommendationGenerator::generate`, which never
//! fails outward. Partial responses are repaired field by field; a failed
//! call or unparseable response resolves to the fixed guideline set.

pub mod fallback;
pub mod gemini;
pub mod gemini_types;
pub mod generator;
pub mod parser;
pub mod prompt;
pub mod schema;

pub use fallback::*;
pub use gemini::*;
pub use gemini_types::*;
pub use generator::*;
pub use parser::*;
pub use prompt::*;
pub use schema::*;

use thiserror::Error;

/// Errors internal to a single generation attempt.
///
/// Vocabulary for the pipeline only: `RecommendationGenerator::generate`
/// absorbs every variant into the guideline fallback set, so none of these
/// reach the caller.
#[derive(Error, Debug)]
pub enum RecommendationError {
    #[error("Gemini API is unreachable at {0}")]
    Connection(String),

    #[error("Gemini returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed Gemini response: {0}")]
    MalformedResponse(String),

    #[error("JSON parsing error: {0}")]
    JsonParsing(String),
}
