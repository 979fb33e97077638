//! Cardioguide — draft cardiovascular recommendations for physician review.
//!
//! One logical operation: [`RecommendationGenerator::generate`] takes a
//! [`PatientProfile`], renders a deterministic guideline prompt, asks Gemini
//! for a structured five-field response, and reconciles the result. The call
//! never fails outward: partial responses are repaired field by field, and
//! total failures resolve to a fixed, clinically-reviewed fallback set.
//!
//! The crate stores nothing and transmits nothing beyond the single model
//! call. Input collection and result rendering belong to the caller.

pub mod config;
pub mod models;
pub mod recommendation;

pub use models::{PatientProfile, RecommendationSet, Sex};
pub use recommendation::generator::RecommendationGenerator;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for an embedding application.
///
/// Honors `RUST_LOG` when set, otherwise uses the crate default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
