//! Crate configuration — Gemini credential and endpoint defaults.
//!
//! Everything is read from the process environment; nothing here aborts.
//! A missing credential is logged and absorbed: the client still constructs
//! and every call lands on the guideline fallback.

/// Default model for recommendation generation.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini REST API base.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the Gemini API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Read the Gemini API key from the environment.
///
/// Returns an empty key when unset so the caller can still construct a
/// client; the resulting calls fail into the fallback path.
pub fn api_key_from_env() -> String {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            tracing::warn!(
                "{API_KEY_ENV} is not set — Gemini calls will fail and every \
                 recommendation will resolve to the guideline fallback set"
            );
            String::new()
        }
    }
}

/// Model name, overridable via `GEMINI_MODEL`.
pub fn model_from_env() -> String {
    std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string())
}

/// API base URL, overridable via `GEMINI_API_BASE`.
pub fn api_base_from_env() -> String {
    std::env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

/// Default tracing filter for embedding applications.
pub fn default_log_filter() -> String {
    "cardioguide=info".to_string()
}
