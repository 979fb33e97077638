use serde::{Deserialize, Serialize};

/// Biological sex as recorded in the patient profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Patient clinical profile supplied by the caller for a single generation
/// call. Immutable input; the generator reads it and discards it.
///
/// `pseudonymized_id` is an opaque correlation token used only in log
/// entries, never in clinical logic and never sent to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub pseudonymized_id: String,
    pub age: u32,
    pub sex: Sex,
    pub race: String,
    /// Systolic blood pressure in mmHg.
    pub systolic_bp: f64,
    /// Total cholesterol in mg/dL.
    pub total_cholesterol: f64,
    /// HDL cholesterol in mg/dL.
    pub hdl_cholesterol: f64,
    pub is_smoker: bool,
    pub on_htn_meds: bool,
    pub has_diabetes: bool,
}

/// One complete set of draft recommendations, one string per category.
///
/// Every field is always present and non-empty in every returned instance:
/// supplied by the model, filled with the per-field placeholder, or taken
/// from the guideline fallback set. Serializes with the wire field names
/// (`bloodPressure`, `statinManagement`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub blood_pressure: String,
    pub statin_management: String,
    pub aspirin_usage: String,
    pub exercise: String,
    pub lifestyle: String,
}
