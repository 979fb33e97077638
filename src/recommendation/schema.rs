//! Structured-output contract sent to Gemini.
//!
//! Five named string fields, all mandatory. Defined once for the process
//! lifetime and checked structurally after parsing: the schema tells the
//! model what shape to emit, and `parser::reconcile` enforces it per field.

use std::sync::LazyLock;

use serde::Serialize;

/// The five required output fields, in wire order.
pub const REQUIRED_FIELDS: &[&str] = &[
    "bloodPressure",
    "statinManagement",
    "aspirinUsage",
    "exercise",
    "lifestyle",
];

/// Schema for one output field (Gemini schema dialect type tags).
#[derive(Debug, Clone, Serialize)]
pub struct FieldSchema {
    #[serde(rename = "type")]
    pub field_type: &'static str,
    pub description: &'static str,
}

/// The `properties` object, one entry per required field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaProperties {
    pub blood_pressure: FieldSchema,
    pub statin_management: FieldSchema,
    pub aspirin_usage: FieldSchema,
    pub exercise: FieldSchema,
    pub lifestyle: FieldSchema,
}

/// Declarative contract for the model's structured response, in Gemini
/// `responseSchema` shape.
#[derive(Debug, Clone, Serialize)]
pub struct OutputSchema {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    pub properties: SchemaProperties,
    pub required: &'static [&'static str],
}

fn string_field(description: &'static str) -> FieldSchema {
    FieldSchema {
        field_type: "STRING",
        description,
    }
}

/// Process-wide output contract: built once, never mutated.
pub static RECOMMENDATION_SCHEMA: LazyLock<OutputSchema> = LazyLock::new(|| OutputSchema {
    schema_type: "OBJECT",
    properties: SchemaProperties {
        blood_pressure: string_field("Recommendation for blood pressure management."),
        statin_management: string_field("Recommendation for statin and lipid management."),
        aspirin_usage: string_field("Recommendation on aspirin usage for primary prevention."),
        exercise: string_field("Recommendation for physical exercise."),
        lifestyle: string_field("Recommendation for lifestyle and diet changes."),
    },
    required: REQUIRED_FIELDS,
});
