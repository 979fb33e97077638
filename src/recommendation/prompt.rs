use crate::models::PatientProfile;

/// Render the instruction block for one profile.
///
/// Pure function of the input: identical profiles produce byte-identical
/// prompts. Embeds every clinical field in a fixed template, states the
/// task, and enumerates the five output categories in schema order. The
/// pseudonymized identifier is excluded: it is an observability token,
/// not clinical data.
pub fn build_recommendation_prompt(profile: &PatientProfile) -> String {
    format!(
        r#"You are a medical AI assistant providing draft recommendations for a cardiologist to review.
Based on ACC/AHA cardiovascular-risk guidelines, generate concise, actionable recommendations for the following patient profile.
The output must be a JSON object.

Patient Data:
- Age: {age}
- Sex: {sex}
- Race: {race}
- Systolic Blood Pressure: {systolic_bp} mmHg
- Total Cholesterol: {total_cholesterol} mg/dL
- HDL Cholesterol: {hdl_cholesterol} mg/dL
- Smoker: {smoker}
- On Hypertension Medication: {on_htn_meds}
- Has Diabetes: {has_diabetes}

Generate recommendations for the following categories:
1. Blood Pressure Management
2. Statin & Lipid Management
3. Aspirin Usage
4. Exercise Recommendation
5. Lifestyle & Diet
"#,
        age = profile.age,
        sex = profile.sex,
        race = profile.race,
        systolic_bp = profile.systolic_bp,
        total_cholesterol = profile.total_cholesterol,
        hdl_cholesterol = profile.hdl_cholesterol,
        smoker = yes_no(profile.is_smoker),
        on_htn_meds = yes_no(profile.on_htn_meds),
        has_diabetes = yes_no(profile.has_diabetes),
    )
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
