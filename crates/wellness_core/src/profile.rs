//! The user-submitted health questionnaire.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Self-reported wellness data. Every field is optional; absence is
/// meaningful (it lowers the completeness score) and is never defaulted
/// here. Bucket fields carry closed-enum range phrases such as
/// "7-8 hours" or "5-6 (neutral)", matched tolerantly by the normalizer,
/// so trailing annotations are allowed.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthProfile {
    /// Age range, e.g. "26-35"
    pub age: Option<String>,
    /// Health and wellness goals, e.g. "better sleep", "stress management"
    pub goals: Option<Vec<String>>,
    /// Average sleep duration, e.g. "7-8 hours"
    pub avg_sleep: Option<String>,
    /// Average daily water intake, e.g. "2-2.5L"
    pub avg_water: Option<String>,
    /// Average daily steps, e.g. "8000-10000"
    pub avg_steps: Option<String>,
    /// Exercise frequency, e.g. "3 times per week"
    pub exercise_frequency: Option<String>,
    /// Average mood level, e.g. "7-8 (good)"
    pub avg_mood: Option<String>,
    /// Average stress level, e.g. "3-4 (low)"
    pub avg_stress: Option<String>,
    /// Self-assessed nutrition quality, e.g. "good (61-80)"
    pub nutrition_score: Option<String>,
    /// Symptoms currently experienced, e.g. "headache", "fatigue"
    pub symptoms: Option<Vec<String>>,
    /// Current medications, e.g. "ibuprofen"
    pub medications: Option<Vec<String>>,
    /// Specific health concerns, e.g. "sleep quality"
    pub concerns: Option<Vec<String>>,
}

impl HealthProfile {
    /// Non-empty list semantics: a list field counts as provided only when
    /// it actually holds entries.
    pub(crate) fn has_entries(list: &Option<Vec<String>>) -> bool {
        list.as_ref().is_some_and(|v| !v.is_empty())
    }

    pub fn has_symptoms(&self) -> bool {
        Self::has_entries(&self.symptoms)
    }
}
