//! First pipeline stage: how much of the questionnaire was answered.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::profile::HealthProfile;

/// Number of fields on the completeness checklist.
const TOTAL_FIELDS: u32 = 12;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessReport {
    pub profile: HealthProfile,
    /// Percentage of checklist fields present, 0..=100.
    pub completeness_percent: u8,
    /// Labels of absent fields, in checklist order.
    pub missing_areas: Vec<String>,
}

/// Assess profile completeness against the fixed 12-field checklist.
///
/// The checklist order is part of the contract: missing-area labels always
/// come out in this order regardless of how the profile was populated.
/// List-valued fields count as present only when non-empty.
pub fn assess(profile: HealthProfile) -> CompletenessReport {
    let mut completed = 0u32;
    let mut missing_areas = Vec::new();

    let mut check = |present: bool, label: &str| {
        if present {
            completed += 1;
        } else {
            missing_areas.push(label.to_string());
        }
    };

    check(profile.avg_sleep.is_some(), "sleep tracking");
    check(profile.avg_water.is_some(), "hydration tracking");
    check(profile.avg_steps.is_some(), "physical activity");
    check(profile.exercise_frequency.is_some(), "exercise frequency");
    check(profile.avg_mood.is_some(), "mood tracking");
    check(profile.avg_stress.is_some(), "stress levels");
    check(profile.nutrition_score.is_some(), "nutrition analysis");
    check(HealthProfile::has_entries(&profile.symptoms), "symptom reporting");
    check(HealthProfile::has_entries(&profile.medications), "medication tracking");
    check(HealthProfile::has_entries(&profile.goals), "health goals");
    check(profile.age.is_some(), "basic demographics");
    check(HealthProfile::has_entries(&profile.concerns), "health concerns");

    let completeness_percent = ((completed as f64 / TOTAL_FIELDS as f64) * 100.0).round() as u8;

    CompletenessReport {
        profile,
        completeness_percent,
        missing_areas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> HealthProfile {
        HealthProfile {
            age: Some("26-35".into()),
            goals: Some(vec!["general health".into()]),
            avg_sleep: Some("7-8 hours".into()),
            avg_water: Some("2-2.5L".into()),
            avg_steps: Some("8000-10000".into()),
            exercise_frequency: Some("3 times per week".into()),
            avg_mood: Some("7-8 (good)".into()),
            avg_stress: Some("3-4 (low)".into()),
            nutrition_score: Some("good (61-80)".into()),
            symptoms: Some(vec!["headache".into()]),
            medications: Some(vec!["ibuprofen".into()]),
            concerns: Some(vec!["sleep quality".into()]),
        }
    }

    #[test]
    fn empty_profile_is_fully_missing() {
        let report = assess(HealthProfile::default());
        assert_eq!(report.completeness_percent, 0);
        assert_eq!(
            report.missing_areas,
            vec![
                "sleep tracking",
                "hydration tracking",
                "physical activity",
                "exercise frequency",
                "mood tracking",
                "stress levels",
                "nutrition analysis",
                "symptom reporting",
                "medication tracking",
                "health goals",
                "basic demographics",
                "health concerns",
            ]
        );
    }

    #[test]
    fn full_profile_is_complete() {
        let report = assess(full_profile());
        assert_eq!(report.completeness_percent, 100);
        assert!(report.missing_areas.is_empty());
    }

    #[test]
    fn percent_rounds_to_nearest_integer() {
        let profile = HealthProfile {
            avg_sleep: Some("7-8 hours".into()),
            ..Default::default()
        };
        // 1/12 = 8.33 -> 8
        assert_eq!(assess(profile).completeness_percent, 8);

        let profile = HealthProfile {
            avg_sleep: Some("7-8 hours".into()),
            avg_water: Some("2-2.5L".into()),
            ..Default::default()
        };
        // 2/12 = 16.67 -> 17
        assert_eq!(assess(profile).completeness_percent, 17);
    }

    #[test]
    fn empty_lists_count_as_missing() {
        let profile = HealthProfile {
            symptoms: Some(vec![]),
            goals: Some(vec![]),
            ..Default::default()
        };
        let report = assess(profile);
        assert!(report.missing_areas.iter().any(|m| m == "symptom reporting"));
        assert!(report.missing_areas.iter().any(|m| m == "health goals"));
    }

    #[test]
    fn adding_a_field_never_decreases_completeness() {
        let mut profile = HealthProfile::default();
        let before = assess(profile.clone());
        profile.avg_mood = Some("5-6 (neutral)".into());
        let after = assess(profile);
        assert!(after.completeness_percent >= before.completeness_percent);
        assert!(!after.missing_areas.iter().any(|m| m == "mood tracking"));
    }
}
