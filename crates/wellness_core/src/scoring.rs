//! Second pipeline stage: threshold rules over the normalized profile.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::completeness::CompletenessReport;
use crate::normalize;
use crate::profile::HealthProfile;

const BASE_SCORE: f64 = 50.0;

/// Symptom phrases containing any of these escalate the physical penalty.
const SEVERITY_KEYWORDS: [&str; 4] = ["severe", "intense", "chronic", "persistent"];

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct HealthScores {
    pub overall: u8,
    pub physical: u8,
    pub mental: u8,
    pub lifestyle: u8,
    pub nutrition: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBundle {
    pub scores: HealthScores,
    pub risk_factors: Vec<String>,
    pub positive_factors: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Apply the fixed threshold table to a validated profile.
///
/// Each tracked dimension is evaluated top-down; the first matching band
/// wins, and a dimension contributes at most one factor entry. Absent
/// dimensions contribute nothing. Sub-scores are clamped to 0..=100 after
/// all deltas, and the overall score is the rounded mean of the four.
pub fn calculate_scores(report: &CompletenessReport) -> ScoreBundle {
    let profile = &report.profile;
    let mut risk_factors = Vec::new();
    let mut positive_factors = Vec::new();
    let mut recommendations = Vec::new();

    let mut physical = BASE_SCORE;
    let mut mental = BASE_SCORE;
    let mut lifestyle = BASE_SCORE;
    let mut nutrition = BASE_SCORE;

    if let Some(steps) = &profile.avg_steps {
        let value = normalize::steps(steps);
        if value >= 10000.0 {
            physical += 20.0;
            positive_factors.push("Excellent daily activity level".to_string());
        } else if value >= 8000.0 {
            physical += 15.0;
            positive_factors.push("Good daily activity level".to_string());
        } else if value < 5000.0 {
            physical -= 15.0;
            risk_factors.push("Low daily physical activity".to_string());
            recommendations.push("Increase daily steps to at least 8,000".to_string());
        }
    }

    if let Some(frequency) = &profile.exercise_frequency {
        let value = normalize::exercise_frequency(frequency);
        if value >= 4.0 {
            physical += 15.0;
            positive_factors.push("Regular exercise routine".to_string());
        } else if value >= 2.0 {
            physical += 10.0;
        } else {
            physical -= 10.0;
            risk_factors.push("Insufficient exercise frequency".to_string());
            recommendations.push("Aim for at least 3 exercise sessions per week".to_string());
        }
    }

    if let Some(mood) = &profile.avg_mood {
        let value = normalize::mood(mood);
        if value >= 7.0 {
            mental += 20.0;
            positive_factors.push("Positive mood patterns".to_string());
        } else if value >= 5.0 {
            mental += 10.0;
        } else {
            mental -= 15.0;
            risk_factors.push("Low mood levels".to_string());
            recommendations
                .push("Consider mood-boosting activities and professional support".to_string());
        }
    }

    if let Some(stress) = &profile.avg_stress {
        let value = normalize::stress(stress);
        if value <= 4.0 {
            mental += 15.0;
            positive_factors.push("Well-managed stress levels".to_string());
        } else if value <= 6.0 {
            mental += 5.0;
        } else {
            mental -= 15.0;
            risk_factors.push("High stress levels".to_string());
            recommendations.push("Implement stress management techniques".to_string());
        }
    }

    if let Some(sleep) = &profile.avg_sleep {
        let value = normalize::sleep(sleep);
        if (7.0..=9.0).contains(&value) {
            lifestyle += 20.0;
            positive_factors.push("Healthy sleep duration".to_string());
        } else if (6.0..=10.0).contains(&value) {
            lifestyle += 10.0;
        } else {
            lifestyle -= 15.0;
            risk_factors.push("Poor sleep duration".to_string());
            recommendations.push("Aim for 7-9 hours of sleep nightly".to_string());
        }
    }

    if let Some(water) = &profile.avg_water {
        let value = normalize::water(water);
        if value >= 2.5 {
            lifestyle += 15.0;
            positive_factors.push("Excellent hydration".to_string());
        } else if value >= 2.0 {
            lifestyle += 10.0;
            positive_factors.push("Good hydration levels".to_string());
        } else {
            lifestyle -= 10.0;
            risk_factors.push("Insufficient hydration".to_string());
            recommendations.push("Increase daily water intake to 2.5L".to_string());
        }
    }

    if let Some(bucket) = &profile.nutrition_score {
        nutrition = normalize::nutrition(bucket);
    }

    if let Some(symptoms) = profile.symptoms.as_ref().filter(|s| !s.is_empty()) {
        let has_severe = symptoms.iter().any(|symptom| {
            let lowered = symptom.to_lowercase();
            SEVERITY_KEYWORDS.iter().any(|kw| lowered.contains(kw))
        });
        if has_severe {
            physical -= 20.0;
            risk_factors.push("Severe or persistent symptoms reported".to_string());
            recommendations
                .push("Consult healthcare professional for symptom evaluation".to_string());
        } else {
            physical -= 10.0;
            risk_factors.push("Symptoms reported".to_string());
            recommendations
                .push("Monitor symptoms and consider professional consultation".to_string());
        }
    }

    let physical = clamp_round(physical);
    let mental = clamp_round(mental);
    let lifestyle = clamp_round(lifestyle);
    let nutrition = clamp_round(nutrition);
    let overall = ((physical as f64 + mental as f64 + lifestyle as f64 + nutrition as f64) / 4.0)
        .round() as u8;

    ScoreBundle {
        scores: HealthScores {
            overall,
            physical,
            mental,
            lifestyle,
            nutrition,
        },
        risk_factors,
        positive_factors,
        recommendations,
    }
}

fn clamp_round(score: f64) -> u8 {
    score.clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completeness::assess;

    fn bundle_for(profile: HealthProfile) -> ScoreBundle {
        calculate_scores(&assess(profile))
    }

    #[test]
    fn empty_profile_stays_at_base() {
        let bundle = bundle_for(HealthProfile::default());
        assert_eq!(bundle.scores.physical, 50);
        assert_eq!(bundle.scores.mental, 50);
        assert_eq!(bundle.scores.lifestyle, 50);
        assert_eq!(bundle.scores.nutrition, 50);
        assert_eq!(bundle.scores.overall, 50);
        assert!(bundle.risk_factors.is_empty());
        assert!(bundle.positive_factors.is_empty());
    }

    #[test]
    fn high_steps_reward_physical() {
        let bundle = bundle_for(HealthProfile {
            avg_steps: Some("10000-12000".into()),
            ..Default::default()
        });
        assert_eq!(bundle.scores.physical, 70);
        assert_eq!(bundle.positive_factors, vec!["Excellent daily activity level"]);
        assert!(bundle.recommendations.is_empty());
    }

    #[test]
    fn low_steps_penalize_and_recommend() {
        let bundle = bundle_for(HealthProfile {
            avg_steps: Some("less than 3000".into()),
            ..Default::default()
        });
        assert_eq!(bundle.scores.physical, 35);
        assert_eq!(bundle.risk_factors, vec!["Low daily physical activity"]);
        assert_eq!(
            bundle.recommendations,
            vec!["Increase daily steps to at least 8,000"]
        );
    }

    #[test]
    fn middling_steps_are_neutral() {
        // 5000-8000 -> 6500, between the penalty and reward bands
        let bundle = bundle_for(HealthProfile {
            avg_steps: Some("5000-8000".into()),
            ..Default::default()
        });
        assert_eq!(bundle.scores.physical, 50);
        assert!(bundle.positive_factors.is_empty());
        assert!(bundle.risk_factors.is_empty());
    }

    #[test]
    fn moderate_exercise_scores_without_factor_entry() {
        let bundle = bundle_for(HealthProfile {
            exercise_frequency: Some("2 times per week".into()),
            ..Default::default()
        });
        assert_eq!(bundle.scores.physical, 60);
        assert!(bundle.positive_factors.is_empty());
        assert!(bundle.risk_factors.is_empty());
    }

    #[test]
    fn severe_symptom_penalty() {
        let bundle = bundle_for(HealthProfile {
            symptoms: Some(vec!["chronic back pain".into()]),
            ..Default::default()
        });
        assert_eq!(bundle.scores.physical, 30);
        assert_eq!(bundle.risk_factors, vec!["Severe or persistent symptoms reported"]);
    }

    #[test]
    fn mild_symptom_penalty() {
        let bundle = bundle_for(HealthProfile {
            symptoms: Some(vec!["headache".into()]),
            ..Default::default()
        });
        assert_eq!(bundle.scores.physical, 40);
        assert_eq!(bundle.risk_factors, vec!["Symptoms reported"]);
        assert_eq!(
            bundle.recommendations,
            vec!["Monitor symptoms and consider professional consultation"]
        );
    }

    #[test]
    fn scores_never_leave_bounds() {
        let bundle = bundle_for(HealthProfile {
            avg_steps: Some("less than 3000".into()),
            exercise_frequency: Some("never".into()),
            avg_mood: Some("1-2 (very low)".into()),
            avg_stress: Some("9-10 (very high)".into()),
            avg_sleep: Some("less than 5 hours".into()),
            avg_water: Some("less than 1L".into()),
            nutrition_score: Some("poor (0-40)".into()),
            symptoms: Some(vec!["severe chest pain".into()]),
            ..Default::default()
        });
        for score in [
            bundle.scores.overall,
            bundle.scores.physical,
            bundle.scores.mental,
            bundle.scores.lifestyle,
            bundle.scores.nutrition,
        ] {
            assert!(score <= 100);
        }
        // physical: 50 - 15 - 10 - 20 = 5
        assert_eq!(bundle.scores.physical, 5);
        assert_eq!(bundle.scores.mental, 20);
        assert_eq!(bundle.scores.lifestyle, 25);
        assert_eq!(bundle.scores.nutrition, 30);
    }

    #[test]
    fn healthy_profile_overall_is_86() {
        let bundle = bundle_for(HealthProfile {
            avg_sleep: Some("7-8 hours".into()),
            avg_water: Some("2.5-3L".into()),
            avg_steps: Some("10000-12000".into()),
            exercise_frequency: Some("5+ times per week".into()),
            avg_mood: Some("7-8 (good)".into()),
            avg_stress: Some("1-2 (very low)".into()),
            nutrition_score: Some("excellent (81-100)".into()),
            ..Default::default()
        });
        assert_eq!(bundle.scores.physical, 85);
        assert_eq!(bundle.scores.mental, 85);
        assert_eq!(bundle.scores.lifestyle, 85);
        assert_eq!(bundle.scores.nutrition, 90);
        assert_eq!(bundle.scores.overall, 86);
        assert!(bundle.risk_factors.is_empty());
        assert_eq!(bundle.positive_factors.len(), 6);
    }

    #[test]
    fn scoring_is_deterministic() {
        let profile = HealthProfile {
            avg_sleep: Some("5-6 hours".into()),
            avg_mood: Some("3-4 (low)".into()),
            symptoms: Some(vec!["fatigue".into(), "insomnia".into()]),
            ..Default::default()
        };
        let a = bundle_for(profile.clone());
        let b = bundle_for(profile);
        assert_eq!(a, b);
    }
}
