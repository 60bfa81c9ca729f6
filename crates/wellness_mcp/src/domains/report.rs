//! Report-card generation: per-metric status banding and an overall grade.

use rand::{RngExt, rng};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

#[derive(Clone, Debug, Serialize, JsonSchema)]
pub struct ReportMetric {
    pub category: String,
    pub value: f64,
    pub unit: String,
    pub status: MetricStatus,
    pub trend: Trend,
    pub recommendation: String,
}

#[derive(Clone, Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub report_date: String,
    pub report_type: ReportKind,
    pub overall_score: u8,
    pub metrics: Vec<ReportMetric>,
    pub achievements: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub action_plan: Vec<String>,
    pub summary: String,
}

/// Averaged metric inputs. Absent values take typical defaults so a report
/// can always be produced; real values come from the caller.
#[derive(Clone, Copy, Debug)]
pub struct MetricInputs {
    pub avg_sleep: f64,
    pub avg_water: f64,
    pub avg_steps: f64,
    pub avg_mood: f64,
    pub avg_stress: f64,
    pub exercise_frequency: f64,
    pub nutrition_score: f64,
    pub medication_adherence: f64,
}

impl Default for MetricInputs {
    fn default() -> Self {
        Self {
            avg_sleep: 7.2,
            avg_water: 2.1,
            avg_steps: 8500.0,
            avg_mood: 6.5,
            avg_stress: 5.5,
            exercise_frequency: 3.0,
            nutrition_score: 72.0,
            medication_adherence: 85.0,
        }
    }
}

fn banded(value: f64, excellent: f64, good: f64, fair: f64) -> MetricStatus {
    if value >= excellent {
        MetricStatus::Excellent
    } else if value >= good {
        MetricStatus::Good
    } else if value >= fair {
        MetricStatus::Fair
    } else {
        MetricStatus::NeedsImprovement
    }
}

// Stand-in for a real trend computation; no history is stored to derive one
// from, so the value is sampled.
fn sampled_trend() -> Trend {
    match rng().random_range(0..3u8) {
        0 => Trend::Improving,
        1 => Trend::Stable,
        _ => Trend::Declining,
    }
}

fn status_points(status: MetricStatus) -> u32 {
    match status {
        MetricStatus::Excellent => 100,
        MetricStatus::Good => 80,
        MetricStatus::Fair => 60,
        MetricStatus::NeedsImprovement => 40,
    }
}

fn is_positive(status: MetricStatus) -> bool {
    matches!(status, MetricStatus::Excellent | MetricStatus::Good)
}

pub fn generate(report_type: ReportKind, inputs: MetricInputs) -> ProgressReport {
    let report_date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let mut metrics = Vec::new();
    let mut achievements = Vec::new();
    let mut areas_for_improvement = Vec::new();
    let mut action_plan = Vec::new();

    let sleep_status = banded(inputs.avg_sleep, 8.0, 7.0, 6.0);
    metrics.push(ReportMetric {
        category: "Sleep".to_string(),
        value: inputs.avg_sleep,
        unit: "hours".to_string(),
        status: sleep_status,
        trend: sampled_trend(),
        recommendation: match sleep_status {
            MetricStatus::Excellent => "Maintain your excellent sleep schedule!",
            MetricStatus::Good => "Try to get closer to 8 hours for optimal recovery.",
            MetricStatus::Fair => "Focus on improving sleep hygiene and consistency.",
            MetricStatus::NeedsImprovement => {
                "Prioritize sleep - aim for 7-9 hours nightly with a consistent schedule."
            }
        }
        .to_string(),
    });
    if is_positive(sleep_status) {
        achievements.push("Maintaining healthy sleep patterns".to_string());
    } else {
        areas_for_improvement.push("Sleep duration and quality".to_string());
        action_plan.push("Establish a consistent bedtime routine and sleep schedule".to_string());
    }

    let water_status = banded(inputs.avg_water, 2.5, 2.0, 1.5);
    metrics.push(ReportMetric {
        category: "Hydration".to_string(),
        value: inputs.avg_water,
        unit: "liters".to_string(),
        status: water_status,
        trend: sampled_trend(),
        recommendation: match water_status {
            MetricStatus::Excellent => "Great hydration habits!",
            MetricStatus::Good => "Try to reach 2.5L daily for optimal hydration.",
            MetricStatus::Fair => "Increase water intake gradually throughout the day.",
            MetricStatus::NeedsImprovement => {
                "Significantly increase water intake - set hourly reminders."
            }
        }
        .to_string(),
    });
    if is_positive(water_status) {
        achievements.push("Good hydration levels".to_string());
    } else {
        areas_for_improvement.push("Daily water intake".to_string());
        action_plan.push("Set water intake reminders and carry a water bottle".to_string());
    }

    let steps_status = banded(inputs.avg_steps, 10000.0, 8000.0, 6000.0);
    metrics.push(ReportMetric {
        category: "Physical Activity".to_string(),
        value: inputs.avg_steps,
        unit: "steps".to_string(),
        status: steps_status,
        trend: sampled_trend(),
        recommendation: match steps_status {
            MetricStatus::Excellent => "Excellent activity level!",
            MetricStatus::Good => "Try to reach 10,000 steps daily.",
            MetricStatus::Fair => "Incorporate more walking into your daily routine.",
            MetricStatus::NeedsImprovement => {
                "Increase daily movement - start with short walks and build up."
            }
        }
        .to_string(),
    });
    if is_positive(steps_status) {
        achievements.push("Active lifestyle with good step count".to_string());
    } else {
        areas_for_improvement.push("Daily physical activity".to_string());
        action_plan.push("Take stairs, park farther away, or schedule walking breaks".to_string());
    }

    let mood_status = banded(inputs.avg_mood, 8.0, 6.5, 5.0);
    metrics.push(ReportMetric {
        category: "Mental Wellbeing".to_string(),
        value: inputs.avg_mood,
        unit: "score (1-10)".to_string(),
        status: mood_status,
        trend: sampled_trend(),
        recommendation: match mood_status {
            MetricStatus::Excellent => "Excellent mental wellbeing!",
            MetricStatus::Good => "Continue positive mental health practices.",
            MetricStatus::Fair => "Consider stress management and self-care activities.",
            MetricStatus::NeedsImprovement => {
                "Focus on mental health - consider professional support if needed."
            }
        }
        .to_string(),
    });

    // Stress bands invert: lower is better.
    let stress_status = if inputs.avg_stress <= 3.0 {
        MetricStatus::Excellent
    } else if inputs.avg_stress <= 5.0 {
        MetricStatus::Good
    } else if inputs.avg_stress <= 7.0 {
        MetricStatus::Fair
    } else {
        MetricStatus::NeedsImprovement
    };
    metrics.push(ReportMetric {
        category: "Stress Management".to_string(),
        value: inputs.avg_stress,
        unit: "level (1-10)".to_string(),
        status: stress_status,
        trend: sampled_trend(),
        recommendation: match stress_status {
            MetricStatus::Excellent => "Great stress management!",
            MetricStatus::Good => "Continue current stress management practices.",
            MetricStatus::Fair => "Implement more stress reduction techniques.",
            MetricStatus::NeedsImprovement => {
                "High stress levels - prioritize stress management and relaxation."
            }
        }
        .to_string(),
    });
    if is_positive(mood_status) {
        achievements.push("Positive mental health indicators".to_string());
    } else {
        areas_for_improvement.push("Mental wellbeing and stress management".to_string());
        action_plan
            .push("Practice mindfulness, meditation, or other stress-relief activities".to_string());
    }

    let exercise_status = banded(inputs.exercise_frequency, 5.0, 3.0, 2.0);
    metrics.push(ReportMetric {
        category: "Exercise Frequency".to_string(),
        value: inputs.exercise_frequency,
        unit: "sessions/week".to_string(),
        status: exercise_status,
        trend: sampled_trend(),
        recommendation: match exercise_status {
            MetricStatus::Excellent => "Outstanding exercise consistency!",
            MetricStatus::Good => "Good exercise routine - try to add 1-2 more sessions.",
            MetricStatus::Fair => "Increase exercise frequency to 3-4 times per week.",
            MetricStatus::NeedsImprovement => {
                "Start with 2-3 exercise sessions per week and build consistency."
            }
        }
        .to_string(),
    });
    if is_positive(exercise_status) {
        achievements.push("Regular exercise routine".to_string());
    } else {
        areas_for_improvement.push("Exercise consistency".to_string());
        action_plan
            .push("Schedule specific workout times and start with activities you enjoy".to_string());
    }

    let nutrition_status = banded(inputs.nutrition_score, 85.0, 70.0, 60.0);
    metrics.push(ReportMetric {
        category: "Nutrition".to_string(),
        value: inputs.nutrition_score,
        unit: "score (1-100)".to_string(),
        status: nutrition_status,
        trend: sampled_trend(),
        recommendation: match nutrition_status {
            MetricStatus::Excellent => "Excellent nutritional choices!",
            MetricStatus::Good => "Good nutrition - focus on consistency.",
            MetricStatus::Fair => "Improve diet quality with more whole foods.",
            MetricStatus::NeedsImprovement => {
                "Significant nutrition improvements needed - consider consulting a nutritionist."
            }
        }
        .to_string(),
    });
    if is_positive(nutrition_status) {
        achievements.push("Healthy eating patterns".to_string());
    } else {
        areas_for_improvement.push("Nutritional quality".to_string());
        action_plan.push("Plan meals in advance and include more fruits and vegetables".to_string());
    }

    if inputs.medication_adherence > 0.0 {
        let adherence_status = banded(inputs.medication_adherence, 95.0, 85.0, 75.0);
        metrics.push(ReportMetric {
            category: "Medication Adherence".to_string(),
            value: inputs.medication_adherence,
            unit: "percentage".to_string(),
            status: adherence_status,
            trend: sampled_trend(),
            recommendation: match adherence_status {
                MetricStatus::Excellent => "Excellent medication compliance!",
                MetricStatus::Good => "Good adherence - aim for 95%+ consistency.",
                MetricStatus::Fair => "Improve medication timing with reminders.",
                MetricStatus::NeedsImprovement => {
                    "Poor adherence - set up medication reminders and pill organizers."
                }
            }
            .to_string(),
        });
        if is_positive(adherence_status) {
            achievements.push("Good medication adherence".to_string());
        } else {
            areas_for_improvement.push("Medication consistency".to_string());
            action_plan.push("Set up medication reminders and use a pill organizer".to_string());
        }
    }

    let total: u32 = metrics.iter().map(|m| status_points(m.status)).sum();
    let overall_score = (total as f64 / metrics.len() as f64).round() as u8;

    let mut summary = if overall_score >= 90 {
        format!(
            "Outstanding health profile! You're maintaining excellent habits across most areas. \
Your {report_label} report shows strong performance in {count} key areas. Keep up the fantastic \
work and continue monitoring your progress.",
            report_label = report_label(report_type),
            count = achievements.len(),
        )
    } else if overall_score >= 75 {
        format!(
            "Good overall health status with room for targeted improvements. You're doing well \
in {count} areas, particularly {first}. Focus on the {improvements} areas identified for \
improvement to reach optimal health.",
            count = achievements.len(),
            first = achievements
                .first()
                .map(String::as_str)
                .unwrap_or("several key metrics"),
            improvements = areas_for_improvement.len(),
        )
    } else if overall_score >= 60 {
        format!(
            "Fair health status with several opportunities for improvement. While you have some \
positive habits, focusing on the {improvements} identified areas could significantly boost your \
overall wellbeing. Consider implementing the action plan gradually.",
            improvements = areas_for_improvement.len(),
        )
    } else {
        "Your health metrics indicate significant room for improvement across multiple areas. \
Don't be discouraged - small, consistent changes can lead to big improvements. Start with 1-2 \
items from your action plan and build momentum gradually. Consider consulting healthcare \
professionals for personalized guidance."
            .to_string()
    };

    if action_plan.is_empty() {
        action_plan.push("Continue maintaining your current healthy habits".to_string());
        action_plan.push("Set new health goals to challenge yourself".to_string());
        action_plan.push("Regular health check-ups with healthcare providers".to_string());
    }

    summary.push_str(match report_type {
        ReportKind::Daily => " Daily tracking helps identify patterns and maintain accountability.",
        ReportKind::Weekly => {
            " Weekly reviews allow for meaningful trend analysis and goal adjustments."
        }
        ReportKind::Monthly => {
            " Monthly reports provide comprehensive insights into long-term health patterns and \
progress."
        }
    });

    ProgressReport {
        report_date,
        report_type,
        overall_score,
        metrics,
        achievements,
        areas_for_improvement,
        action_plan,
        summary,
    }
}

fn report_label(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::Daily => "daily",
        ReportKind::Weekly => "weekly",
        ReportKind::Monthly => "monthly",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excellent_inputs() -> MetricInputs {
        MetricInputs {
            avg_sleep: 8.5,
            avg_water: 3.0,
            avg_steps: 12000.0,
            avg_mood: 9.0,
            avg_stress: 2.0,
            exercise_frequency: 6.0,
            nutrition_score: 92.0,
            medication_adherence: 98.0,
        }
    }

    #[test]
    fn default_inputs_produce_eight_metrics() {
        let report = generate(ReportKind::Weekly, MetricInputs::default());
        assert_eq!(report.metrics.len(), 8);
        assert!(report.summary.contains("Weekly reviews"));
    }

    #[test]
    fn zero_adherence_skips_the_metric() {
        let inputs = MetricInputs {
            medication_adherence: 0.0,
            ..MetricInputs::default()
        };
        let report = generate(ReportKind::Daily, inputs);
        assert_eq!(report.metrics.len(), 7);
        assert!(!report
            .metrics
            .iter()
            .any(|m| m.category == "Medication Adherence"));
    }

    #[test]
    fn excellent_inputs_score_100() {
        let report = generate(ReportKind::Monthly, excellent_inputs());
        assert_eq!(report.overall_score, 100);
        assert!(report.summary.starts_with("Outstanding health profile!"));
        assert!(report.areas_for_improvement.is_empty());
        // Defaults fill in when nothing needs action
        assert_eq!(report.action_plan.len(), 3);
        assert!(report.action_plan[0].contains("Continue maintaining"));
    }

    #[test]
    fn poor_inputs_trigger_action_plan() {
        let inputs = MetricInputs {
            avg_sleep: 5.0,
            avg_water: 1.0,
            avg_steps: 3000.0,
            avg_mood: 4.0,
            avg_stress: 9.0,
            exercise_frequency: 1.0,
            nutrition_score: 40.0,
            medication_adherence: 50.0,
        };
        let report = generate(ReportKind::Weekly, inputs);
        assert_eq!(report.overall_score, 40);
        assert_eq!(report.areas_for_improvement.len(), 7);
        assert!(report.summary.contains("significant room for improvement"));
    }

    #[test]
    fn stress_banding_is_inverted() {
        let inputs = MetricInputs {
            avg_stress: 2.5,
            ..MetricInputs::default()
        };
        let report = generate(ReportKind::Daily, inputs);
        let stress = report
            .metrics
            .iter()
            .find(|m| m.category == "Stress Management")
            .unwrap();
        assert_eq!(stress.status, MetricStatus::Excellent);
    }

    #[test]
    fn overall_score_is_status_average() {
        // Defaults: sleep 7.2 good(80), water 2.1 good(80), steps 8500
        // good(80), mood 6.5 good(80), stress 5.5 fair(60), exercise 3
        // good(80), nutrition 72 good(80), adherence 85 good(80)
        let report = generate(ReportKind::Daily, MetricInputs::default());
        assert_eq!(report.overall_score, 78);
    }
}
