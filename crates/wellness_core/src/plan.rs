//! Third pipeline stage: narrative plan synthesis.
//!
//! Packages the scores and factor lists into a structured summary, hands it
//! to the text-generation capability, sanitizes the streamed narrative, and
//! merges it with the fixed action-template catalogue and alert lines.

use std::time::Duration;

use futures_util::StreamExt;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::profile::HealthProfile;
use crate::sanitize::sanitize_narrative;
use crate::scoring::ScoreBundle;
use crate::{ChatMessage, TextGenerator, WellnessError};

/// Sentinel emitted when no risk factors were found.
pub const NO_ALERTS: &str = "No immediate health alerts identified";

const ANALYST_INSTRUCTIONS: &str = "\
You are a comprehensive health analysis expert who excels at interpreting \
health data and providing actionable recommendations.

Your role is to:
1. Analyze comprehensive health data from multiple sources
2. Identify patterns and correlations between different health metrics
3. Provide personalized, evidence-based recommendations
4. Create structured health improvement plans
5. Highlight areas that need immediate attention

Structure your response with a key metrics summary (overall score, top \
strengths, areas for improvement), personalized recommendations split into \
immediate actions (next 24-48 hours), short-term goals (1-2 weeks) and \
long-term objectives (1-3 months), health alerts, and tracking suggestions.

Guidelines:
- Provide specific, actionable recommendations
- Include timing and measurable targets
- Consider the user's current lifestyle and constraints
- Prioritize safety and evidence-based practices
- Encourage professional consultation when appropriate
- Keep recommendations realistic and achievable";

/// Final output of the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub overall_score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub immediate_actions: Vec<String>,
    pub short_term_goals: Vec<String>,
    pub long_term_objectives: Vec<String>,
    pub health_alerts: Vec<String>,
    pub tracking_suggestions: Vec<String>,
    pub analysis: String,
}

// Summary handed to the text generator. Field order is the prompt's JSON
// order, so it stays fixed.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanContext<'a> {
    scores: &'a crate::scoring::HealthScores,
    user_profile: UserProfileSummary<'a>,
    current_metrics: CurrentMetrics<'a>,
    health_factors: HealthFactors<'a>,
    initial_recommendations: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserProfileSummary<'a> {
    age: &'a str,
    goals: &'a [String],
    concerns: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CurrentMetrics<'a> {
    sleep: &'a str,
    hydration: &'a str,
    activity: &'a str,
    exercise: &'a str,
    mood: &'a str,
    stress: &'a str,
    nutrition: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthFactors<'a> {
    strengths: &'a [String],
    risks: &'a [String],
    symptoms: &'a [String],
    medications: &'a [String],
}

const NOT_TRACKED: &str = "Not tracked";
const EMPTY: &[String] = &[];

fn tracked(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(NOT_TRACKED)
}

fn listed(field: &Option<Vec<String>>) -> &[String] {
    field.as_deref().unwrap_or(EMPTY)
}

/// Render the generation prompt for a profile and its score bundle.
pub fn build_prompt(profile: &HealthProfile, bundle: &ScoreBundle) -> Result<String, WellnessError> {
    let context = PlanContext {
        scores: &bundle.scores,
        user_profile: UserProfileSummary {
            age: profile.age.as_deref().unwrap_or("Not specified"),
            goals: listed(&profile.goals),
            concerns: listed(&profile.concerns),
        },
        current_metrics: CurrentMetrics {
            sleep: tracked(&profile.avg_sleep),
            hydration: tracked(&profile.avg_water),
            activity: tracked(&profile.avg_steps),
            exercise: tracked(&profile.exercise_frequency),
            mood: tracked(&profile.avg_mood),
            stress: tracked(&profile.avg_stress),
            nutrition: tracked(&profile.nutrition_score),
        },
        health_factors: HealthFactors {
            strengths: &bundle.positive_factors,
            risks: &bundle.risk_factors,
            symptoms: listed(&profile.symptoms),
            medications: listed(&profile.medications),
        },
        initial_recommendations: &bundle.recommendations,
    };

    let summary = serde_json::to_string_pretty(&context)
        .map_err(|e| WellnessError::InvalidResponse(e.to_string()))?;

    Ok(format!(
        "Based on the following comprehensive health data, provide a detailed \
health analysis and personalized improvement plan:\n\n{summary}\n\nFocus on:\n\
1. Identifying the most impactful areas for improvement\n\
2. Creating realistic, achievable goals\n\
3. Providing specific, actionable recommendations\n\
4. Considering the user's current lifestyle and constraints\n\
5. Prioritizing safety and evidence-based practices"
    ))
}

fn immediate_actions() -> Vec<String> {
    vec![
        "Start tracking daily water intake with a goal of 2.5L".to_string(),
        "Set a consistent sleep schedule aiming for 7-8 hours".to_string(),
        "Take a 10-minute walk after each meal".to_string(),
    ]
}

fn short_term_goals() -> Vec<String> {
    vec![
        "Increase daily steps to 8,000+ within 2 weeks".to_string(),
        "Establish a 3x/week exercise routine".to_string(),
        "Improve nutrition score to 80+ through meal planning".to_string(),
    ]
}

fn long_term_objectives() -> Vec<String> {
    vec![
        "Achieve overall health score of 85+ within 3 months".to_string(),
        "Maintain consistent healthy habits for 90 days".to_string(),
        "Complete comprehensive health assessment with healthcare provider".to_string(),
    ]
}

fn tracking_suggestions() -> Vec<String> {
    vec![
        "Daily: Water intake, sleep hours, mood rating".to_string(),
        "Weekly: Exercise sessions, weight, energy levels".to_string(),
        "Monthly: Overall health score, goal progress review".to_string(),
    ]
}

/// One alert line per risk factor, plus a consultation line when symptoms
/// were reported; the sentinel when there is nothing to flag.
pub fn build_alerts(bundle: &ScoreBundle, profile: &HealthProfile) -> Vec<String> {
    if bundle.risk_factors.is_empty() {
        return vec![NO_ALERTS.to_string()];
    }
    let mut alerts: Vec<String> = bundle
        .risk_factors
        .iter()
        .map(|risk| format!("Monitor: {risk}"))
        .collect();
    if profile.has_symptoms() {
        alerts.push("Consider professional consultation for reported symptoms".to_string());
    }
    alerts
}

/// Assemble the final report around an already-generated narrative.
pub fn assemble_report(
    profile: &HealthProfile,
    bundle: &ScoreBundle,
    analysis: String,
) -> HealthReport {
    HealthReport {
        overall_score: bundle.scores.overall,
        strengths: bundle.positive_factors.iter().take(3).cloned().collect(),
        improvements: bundle.risk_factors.iter().take(3).cloned().collect(),
        immediate_actions: immediate_actions(),
        short_term_goals: short_term_goals(),
        long_term_objectives: long_term_objectives(),
        health_alerts: build_alerts(bundle, profile),
        tracking_suggestions: tracking_suggestions(),
        analysis,
    }
}

/// Run the narrative stage: prompt the generator, collect the stream under
/// `timeout`, sanitize, and merge into the report.
///
/// Any generation failure, including a stalled stream, surfaces as
/// [`WellnessError::ServiceUnavailable`]; an empty report is never returned
/// in its place.
pub async fn synthesize(
    generator: &dyn TextGenerator,
    timeout: Duration,
    profile: &HealthProfile,
    bundle: &ScoreBundle,
) -> Result<HealthReport, WellnessError> {
    let prompt = build_prompt(profile, bundle)?;
    let messages = vec![
        ChatMessage::system(ANALYST_INSTRUCTIONS),
        ChatMessage::user(prompt),
    ];

    // The bound covers the whole call: opening the request and draining the
    // stream. The upstream capability may hang at either point.
    let generation = async {
        let mut stream = generator
            .stream_text(messages)
            .await
            .map_err(into_unavailable)?;
        let mut text = String::new();
        while let Some(chunk) = stream.next().await {
            text.push_str(&chunk.map_err(into_unavailable)?);
        }
        Ok::<String, WellnessError>(text)
    };

    let narrative = tokio::time::timeout(timeout, generation)
        .await
        .map_err(|_| {
            WellnessError::ServiceUnavailable(format!(
                "generation did not complete within {}s",
                timeout.as_secs()
            ))
        })??;

    let analysis = sanitize_narrative(&narrative);
    tracing::debug!(chars = analysis.len(), "narrative collected");

    Ok(assemble_report(profile, bundle, analysis))
}

fn into_unavailable(err: WellnessError) -> WellnessError {
    match err {
        WellnessError::Http(e) => WellnessError::ServiceUnavailable(e.to_string()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completeness::assess;
    use crate::scoring::calculate_scores;

    fn scored(profile: &HealthProfile) -> ScoreBundle {
        calculate_scores(&assess(profile.clone()))
    }

    #[test]
    fn alerts_use_sentinel_when_no_risks() {
        let profile = HealthProfile::default();
        let bundle = scored(&profile);
        assert_eq!(build_alerts(&bundle, &profile), vec![NO_ALERTS]);
    }

    #[test]
    fn alerts_prefix_each_risk() {
        let profile = HealthProfile {
            avg_steps: Some("less than 3000".into()),
            avg_stress: Some("9-10 (very high)".into()),
            ..Default::default()
        };
        let bundle = scored(&profile);
        let alerts = build_alerts(&bundle, &profile);
        assert_eq!(
            alerts,
            vec![
                "Monitor: Low daily physical activity",
                "Monitor: High stress levels",
            ]
        );
        assert!(!alerts.iter().any(|a| a == NO_ALERTS));
    }

    #[test]
    fn symptom_risks_add_consultation_alert() {
        let profile = HealthProfile {
            symptoms: Some(vec!["fatigue".into()]),
            ..Default::default()
        };
        let bundle = scored(&profile);
        let alerts = build_alerts(&bundle, &profile);
        assert_eq!(alerts.last().map(String::as_str), Some(
            "Consider professional consultation for reported symptoms"
        ));
    }

    #[test]
    fn report_takes_top_three_factors() {
        let profile = HealthProfile {
            avg_sleep: Some("7-8 hours".into()),
            avg_water: Some("2-2.5L".into()),
            avg_steps: Some("10000-12000".into()),
            exercise_frequency: Some("daily".into()),
            avg_mood: Some("9-10 (excellent)".into()),
            ..Default::default()
        };
        let bundle = scored(&profile);
        assert!(bundle.positive_factors.len() > 3);
        let report = assemble_report(&profile, &bundle, String::new());
        assert_eq!(report.strengths.len(), 3);
        assert_eq!(report.strengths, bundle.positive_factors[..3].to_vec());
    }

    #[test]
    fn prompt_embeds_scores_and_placeholders() {
        let profile = HealthProfile {
            avg_sleep: Some("7-8 hours".into()),
            ..Default::default()
        };
        let bundle = scored(&profile);
        let prompt = build_prompt(&profile, &bundle).expect("prompt");
        assert!(prompt.contains("\"sleep\": \"7-8 hours\""));
        assert!(prompt.contains("\"hydration\": \"Not tracked\""));
        assert!(prompt.contains("\"age\": \"Not specified\""));
        assert!(prompt.starts_with("Based on the following comprehensive health data"));
    }
}
