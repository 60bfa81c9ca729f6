//! MCP tool server for the health-and-wellness assistant.
//!
//! Exposes the rule-based health tools plus the three-stage scoring workflow
//! (assess -> score -> plan) over the Model Context Protocol. The narrative
//! stage delegates to the text-generation capability behind
//! [`wellness_core::TextGenerator`]; everything else is deterministic.

use std::sync::Arc;

use rmcp::Json;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    AnnotateAble, GetPromptRequestParams, GetPromptResult, ListPromptsResult, ListResourcesResult,
    PaginatedRequestParams, RawResource, ReadResourceRequestParams, ReadResourceResult,
    ResourceContents,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer};
use rmcp::{prompt, prompt_handler, prompt_router, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use wellness_core::{
    CompletenessReport, HealthProfile, HealthReport, HealthScores, Pipeline, TextGenerator,
    WellnessError,
};

pub mod actions;
pub mod domains;
pub mod error;
mod prompts;

pub use error::{McpError, McpResult};

use actions::{ExerciseAction, LifestyleAction, MedicationAction, MentalHealthAction};
use domains::exercise::{self, FitnessLevel, WorkoutDay, WorkoutProgress};
use domains::lifestyle::{self, GoalKind, LifestyleEntry, LifestyleGoal, SmokingStatus};
use domains::medication::{self, MedicationOutcome};
use domains::mental::{self, ActivityKind, Difficulty, MoodEntry, WellnessActivity};
use domains::nutrition::{self, NutritionAnalysis};
use domains::report::{self, MetricInputs, ProgressReport, ReportKind};
use domains::symptoms::{self, Severity, SymptomAnalysis};

pub const EXERCISE_CATALOG_URI: &str = "wellness://catalog/exercises";

#[derive(Clone)]
pub struct WellnessMcpHandler {
    pipeline: Pipeline,
    tool_router: rmcp::handler::server::tool::ToolRouter<WellnessMcpHandler>,
    prompt_router: rmcp::handler::server::router::prompt::PromptRouter<WellnessMcpHandler>,
}

// === Tool Parameters & Results ===

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysisParams {
    /// Symptoms currently experienced, e.g. "headache", "fatigue"
    pub symptoms: Vec<String>,
    /// How long the symptoms have lasted, e.g. "1-3 days", "more than 1 month"
    pub duration: Option<String>,
    /// Self-assessed severity
    pub severity: Option<Severity>,
    pub age: Option<u32>,
    /// Existing medical conditions, e.g. "asthma"
    pub existing_conditions: Option<Vec<String>>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct SymptomAnalysisResult {
    pub analysis: SymptomAnalysis,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionParams {
    /// Foods consumed, e.g. "chicken breast", "rice"
    pub foods: Vec<String>,
    /// Portion size per food: "small", "normal", "large", "extra large"
    pub portions: Option<Vec<String>>,
    /// "breakfast", "lunch", "dinner", "snack" or "daily"
    pub meal_type: Option<String>,
    /// Health goals, e.g. "weight loss"
    pub user_goals: Option<Vec<String>>,
    /// Dietary restrictions, e.g. "vegetarian"
    pub restrictions: Option<Vec<String>>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionResult {
    pub nutrition_analysis: NutritionAnalysis,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicationParams {
    /// One of "add", "check interactions", "get info"
    pub action: String,
    pub medication_name: Option<String>,
    /// Dosage amount, e.g. "400mg"
    pub dosage: Option<String>,
    /// How often to take it, e.g. "twice daily"
    pub frequency: Option<String>,
    /// Specific times to take the medication, e.g. "08:00"
    pub times: Option<Vec<String>>,
    pub with_food: Option<bool>,
    /// How long to take it, e.g. "7 days", "ongoing"
    pub duration: Option<String>,
    /// Current medications for interaction checking
    pub current_medications: Option<Vec<String>>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct MedicationResult {
    pub result: MedicationOutcome,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseParams {
    /// One of "create plan", "log workout", "get exercise info"
    pub action: String,
    pub fitness_level: Option<FitnessLevel>,
    /// Fitness goals, e.g. "weight loss", "endurance"
    pub goals: Option<Vec<String>>,
    /// Available workout time in minutes
    pub available_time: Option<u32>,
    /// Available equipment, e.g. "dumbbells", "yoga mat"
    pub equipment: Option<Vec<String>>,
    /// Exercise preferences, e.g. "low impact", "home workouts"
    pub preferences: Option<Vec<String>>,
    /// Specific exercise to get information about
    pub exercise_name: Option<String>,
    pub workout_completed: Option<bool>,
    /// Actual workout duration in minutes
    pub duration: Option<u32>,
}

#[derive(Debug, Default, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseOutcome {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_plan: Option<Vec<WorkoutDay>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<WorkoutProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ExerciseResult {
    pub result: ExerciseOutcome,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MentalHealthParams {
    /// One of "track mood", "get activity", "analyze mood", "crisis support",
    /// "stress management"
    pub action: String,
    /// Current mood on scale 1-10
    pub mood: Option<u8>,
    /// Current emotions, e.g. "anxious", "content"
    pub emotions: Option<Vec<String>>,
    /// Current stress level 1-10
    pub stress_level: Option<u8>,
    pub notes: Option<String>,
    /// What triggered the current state, e.g. "work pressure"
    pub triggers: Option<Vec<String>>,
    pub activity_type: Option<ActivityKind>,
    /// Available time for an activity in minutes
    pub available_time: Option<u32>,
    pub experience_level: Option<Difficulty>,
}

#[derive(Debug, Default, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MentalHealthOutcome {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_entry: Option<MoodEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<WellnessActivity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct MentalHealthResult {
    pub result: MentalHealthOutcome,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleParams {
    /// One of "log daily", "set goals", "get recommendations",
    /// "analyze trends", "habit coaching"
    pub action: String,
    /// Water intake in liters
    pub water_intake: Option<f64>,
    pub sleep_hours: Option<f64>,
    /// Sleep quality rating 1-10
    pub sleep_quality: Option<u8>,
    pub steps: Option<u32>,
    /// Screen time in hours
    pub screen_time: Option<f64>,
    pub smoking_status: Option<SmokingStatus>,
    pub alcohol_units: Option<f64>,
    /// Caffeine intake in mg
    pub caffeine_intake: Option<f64>,
    pub notes: Option<String>,
    pub goal_type: Option<GoalKind>,
    pub goal_target: Option<f64>,
    /// Which habit to improve, e.g. "exercise", "screen time"
    pub habit_to_improve: Option<String>,
}

#[derive(Debug, Default, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleOutcome {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifestyle_entry: Option<LifestyleEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<LifestyleGoal>>,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct LifestyleResult {
    pub result: LifestyleOutcome,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthReportParams {
    pub report_type: ReportKind,
    /// Metrics to include; currently informational only
    pub include_metrics: Option<Vec<String>>,
    /// Days covered by the report, e.g. "30"
    pub timeframe: Option<String>,
    pub avg_sleep: Option<f64>,
    pub avg_water: Option<f64>,
    pub avg_steps: Option<f64>,
    /// Average mood rating (1-10)
    pub avg_mood: Option<f64>,
    /// Average stress level (1-10)
    pub avg_stress: Option<f64>,
    /// Exercise sessions per week
    pub exercise_frequency: Option<f64>,
    /// Average nutrition score (1-100)
    pub nutrition_score: Option<f64>,
    /// Medication adherence percentage
    pub medication_adherence: Option<f64>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthReportResult {
    pub health_report: ProgressReport,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct AssessParams {
    pub profile: Option<HealthProfile>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreParams {
    pub profile: Option<HealthProfile>,
    pub completeness_percent: Option<u8>,
    pub missing_areas: Option<Vec<String>>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreStageResult {
    pub scores: HealthScores,
    pub risk_factors: Vec<String>,
    pub positive_factors: Vec<String>,
    pub recommendations: Vec<String>,
    /// Passed through for the plan stage.
    pub profile: HealthProfile,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanParams {
    pub profile: Option<HealthProfile>,
    pub scores: Option<HealthScores>,
    pub risk_factors: Option<Vec<String>>,
    pub positive_factors: Option<Vec<String>>,
    pub recommendations: Option<Vec<String>>,
}

// === Prompt Parameters ===

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DailyCheckinParams {
    pub focus: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct HealthAssessmentParams {
    pub goals: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SymptomTriageParams {
    pub symptoms: Option<String>,
}

#[tool_router]
#[prompt_router]
impl WellnessMcpHandler {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self::with_pipeline(Pipeline::new(generator))
    }

    pub fn with_pipeline(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    pub fn tool_count(&self) -> usize {
        self.tool_router.list_all().len()
    }

    pub fn prompt_count(&self) -> usize {
        self.prompt_router.list_all().len()
    }

    // === Agent Tools ===

    #[tool(
        name = "analyze_symptoms",
        description = "Analyze reported symptoms and provide preliminary health insights and recommendations"
    )]
    async fn analyze_symptoms(
        &self,
        params: Parameters<SymptomAnalysisParams>,
    ) -> Result<Json<SymptomAnalysisResult>, String> {
        let p = params.0;
        let analysis = symptoms::analyze(p.symptoms, p.duration.as_deref(), p.severity);
        Ok(Json(SymptomAnalysisResult { analysis }))
    }

    #[tool(
        name = "analyze_nutrition",
        description = "Analyze nutritional intake and provide dietary recommendations"
    )]
    async fn analyze_nutrition(
        &self,
        params: Parameters<NutritionParams>,
    ) -> Result<Json<NutritionResult>, String> {
        let p = params.0;
        let nutrition_analysis = nutrition::analyze(
            &p.foods,
            p.portions.as_deref(),
            p.meal_type.as_deref(),
            p.user_goals.as_deref(),
        );
        Ok(Json(NutritionResult { nutrition_analysis }))
    }

    #[tool(
        name = "medication_reminder",
        description = "Manage medication schedules, reminders, and provide medication information"
    )]
    async fn medication_reminder(
        &self,
        params: Parameters<MedicationParams>,
    ) -> Result<Json<MedicationResult>, String> {
        let p = params.0;
        let result = match MedicationAction::parse(&p.action) {
            Some(MedicationAction::Add) => medication::add(
                p.medication_name.as_deref(),
                p.dosage.as_deref(),
                p.frequency.as_deref(),
                p.times,
                p.with_food,
                p.duration.as_deref(),
            ),
            Some(MedicationAction::CheckInteractions) => {
                medication::check_interactions(p.current_medications.as_deref())
            }
            Some(MedicationAction::GetInfo) => medication::get_info(p.medication_name.as_deref()),
            None => MedicationOutcome::error("Invalid action specified."),
        };
        Ok(Json(MedicationResult { result }))
    }

    #[tool(
        name = "exercise_plan",
        description = "Create personalized exercise plans and track workout progress"
    )]
    async fn exercise_plan(
        &self,
        params: Parameters<ExerciseParams>,
    ) -> Result<Json<ExerciseResult>, String> {
        let p = params.0;
        let result = match ExerciseAction::parse(&p.action) {
            Some(ExerciseAction::CreatePlan) => {
                let (plan, recommendations) = exercise::create_weekly_plan(
                    p.fitness_level,
                    p.available_time,
                    p.goals.as_deref(),
                    p.equipment.as_deref(),
                );
                ExerciseOutcome {
                    action: "plan_created".to_string(),
                    workout_plan: Some(plan),
                    recommendations: Some(recommendations),
                    ..Default::default()
                }
            }
            Some(ExerciseAction::GetExerciseInfo) => match &p.exercise_name {
                Some(name) => match exercise::exercise_info(name) {
                    Ok(info) => ExerciseOutcome {
                        action: "info_provided".to_string(),
                        exercise_info: Some(info),
                        ..Default::default()
                    },
                    Err(not_found) => ExerciseOutcome {
                        action: "info_not_found".to_string(),
                        exercise_info: Some(not_found),
                        ..Default::default()
                    },
                },
                None => ExerciseOutcome {
                    action: "error".to_string(),
                    exercise_info: Some("Exercise name is required to get information.".to_string()),
                    ..Default::default()
                },
            },
            Some(ExerciseAction::LogWorkout) => {
                let (progress, recommendations) =
                    exercise::log_workout(p.workout_completed, p.duration);
                ExerciseOutcome {
                    action: "workout_logged".to_string(),
                    progress: Some(progress),
                    recommendations: Some(recommendations),
                    ..Default::default()
                }
            }
            None => ExerciseOutcome {
                action: "error".to_string(),
                recommendations: Some(vec!["Invalid action specified.".to_string()]),
                ..Default::default()
            },
        };
        Ok(Json(ExerciseResult { result }))
    }

    #[tool(
        name = "mental_health_support",
        description = "Provide mental health support, mood tracking, and wellness activities"
    )]
    async fn mental_health_support(
        &self,
        params: Parameters<MentalHealthParams>,
    ) -> Result<Json<MentalHealthResult>, String> {
        let p = params.0;
        let result = match MentalHealthAction::parse(&p.action) {
            Some(MentalHealthAction::TrackMood) => match p.mood {
                Some(mood) => {
                    let (entry, recommendations, resources) = mental::track_mood(
                        mood,
                        p.emotions,
                        p.stress_level,
                        p.notes,
                        p.triggers,
                    );
                    MentalHealthOutcome {
                        action: "mood_tracked".to_string(),
                        mood_entry: Some(entry),
                        recommendations,
                        resources: if resources.is_empty() { None } else { Some(resources) },
                        ..Default::default()
                    }
                }
                None => MentalHealthOutcome {
                    action: "error".to_string(),
                    recommendations: vec![
                        "Mood rating (1-10) is required for mood tracking.".to_string(),
                    ],
                    ..Default::default()
                },
            },
            Some(MentalHealthAction::GetActivity) => {
                let (activity, recommendations) =
                    mental::pick_activity(p.activity_type, p.available_time, p.experience_level);
                MentalHealthOutcome {
                    action: "activity_provided".to_string(),
                    activity: Some(activity.clone()),
                    recommendations,
                    ..Default::default()
                }
            }
            Some(MentalHealthAction::StressManagement) => {
                let (activity, recommendations, analysis) = mental::stress_management();
                MentalHealthOutcome {
                    action: "stress_management_provided".to_string(),
                    activity: Some(activity.clone()),
                    analysis: Some(analysis),
                    recommendations,
                    ..Default::default()
                }
            }
            Some(MentalHealthAction::CrisisSupport) => {
                let (recommendations, resources, analysis) = mental::crisis_support();
                MentalHealthOutcome {
                    action: "crisis_support_provided".to_string(),
                    analysis: Some(analysis),
                    recommendations,
                    resources: Some(resources),
                    ..Default::default()
                }
            }
            Some(MentalHealthAction::AnalyzeMood) => {
                let (analysis, recommendations) = mental::mood_analysis_guidance();
                MentalHealthOutcome {
                    action: "mood_analysis_provided".to_string(),
                    analysis: Some(analysis),
                    recommendations,
                    ..Default::default()
                }
            }
            None => MentalHealthOutcome {
                action: "error".to_string(),
                recommendations: vec!["Invalid action specified.".to_string()],
                ..Default::default()
            },
        };
        Ok(Json(MentalHealthResult { result }))
    }

    #[tool(
        name = "lifestyle_tracking",
        description = "Track daily lifestyle habits and provide personalized recommendations for improvement"
    )]
    async fn lifestyle_tracking(
        &self,
        params: Parameters<LifestyleParams>,
    ) -> Result<Json<LifestyleResult>, String> {
        let p = params.0;
        let result = match LifestyleAction::parse(&p.action) {
            Some(LifestyleAction::LogDaily) => {
                let (entry, recommendations, tips) = lifestyle::log_daily(lifestyle::DailyInput {
                    water_intake: p.water_intake,
                    sleep_hours: p.sleep_hours,
                    sleep_quality: p.sleep_quality,
                    steps: p.steps,
                    screen_time: p.screen_time,
                    smoking_status: p.smoking_status,
                    alcohol_units: p.alcohol_units,
                    caffeine_intake: p.caffeine_intake,
                    notes: p.notes,
                });
                LifestyleOutcome {
                    action: "daily_logged".to_string(),
                    lifestyle_entry: Some(entry),
                    recommendations,
                    tips: Some(tips),
                    ..Default::default()
                }
            }
            Some(LifestyleAction::SetGoals) => match (p.goal_type, p.goal_target) {
                (Some(kind), Some(target)) => {
                    let (goal, recommendations) = lifestyle::set_goal(kind, target);
                    LifestyleOutcome {
                        action: "goal_set".to_string(),
                        goals: Some(vec![goal]),
                        recommendations,
                        ..Default::default()
                    }
                }
                _ => LifestyleOutcome {
                    action: "error".to_string(),
                    recommendations: vec![
                        "Goal type and target value are required to set goals.".to_string(),
                    ],
                    ..Default::default()
                },
            },
            Some(LifestyleAction::GetRecommendations) => {
                let (recommendations, tips) = lifestyle::general_recommendations();
                LifestyleOutcome {
                    action: "recommendations_provided".to_string(),
                    recommendations,
                    tips: Some(tips),
                    ..Default::default()
                }
            }
            Some(LifestyleAction::AnalyzeTrends) => {
                let (analysis, recommendations) = lifestyle::trend_analysis();
                LifestyleOutcome {
                    action: "trends_analyzed".to_string(),
                    analysis: Some(analysis),
                    recommendations,
                    ..Default::default()
                }
            }
            Some(LifestyleAction::HabitCoaching) => {
                let (recommendations, tips, analysis) =
                    lifestyle::habit_coaching(p.habit_to_improve.as_deref());
                LifestyleOutcome {
                    action: "habit_coaching_provided".to_string(),
                    recommendations,
                    tips: Some(tips),
                    analysis: Some(analysis),
                    ..Default::default()
                }
            }
            None => LifestyleOutcome {
                action: "error".to_string(),
                recommendations: vec!["Invalid action specified.".to_string()],
                ..Default::default()
            },
        };
        Ok(Json(LifestyleResult { result }))
    }

    #[tool(
        name = "generate_health_report",
        description = "Generate comprehensive health reports and track progress over time"
    )]
    async fn generate_health_report(
        &self,
        params: Parameters<HealthReportParams>,
    ) -> Result<Json<HealthReportResult>, String> {
        let p = params.0;
        let defaults = MetricInputs::default();
        let inputs = MetricInputs {
            avg_sleep: p.avg_sleep.unwrap_or(defaults.avg_sleep),
            avg_water: p.avg_water.unwrap_or(defaults.avg_water),
            avg_steps: p.avg_steps.unwrap_or(defaults.avg_steps),
            avg_mood: p.avg_mood.unwrap_or(defaults.avg_mood),
            avg_stress: p.avg_stress.unwrap_or(defaults.avg_stress),
            exercise_frequency: p.exercise_frequency.unwrap_or(defaults.exercise_frequency),
            nutrition_score: p.nutrition_score.unwrap_or(defaults.nutrition_score),
            medication_adherence: p
                .medication_adherence
                .unwrap_or(defaults.medication_adherence),
        };
        let health_report = report::generate(p.report_type, inputs);
        Ok(Json(HealthReportResult { health_report }))
    }

    // === Workflow Stages ===

    #[tool(
        name = "assess_health_data",
        description = "Collect and validate comprehensive health data from user input"
    )]
    async fn assess_health_data(
        &self,
        params: Parameters<AssessParams>,
    ) -> Result<Json<CompletenessReport>, String> {
        let profile = params
            .0
            .profile
            .ok_or(McpError::Pipeline(WellnessError::MissingInput("health profile")))?;
        Ok(Json(self.pipeline.assess(profile)))
    }

    #[tool(
        name = "calculate_health_scores",
        description = "Calculate comprehensive health scores and identify patterns"
    )]
    async fn calculate_health_scores(
        &self,
        params: Parameters<ScoreParams>,
    ) -> Result<Json<ScoreStageResult>, String> {
        let p = params.0;
        let profile = p
            .profile
            .ok_or(McpError::Pipeline(WellnessError::MissingInput("validated profile")))?;
        let report = CompletenessReport {
            profile,
            completeness_percent: p.completeness_percent.unwrap_or(0),
            missing_areas: p.missing_areas.unwrap_or_default(),
        };
        let bundle = self.pipeline.score(&report);
        Ok(Json(ScoreStageResult {
            scores: bundle.scores,
            risk_factors: bundle.risk_factors,
            positive_factors: bundle.positive_factors,
            recommendations: bundle.recommendations,
            profile: report.profile,
        }))
    }

    #[tool(
        name = "generate_health_plan",
        description = "Generate comprehensive health improvement plan using AI analysis"
    )]
    async fn generate_health_plan(
        &self,
        params: Parameters<PlanParams>,
    ) -> Result<Json<HealthReport>, String> {
        let p = params.0;
        let profile = p
            .profile
            .ok_or(McpError::Pipeline(WellnessError::MissingInput("validated profile")))?;
        let scores = p
            .scores
            .ok_or(McpError::Pipeline(WellnessError::MissingInput("health scores")))?;
        let bundle = wellness_core::ScoreBundle {
            scores,
            risk_factors: p.risk_factors.unwrap_or_default(),
            positive_factors: p.positive_factors.unwrap_or_default(),
            recommendations: p.recommendations.unwrap_or_default(),
        };
        let report = self
            .pipeline
            .synthesize(&profile, &bundle)
            .await
            .map_err(|e| e.to_string())?;
        Ok(Json(report))
    }

    #[tool(
        name = "run_health_workflow",
        description = "Run the full health workflow: validate data, score it, and generate a personalized plan"
    )]
    async fn run_health_workflow(
        &self,
        params: Parameters<HealthProfile>,
    ) -> Result<Json<HealthReport>, String> {
        metrics::counter!("wellness_workflow_runs_total").increment(1);
        match self.pipeline.run(params.0).await {
            Ok(report) => Ok(Json(report)),
            Err(e) => {
                metrics::counter!("wellness_workflow_failures_total").increment(1);
                Err(e.to_string())
            }
        }
    }

    /// Full pipeline entry point for in-process callers (HTTP server, tests).
    pub async fn run_workflow(&self, profile: HealthProfile) -> Result<HealthReport, WellnessError> {
        self.pipeline.run(profile).await
    }

    // === MCP Prompts ===

    /// Short guided check-in using the tracking tools
    #[prompt(
        name = "daily-checkin",
        description = "Log today's habits and mood, then get quick feedback"
    )]
    async fn daily_checkin(
        &self,
        params: Parameters<DailyCheckinParams>,
    ) -> GetPromptResult {
        let focus = params.0.focus.unwrap_or_else(|| "overall wellness".to_string());
        prompts::daily_checkin_prompt(&focus)
    }

    /// Full questionnaire-driven assessment through the scoring workflow
    #[prompt(
        name = "health-assessment",
        description = "Run a comprehensive health assessment and improvement plan"
    )]
    async fn health_assessment(
        &self,
        params: Parameters<HealthAssessmentParams>,
    ) -> GetPromptResult {
        let goals = params.0.goals.unwrap_or_else(|| "general health".to_string());
        prompts::health_assessment_prompt(&goals)
    }

    /// Symptom-first triage conversation
    #[prompt(
        name = "symptom-triage",
        description = "Triage reported symptoms and decide on next steps"
    )]
    async fn symptom_triage(
        &self,
        params: Parameters<SymptomTriageParams>,
    ) -> GetPromptResult {
        prompts::symptom_triage_prompt(params.0.symptoms.as_deref())
    }
}

#[tool_handler]
#[prompt_handler(router = self.prompt_router)]
impl rmcp::ServerHandler for WellnessMcpHandler {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo::new(
            rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .enable_resources()
                .build(),
        )
        .with_instructions(
            "Health & Wellness MCP server - provides tools for symptom triage, nutrition \
             scoring, medication schedules, exercise planning, mood support, lifestyle \
             tracking, and an end-to-end health scoring workflow. The tools offer general \
             wellness guidance, not medical diagnosis; recommend professional consultation \
             for serious symptoms.",
        )
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        let resource = RawResource::new(EXERCISE_CATALOG_URI, "Exercise Catalog");

        let mut res = resource.no_annotation();
        res.description = Some(
            "All exercises the planner can schedule, with instructions, intensity, and equipment"
                .to_string(),
        );
        res.mime_type = Some("application/json".to_string());

        Ok(ListResourcesResult {
            resources: vec![res],
            next_cursor: None,
            meta: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        if request.uri == EXERCISE_CATALOG_URI {
            let text = serde_json::to_string_pretty(exercise::EXERCISE_CATALOG)
                .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
            Ok(ReadResourceResult::new(vec![
                ResourceContents::TextResourceContents {
                    uri: request.uri.clone(),
                    mime_type: Some("application/json".to_string()),
                    text,
                    meta: None,
                },
            ]))
        } else {
            Err(ErrorData::invalid_params(
                format!("Unknown resource URI: {}", request.uri),
                None,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellness_core::http_client::ReqwestTextGenerator;

    #[tokio::test]
    async fn handler_creation() {
        let generator = ReqwestTextGenerator::new("http://localhost/api", "test-model", None);
        let handler = WellnessMcpHandler::new(Arc::new(generator));
        let _clone = handler.clone();
        let tools = handler.tool_router.list_all();
        assert!(tools.iter().any(|t| t.name == "analyze_symptoms"));
        assert!(tools.iter().any(|t| t.name == "analyze_nutrition"));
        assert!(tools.iter().any(|t| t.name == "medication_reminder"));
        assert!(tools.iter().any(|t| t.name == "exercise_plan"));
        assert!(tools.iter().any(|t| t.name == "mental_health_support"));
        assert!(tools.iter().any(|t| t.name == "lifestyle_tracking"));
        assert!(tools.iter().any(|t| t.name == "generate_health_report"));
        assert!(tools.iter().any(|t| t.name == "assess_health_data"));
        assert!(tools.iter().any(|t| t.name == "calculate_health_scores"));
        assert!(tools.iter().any(|t| t.name == "generate_health_plan"));
        assert!(tools.iter().any(|t| t.name == "run_health_workflow"));
        assert_eq!(handler.prompt_count(), 3);
    }
}
