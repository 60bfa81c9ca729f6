//! Action-tag parsing for the multi-action tools.
//!
//! Callers historically send either spaced or underscored spellings of the
//! same action ("check interactions" / "check_interactions"). Spellings are
//! normalized to one canonical tag here, at the boundary; handlers only ever
//! see the enum. Unrecognized tags are reported back as structured error
//! payloads, not transport failures, so the calling agent can recover
//! conversationally.

fn canonical(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

macro_rules! action_enum {
    ($name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn parse(raw: &str) -> Option<Self> {
                match canonical(raw).as_str() {
                    $($tag => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

action_enum!(MedicationAction {
    Add => "add",
    CheckInteractions => "check_interactions",
    GetInfo => "get_info",
});

action_enum!(ExerciseAction {
    CreatePlan => "create_plan",
    LogWorkout => "log_workout",
    GetExerciseInfo => "get_exercise_info",
});

action_enum!(MentalHealthAction {
    TrackMood => "track_mood",
    GetActivity => "get_activity",
    AnalyzeMood => "analyze_mood",
    CrisisSupport => "crisis_support",
    StressManagement => "stress_management",
});

action_enum!(LifestyleAction {
    LogDaily => "log_daily",
    SetGoals => "set_goals",
    GetRecommendations => "get_recommendations",
    AnalyzeTrends => "analyze_trends",
    HabitCoaching => "habit_coaching",
});
