//! Daily habit logging, goal setting, and habit coaching.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// Recommended daily values the feedback rules compare against.
const RECOMMENDED_WATER_LITERS: f64 = 2.5;
const RECOMMENDED_STEPS: u32 = 10000;
const CAFFEINE_LIMIT_MG: f64 = 400.0;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SmokingStatus {
    #[default]
    None,
    Reduced,
    Normal,
    Increased,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    Water,
    Sleep,
    Steps,
    ScreenTime,
    Smoking,
    Alcohol,
}

#[derive(Clone, Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleEntry {
    pub date: String,
    pub water_intake: f64,
    pub sleep_hours: f64,
    pub sleep_quality: u8,
    pub steps: u32,
    pub screen_time: f64,
    pub smoking_status: SmokingStatus,
    pub alcohol_units: f64,
    pub caffeine_intake: f64,
    pub notes: String,
}

#[derive(Clone, Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleGoal {
    #[serde(rename = "type")]
    pub kind: GoalKind,
    pub target: f64,
    pub current: f64,
    pub unit: String,
    pub progress: f64,
}

pub struct DailyInput {
    pub water_intake: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub sleep_quality: Option<u8>,
    pub steps: Option<u32>,
    pub screen_time: Option<f64>,
    pub smoking_status: Option<SmokingStatus>,
    pub alcohol_units: Option<f64>,
    pub caffeine_intake: Option<f64>,
    pub notes: Option<String>,
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Log one day of habits and return per-metric feedback.
pub fn log_daily(input: DailyInput) -> (LifestyleEntry, Vec<String>, Vec<String>) {
    let entry = LifestyleEntry {
        date: today(),
        water_intake: input.water_intake.unwrap_or(0.0),
        sleep_hours: input.sleep_hours.unwrap_or(0.0),
        sleep_quality: input.sleep_quality.unwrap_or(5),
        steps: input.steps.unwrap_or(0),
        screen_time: input.screen_time.unwrap_or(0.0),
        smoking_status: input.smoking_status.unwrap_or_default(),
        alcohol_units: input.alcohol_units.unwrap_or(0.0),
        caffeine_intake: input.caffeine_intake.unwrap_or(0.0),
        notes: input.notes.unwrap_or_default(),
    };

    let mut recommendations = Vec::new();
    let mut tips = Vec::new();

    if entry.water_intake < RECOMMENDED_WATER_LITERS {
        let deficit = RECOMMENDED_WATER_LITERS - entry.water_intake;
        recommendations.push(format!(
            "You're {deficit:.1}L below the recommended daily water intake. Try to drink more \
water throughout the day."
        ));
        tips.push("Keep a water bottle nearby and set hourly reminders to drink water".to_string());
    } else {
        recommendations.push("Great job staying hydrated! Your water intake looks good.".to_string());
    }

    if entry.sleep_hours < 7.0 {
        recommendations.push(
            "You're getting less than the recommended 7-9 hours of sleep. Consider improving \
your sleep schedule."
                .to_string(),
        );
        tips.push("Try to go to bed 30 minutes earlier tonight".to_string());
        tips.push("Avoid screens 1 hour before bedtime".to_string());
    } else if entry.sleep_hours > 9.0 {
        recommendations.push(
            "You're sleeping more than 9 hours. While rest is important, excessive sleep might \
indicate other health issues."
                .to_string(),
        );
    } else {
        recommendations.push("Your sleep duration looks good!".to_string());
    }

    if entry.sleep_quality <= 5 {
        recommendations.push(
            "Your sleep quality could be improved. Consider factors like room temperature, \
noise, and stress levels."
                .to_string(),
        );
        tips.push("Keep your bedroom cool (60-67\u{b0}F) and dark".to_string());
        tips.push("Try relaxation techniques before bed".to_string());
    }

    if entry.steps < 8000 {
        let steps_needed = RECOMMENDED_STEPS - entry.steps;
        recommendations.push(format!(
            "You're {steps_needed} steps below the daily goal. Try to incorporate more walking \
into your day."
        ));
        tips.push("Take the stairs instead of elevators".to_string());
        tips.push("Park farther away or get off public transport one stop early".to_string());
    } else if entry.steps >= RECOMMENDED_STEPS {
        recommendations.push("Excellent! You've reached your daily step goal.".to_string());
    }

    if entry.screen_time > 4.0 {
        recommendations.push(
            "Your screen time is quite high. Consider taking regular breaks and limiting \
recreational screen use."
                .to_string(),
        );
        tips.push(
            "Follow the 20-20-20 rule: every 20 minutes, look at something 20 feet away for 20 \
seconds"
                .to_string(),
        );
        tips.push("Set specific times for checking social media and emails".to_string());
    }

    if entry.smoking_status != SmokingStatus::None {
        recommendations
            .push("Consider reducing or quitting smoking for better health outcomes.".to_string());
        tips.push("Speak with a healthcare provider about smoking cessation programs".to_string());
        tips.push("Try nicotine replacement therapy or other cessation aids".to_string());
    }

    if entry.alcohol_units > 2.0 {
        recommendations
            .push("Your alcohol intake is above moderate levels. Consider reducing consumption.".to_string());
        tips.push("Try alcohol-free days during the week".to_string());
        tips.push("Replace alcoholic drinks with sparkling water or herbal tea".to_string());
    }

    if entry.caffeine_intake > CAFFEINE_LIMIT_MG {
        recommendations.push(
            "Your caffeine intake is above the recommended daily limit. Consider reducing \
consumption."
                .to_string(),
        );
        tips.push("Switch to decaf coffee or herbal tea in the afternoon".to_string());
        tips.push("Gradually reduce caffeine to avoid withdrawal symptoms".to_string());
    }

    (entry, recommendations, tips)
}

/// Register a goal and return starting advice for it. Progress starts at
/// zero; there is no stored history to resume from.
pub fn set_goal(kind: GoalKind, target: f64) -> (LifestyleGoal, Vec<String>) {
    let unit = match kind {
        GoalKind::Water => "liters",
        GoalKind::Sleep => "hours",
        GoalKind::Steps => "steps",
        GoalKind::ScreenTime => "hours",
        GoalKind::Smoking => "cigarettes",
        GoalKind::Alcohol => "units",
    };

    let goal = LifestyleGoal {
        kind,
        target,
        current: 0.0,
        unit: unit.to_string(),
        progress: 0.0,
    };

    let recommendations = match kind {
        GoalKind::Water => vec![
            "Start by drinking a glass of water when you wake up".to_string(),
            "Set reminders throughout the day to drink water".to_string(),
        ],
        GoalKind::Sleep => vec![
            "Establish a consistent bedtime routine".to_string(),
            "Create a sleep-friendly environment (cool, dark, quiet)".to_string(),
        ],
        GoalKind::Steps => vec![
            "Start with small increases (500-1000 steps per week)".to_string(),
            "Find activities you enjoy like dancing, hiking, or playing sports".to_string(),
        ],
        GoalKind::ScreenTime => vec![
            "Use app timers to limit recreational screen use".to_string(),
            "Create phone-free zones in your home".to_string(),
        ],
        GoalKind::Smoking => vec![
            "Set a quit date and tell friends and family for support".to_string(),
            "Identify your smoking triggers and plan alternatives".to_string(),
        ],
        GoalKind::Alcohol => vec![
            "Track your drinks and set specific limits".to_string(),
            "Plan alcohol-free activities and social events".to_string(),
        ],
    };

    (goal, recommendations)
}

pub fn general_recommendations() -> (Vec<String>, Vec<String>) {
    let recommendations = [
        "Stay hydrated by drinking water regularly throughout the day",
        "Aim for 7-9 hours of quality sleep each night",
        "Incorporate at least 30 minutes of physical activity daily",
        "Limit recreational screen time, especially before bedtime",
        "Practice stress management techniques like deep breathing or meditation",
        "Eat a balanced diet rich in fruits, vegetables, and whole grains",
        "Maintain social connections and engage in meaningful activities",
        "Take regular breaks from work and practice mindfulness",
    ];
    let habits = [
        "Start your day with a glass of water and some sunlight exposure",
        "Take short walks during work breaks",
        "Practice gratitude by writing down 3 things you're thankful for",
        "Prepare healthy snacks in advance to avoid processed foods",
        "Set a consistent sleep schedule, even on weekends",
        "Limit caffeine intake after 2 PM for better sleep",
        "Practice the 20-20-20 rule for eye health during screen use",
        "End your day with a relaxing activity like reading or gentle stretching",
    ];
    (
        recommendations[..5].iter().map(|r| r.to_string()).collect(),
        habits[..5].iter().map(|h| h.to_string()).collect(),
    )
}

pub fn trend_analysis() -> (String, Vec<String>) {
    let analysis = "Lifestyle Trend Analysis:

Regular tracking of your daily habits provides valuable insights into your health patterns. \
Here's what to look for:

SLEEP PATTERNS:
- Consistency in bedtime and wake time
- Correlation between sleep quality and daily activities
- Impact of screen time and caffeine on sleep

HYDRATION TRENDS:
- Daily water intake consistency
- Relationship between hydration and energy levels
- Seasonal variations in water consumption

ACTIVITY LEVELS:
- Weekly step count patterns
- Correlation between activity and mood/sleep
- Impact of weather and schedule on movement

SCREEN TIME HABITS:
- Daily and weekly screen time patterns
- Relationship between screen time and sleep quality
- Productivity correlation with screen time limits

Key insights emerge after 2-4 weeks of consistent tracking. Use this data to make informed \
adjustments to your lifestyle."
        .to_string();

    let recommendations = vec![
        "Track consistently for at least 2 weeks to identify meaningful patterns".to_string(),
        "Look for correlations between different lifestyle factors".to_string(),
        "Use trend data to set realistic and achievable goals".to_string(),
        "Share your tracking data with healthcare providers for personalized advice".to_string(),
    ];

    (analysis, recommendations)
}

pub fn habit_coaching(habit: Option<&str>) -> (Vec<String>, Vec<String>, String) {
    let habit = habit.map(|h| h.to_lowercase()).unwrap_or_else(|| "general wellness".to_string());

    // Exact-key lookup: anything outside the strategy table gets the
    // generic habit-building plan.
    let strategies: Vec<String> = match habit.as_str() {
        "water" => vec![
            "Start with one extra glass per day and gradually increase",
            "Use a marked water bottle to track intake visually",
            "Set phone reminders every 2 hours to drink water",
            "Drink a glass of water before each meal",
        ],
        "sleep" => vec![
            "Go to bed 15 minutes earlier each week until you reach your goal",
            "Create a wind-down routine starting 1 hour before bed",
            "Keep your bedroom cool (60-67\u{b0}F) and use blackout curtains",
            "Avoid caffeine after 2 PM and large meals before bedtime",
        ],
        "exercise" => vec![
            "Start with 10-minute walks and gradually increase duration",
            "Schedule workouts like important appointments",
            "Find an activity you enjoy - it shouldn't feel like punishment",
            "Track your progress and celebrate small wins",
        ],
        "screen time" => vec![
            "Use app timers to set daily limits on recreational apps",
            "Create phone-free zones (bedroom, dining table)",
            "Replace one hour of screen time with a physical activity",
            "Use the \"Do Not Disturb\" feature during focused work or family time",
        ],
        "smoking" => vec![
            "Set a quit date and remove all smoking materials from your environment",
            "Identify your triggers and plan alternative responses",
            "Consider nicotine replacement therapy or prescription medications",
            "Join a support group or use a quit-smoking app for accountability",
        ],
        _ => vec![
            "Start small - make tiny changes that are easy to maintain",
            "Be consistent - do the new habit at the same time each day",
            "Track your progress - use a habit tracker or journal",
            "Be patient with yourself - habits take 21-66 days to form",
            "Focus on one habit at a time for better success rates",
        ],
    }
    .into_iter()
    .map(String::from)
    .collect();

    let tips = vec![
        "Use the \"2-minute rule\" - make the habit so easy it takes less than 2 minutes"
            .to_string(),
        "Stack new habits onto existing ones (habit stacking)".to_string(),
        "Prepare your environment to make good habits easier".to_string(),
        "Find an accountability partner or join a community with similar goals".to_string(),
    ];

    let analysis = "Habit change is a gradual process that requires patience and consistency. \
Focus on progress, not perfection, and remember that small, sustainable changes lead to lasting \
results."
        .to_string();

    (strategies, tips, analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_input() -> DailyInput {
        DailyInput {
            water_intake: None,
            sleep_hours: None,
            sleep_quality: None,
            steps: None,
            screen_time: None,
            smoking_status: None,
            alcohol_units: None,
            caffeine_intake: None,
            notes: None,
        }
    }

    #[test]
    fn low_water_reports_deficit() {
        let (entry, recommendations, tips) = log_daily(DailyInput {
            water_intake: Some(1.5),
            ..empty_input()
        });
        assert_eq!(entry.water_intake, 1.5);
        assert!(recommendations[0].contains("1.0L below"));
        assert!(tips[0].contains("water bottle"));
    }

    #[test]
    fn good_metrics_get_praise() {
        let (_, recommendations, _) = log_daily(DailyInput {
            water_intake: Some(3.0),
            sleep_hours: Some(8.0),
            sleep_quality: Some(8),
            steps: Some(12000),
            ..empty_input()
        });
        assert!(recommendations.iter().any(|r| r.contains("staying hydrated")));
        assert!(recommendations.iter().any(|r| r == "Your sleep duration looks good!"));
        assert!(recommendations.iter().any(|r| r.contains("daily step goal")));
    }

    #[test]
    fn step_deficit_counts_to_ten_thousand() {
        let (_, recommendations, _) = log_daily(DailyInput {
            steps: Some(6000),
            ..empty_input()
        });
        assert!(recommendations.iter().any(|r| r.contains("4000 steps below")));
    }

    #[test]
    fn middling_steps_say_nothing() {
        let (_, recommendations, _) = log_daily(DailyInput {
            water_intake: Some(3.0),
            sleep_hours: Some(8.0),
            sleep_quality: Some(8),
            steps: Some(9000),
            ..empty_input()
        });
        assert!(!recommendations.iter().any(|r| r.contains("step")));
    }

    #[test]
    fn vice_metrics_trigger_warnings() {
        let (_, recommendations, tips) = log_daily(DailyInput {
            smoking_status: Some(SmokingStatus::Normal),
            alcohol_units: Some(4.0),
            caffeine_intake: Some(600.0),
            screen_time: Some(6.0),
            ..empty_input()
        });
        assert!(recommendations.iter().any(|r| r.contains("smoking")));
        assert!(recommendations.iter().any(|r| r.contains("alcohol")));
        assert!(recommendations.iter().any(|r| r.contains("caffeine")));
        assert!(recommendations.iter().any(|r| r.contains("screen time")));
        assert!(tips.iter().any(|t| t.contains("20-20-20")));
    }

    #[test]
    fn goal_units_match_kind() {
        let (goal, advice) = set_goal(GoalKind::Steps, 10000.0);
        assert_eq!(goal.unit, "steps");
        assert_eq!(goal.progress, 0.0);
        assert_eq!(advice.len(), 2);
        let (goal, _) = set_goal(GoalKind::ScreenTime, 2.0);
        assert_eq!(goal.unit, "hours");
    }

    #[test]
    fn recommendations_are_capped_at_five() {
        let (recommendations, habits) = general_recommendations();
        assert_eq!(recommendations.len(), 5);
        assert_eq!(habits.len(), 5);
    }

    #[test]
    fn habit_coaching_exact_key_lookup() {
        let (strategies, _, _) = habit_coaching(Some("exercise"));
        assert!(strategies[0].contains("10-minute walks"));
        // Phrases that are not exact table keys fall back to generic advice
        let (strategies, tips, analysis) = habit_coaching(Some("water intake"));
        assert!(strategies[0].contains("Start small"));
        assert_eq!(strategies.len(), 5);
        assert_eq!(tips.len(), 4);
        assert!(analysis.contains("gradual process"));
    }
}
